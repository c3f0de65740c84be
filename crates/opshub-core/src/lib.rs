//! # opshub-core
//!
//! Core crate for OpsHub. Contains typed record identifiers, the
//! identifier sequence, filter/search query types, the side-effect
//! capability trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other OpsHub crates.

pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
