//! Core type definitions used across the OpsHub workspace.

pub mod filter;
pub mod id;

pub use filter::{ALL_CATEGORIES, Categorized, FilterQuery, Searchable};
pub use id::*;
