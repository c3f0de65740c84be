//! # opshub-entity
//!
//! Domain entity models for OpsHub. Every struct in this crate represents
//! one record held in a view's store. All entities derive `Debug`,
//! `Clone`, `PartialEq`, `Serialize`, and `Deserialize`, and implement
//! `Keyed` from `opshub-core`; filterable entities also implement
//! `Searchable` and `Categorized`.

pub mod event;
pub mod file;
pub mod priority;
pub mod request;

pub use priority::Priority;
