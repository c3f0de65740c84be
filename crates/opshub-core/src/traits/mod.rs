//! Core traits defined in `opshub-core` and implemented by other crates.

pub mod notifier;

pub use notifier::{Notifier, TracingNotifier};
