//! Newtype wrappers around display identifiers for all domain records.
//!
//! Using distinct types prevents accidentally passing an `EventId` where a
//! `FileId` is expected. Identifiers are short human-readable strings such
//! as `EV-001` or `DOC-002`, produced by an [`IdSequence`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around a display string.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from an existing display string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string value.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a significant event.
    EventId
);

define_id!(
    /// Unique identifier for a library file.
    FileId
);

define_id!(
    /// Unique identifier for a resource request.
    RequestId
);

/// A record with a stable identifier key.
///
/// Implemented by every entity held in a record store; reducers locate
/// records by this key.
pub trait Keyed {
    /// The record's identifier as a string slice.
    fn key(&self) -> &str;
}

/// Monotonic identifier sequence for one record domain.
///
/// Produces zero-padded identifiers like `EV-004`, `DOC-012`. The counter
/// only ever moves forward, so identifiers stay unique for the session even
/// after records are deleted and recreated. This replaces the
/// collision-prone collection-length scheme the dashboard originally used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    /// Domain prefix, e.g. `EV` or `DOC`.
    prefix: String,
    /// Zero-padding width of the numeric suffix.
    width: usize,
    /// The next counter value to hand out.
    next: u64,
}

impl IdSequence {
    /// Create a fresh sequence starting at 1.
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            next: 1,
        }
    }

    /// Create a sequence seeded past the highest numeric suffix among
    /// `existing` identifiers, so freshly generated identifiers never
    /// collide with seeded records.
    pub fn seeded<'a>(
        prefix: impl Into<String>,
        width: usize,
        existing: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(|id| id.rsplit('-').next())
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix: prefix.into(),
            width,
            next: highest + 1,
        }
    }

    /// Generate the next identifier and advance the counter.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{:0width$}", self.prefix, self.next, width = self.width);
        self.next += 1;
        id
    }
}
