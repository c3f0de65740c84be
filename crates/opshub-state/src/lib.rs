//! # opshub-state
//!
//! The record-management core shared by the OpsHub views: owned record
//! stores with pure reducers, a tagged modal state machine, form staging
//! drafts, the derived filter/search view, session seed data, and the
//! per-domain workspaces tying those parts together.
//!
//! Everything here is synchronous and in-memory. State lives for one
//! session and mutates only in response to discrete user actions.

pub mod board;
pub mod draft;
pub mod library;
pub mod modal;
pub mod requests;
pub mod seed;
pub mod store;
pub mod view;

pub use board::EventBoard;
pub use draft::{EventDraft, FileDraft};
pub use library::FileLibrary;
pub use modal::ModalState;
pub use requests::RequestLog;
pub use store::RecordStore;
