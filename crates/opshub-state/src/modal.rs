//! Tagged modal state for a view.
//!
//! The dashboard originally tracked each modal with its own boolean flag
//! plus a separate selected-record slot, which allowed impossible
//! combinations like two modals open at once. Collapsing them into one
//! tagged union rules those states out by construction.

use serde::{Deserialize, Serialize};

/// Which modal dialog (if any) is open for a view, and its working data.
///
/// `R` is the record type shown or edited; `B` is the staging draft type.
/// At most one variant is ever active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalState<R, B> {
    /// No modal open.
    Closed,
    /// Read-only detail modal for a record.
    Viewing(R),
    /// Edit modal: the record under edit plus its staging draft.
    Editing {
        /// The record as it was when editing began; its identifier is the
        /// commit target.
        original: R,
        /// The scratch copy receiving field edits.
        buffer: B,
    },
    /// Create modal with a fresh staging draft.
    Creating(B),
    /// Share modal for a record.
    Sharing(R),
}

impl<R, B> ModalState<R, B> {
    /// Check whether no modal is open.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The record shown in the view modal, if one is open.
    pub fn viewing(&self) -> Option<&R> {
        match self {
            Self::Viewing(record) => Some(record),
            _ => None,
        }
    }

    /// The record offered for sharing, if the share modal is open.
    pub fn sharing(&self) -> Option<&R> {
        match self {
            Self::Sharing(record) => Some(record),
            _ => None,
        }
    }

    /// The staging draft, if an edit or create modal is open.
    pub fn buffer(&self) -> Option<&B> {
        match self {
            Self::Editing { buffer, .. } | Self::Creating(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Mutable access to the staging draft, if an edit or create modal is
    /// open. Each form input lands here as a single field assignment.
    pub fn buffer_mut(&mut self) -> Option<&mut B> {
        match self {
            Self::Editing { buffer, .. } | Self::Creating(buffer) => Some(buffer),
            _ => None,
        }
    }
}

impl<R, B> Default for ModalState<R, B> {
    fn default() -> Self {
        Self::Closed
    }
}
