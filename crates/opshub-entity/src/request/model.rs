//! Resource request entity model.

use serde::{Deserialize, Serialize};

use opshub_core::types::{Keyed, RequestId};

use crate::priority::Priority;

use super::status::RequestStatus;

/// A request for supplies, equipment, or personnel.
///
/// Resource requests are display-only: no create, edit, or delete path
/// exists for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Unique request identifier.
    pub id: RequestId,
    /// What is being requested, e.g. "Emergency Supplies".
    pub request_type: String,
    /// Review status.
    pub status: RequestStatus,
    /// Urgency of the request.
    pub priority: Priority,
    /// Person who filed the request.
    pub requested_by: String,
    /// Originating department.
    pub department: String,
    /// When the request was filed (free-text timestamp).
    pub date_requested: String,
    /// Requested line items.
    pub items: Vec<String>,
    /// Free-form notes.
    pub notes: String,
}

impl Keyed for ResourceRequest {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}
