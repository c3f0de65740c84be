//! Significant event entity model.

use serde::{Deserialize, Serialize};

use opshub_core::types::{Categorized, EventId, Keyed, Searchable};

use crate::priority::Priority;

use super::status::EventStatus;

/// A significant event tracked on the operations board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier, immutable once assigned.
    pub id: EventId,
    /// Short human-readable title.
    pub title: String,
    /// Event type, e.g. "Natural Disaster" or "Traffic Incident".
    #[serde(rename = "type")]
    pub event_type: String,
    /// Current lifecycle status.
    pub status: EventStatus,
    /// Severity of the event.
    pub priority: Priority,
    /// Affected location.
    pub location: String,
    /// When the event started (free-text timestamp).
    pub start_date: String,
    /// Longer description of the situation.
    pub description: String,
    /// Teams assigned to respond. Duplicates are not prevented.
    pub assigned_teams: Vec<String>,
}

impl Event {
    /// Check whether the event is still active. Only active events offer
    /// the close action.
    pub fn is_active(&self) -> bool {
        self.status == EventStatus::Active
    }
}

impl Keyed for Event {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Searchable for Event {
    fn display_name(&self) -> &str {
        &self.title
    }

    fn labels(&self) -> &[String] {
        &self.assigned_teams
    }
}

impl Categorized for Event {
    fn category(&self) -> &str {
        &self.event_type
    }
}
