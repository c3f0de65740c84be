//! Form staging drafts.
//!
//! A draft is the scratch copy of a record under creation or edit. Each
//! form input replaces exactly one field; nothing touches the record store
//! until the draft is committed. Cancel discards the draft outright.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use opshub_core::types::{EventId, FileId};
use opshub_entity::event::{Event, EventStatus};
use opshub_entity::file::{FileKind, StoredFile};
use opshub_entity::priority::Priority;

/// Scratch copy of an event under creation or edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Pre-assigned identifier; shown read-only in the form.
    pub id: EventId,
    /// Title field.
    pub title: String,
    /// Event type field.
    pub event_type: String,
    /// Status selector.
    pub status: EventStatus,
    /// Priority selector.
    pub priority: Priority,
    /// Location field.
    pub location: String,
    /// Start timestamp field (free text).
    pub start_date: String,
    /// Description field.
    pub description: String,
    /// Assigned teams, edited via explicit add/remove actions.
    pub assigned_teams: Vec<String>,
}

impl EventDraft {
    /// Default draft for a new event: the given fresh identifier, status
    /// Active, priority Medium, and the start timestamp defaulting to now.
    pub fn new(id: EventId) -> Self {
        Self {
            id,
            title: String::new(),
            event_type: String::new(),
            status: EventStatus::Active,
            priority: Priority::Medium,
            location: String::new(),
            start_date: Utc::now().format("%Y-%m-%d %H:%M").to_string(),
            description: String::new(),
            assigned_teams: Vec::new(),
        }
    }

    /// Seed a draft from an existing event for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            event_type: event.event_type.clone(),
            status: event.status,
            priority: event.priority,
            location: event.location.clone(),
            start_date: event.start_date.clone(),
            description: event.description.clone(),
            assigned_teams: event.assigned_teams.clone(),
        }
    }

    /// Replace the title field.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    /// Replace the event type field.
    pub fn set_event_type(&mut self, value: impl Into<String>) {
        self.event_type = value.into();
    }

    /// Replace the status selection.
    pub fn set_status(&mut self, value: EventStatus) {
        self.status = value;
    }

    /// Replace the priority selection.
    pub fn set_priority(&mut self, value: Priority) {
        self.priority = value;
    }

    /// Replace the location field.
    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
    }

    /// Replace the start timestamp field.
    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.start_date = value.into();
    }

    /// Replace the description field.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Append a team. The input is trimmed; empty input is ignored.
    /// Duplicates are allowed.
    pub fn add_team(&mut self, team: &str) {
        let trimmed = team.trim();
        if !trimmed.is_empty() {
            self.assigned_teams.push(trimmed.to_string());
        }
    }

    /// Remove every team exactly matching `team`. Removal is value-based,
    /// so duplicate team names cannot be removed individually.
    pub fn remove_team(&mut self, team: &str) {
        self.assigned_teams.retain(|t| t != team);
    }

    /// Advisory submit guard for the create form: title, type, and
    /// location must be non-empty.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.event_type.is_empty() && !self.location.is_empty()
    }

    /// Convert the draft into an event record.
    pub fn build(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            event_type: self.event_type,
            status: self.status,
            priority: self.priority,
            location: self.location,
            start_date: self.start_date,
            description: self.description,
            assigned_teams: self.assigned_teams,
        }
    }
}

/// Scratch copy of a file under upload or edit.
///
/// Tags are staged as one comma-separated text field and only split into a
/// sequence when the draft is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDraft {
    /// Pre-assigned identifier; shown read-only in the form.
    pub id: FileId,
    /// File name field.
    pub name: String,
    /// Kind selector.
    pub kind: FileKind,
    /// Display size field.
    pub size: String,
    /// Uploader field.
    pub uploaded_by: String,
    /// Upload date field (free text).
    pub upload_date: String,
    /// Category field.
    pub category: String,
    /// Comma-separated tag input, split at commit time.
    pub tags_input: String,
}

impl FileDraft {
    /// Default draft for a new upload: the given fresh identifier, kind
    /// Document, category General, and the upload date set to today.
    pub fn new(id: FileId) -> Self {
        Self {
            id,
            name: String::new(),
            kind: FileKind::Document,
            size: String::new(),
            uploaded_by: String::new(),
            upload_date: Utc::now().format("%Y-%m-%d").to_string(),
            category: "General".to_string(),
            tags_input: String::new(),
        }
    }

    /// Seed a draft from an existing file for editing. Tags are joined
    /// back into the comma-separated input field.
    pub fn from_file(file: &StoredFile) -> Self {
        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            kind: file.kind,
            size: file.size.clone(),
            uploaded_by: file.uploaded_by.clone(),
            upload_date: file.upload_date.clone(),
            category: file.category.clone(),
            tags_input: file.tags.join(", "),
        }
    }

    /// Replace the name field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Replace the kind selection.
    pub fn set_kind(&mut self, value: FileKind) {
        self.kind = value;
    }

    /// Replace the display size field.
    pub fn set_size(&mut self, value: impl Into<String>) {
        self.size = value.into();
    }

    /// Replace the uploader field.
    pub fn set_uploaded_by(&mut self, value: impl Into<String>) {
        self.uploaded_by = value.into();
    }

    /// Replace the upload date field.
    pub fn set_upload_date(&mut self, value: impl Into<String>) {
        self.upload_date = value.into();
    }

    /// Replace the category field.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
    }

    /// Replace the comma-separated tag input.
    pub fn set_tags_input(&mut self, value: impl Into<String>) {
        self.tags_input = value.into();
    }

    /// Advisory submit guard for the upload form: the name must be
    /// non-empty.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Convert the draft into a file record, splitting the tag input on
    /// commas, trimming each segment, and dropping empty ones.
    pub fn build(self) -> StoredFile {
        let tags = self
            .tags_input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        StoredFile {
            id: self.id,
            name: self.name,
            kind: self.kind,
            size: self.size,
            uploaded_by: self.uploaded_by,
            upload_date: self.upload_date,
            category: self.category,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_draft_defaults() {
        let draft = EventDraft::new(EventId::new("EV-004"));
        assert_eq!(draft.status, EventStatus::Active);
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.assigned_teams.is_empty());
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_add_team_trims_and_skips_empty() {
        let mut draft = EventDraft::new(EventId::new("EV-004"));
        draft.add_team("  Red Cross  ");
        draft.add_team("   ");
        assert_eq!(draft.assigned_teams, vec!["Red Cross".to_string()]);
    }

    #[test]
    fn test_add_then_remove_team_restores_prior_state() {
        let mut draft = EventDraft::new(EventId::new("EV-004"));
        draft.add_team("Fire Department");
        let before = draft.assigned_teams.clone();
        draft.add_team("Red Cross");
        draft.remove_team("Red Cross");
        assert_eq!(draft.assigned_teams, before);
    }

    #[test]
    fn test_remove_team_removes_all_duplicates() {
        let mut draft = EventDraft::new(EventId::new("EV-004"));
        draft.add_team("Police Department");
        draft.add_team("Police Department");
        draft.remove_team("Police Department");
        assert!(draft.assigned_teams.is_empty());
    }

    #[test]
    fn test_event_submit_guard_requires_title_type_location() {
        let mut draft = EventDraft::new(EventId::new("EV-004"));
        draft.set_title("Warehouse Fire");
        draft.set_event_type("Fire");
        assert!(!draft.is_submittable());
        draft.set_location("Industrial District");
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_file_draft_defaults() {
        let draft = FileDraft::new(FileId::new("DOC-004"));
        assert_eq!(draft.kind, FileKind::Document);
        assert_eq!(draft.category, "General");
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_file_build_splits_and_trims_tags() {
        let mut draft = FileDraft::new(FileId::new("DOC-004"));
        draft.set_name("Shelter Roster.xlsx");
        draft.set_tags_input(" shelter , roster ,, staffing ");
        let file = draft.build();
        assert_eq!(file.tags, vec!["shelter", "roster", "staffing"]);
    }

    #[test]
    fn test_file_tags_round_trip_through_edit() {
        let mut draft = FileDraft::new(FileId::new("DOC-004"));
        draft.set_name("Plan.pdf");
        draft.set_tags_input("emergency, response");
        let file = draft.build();
        let reopened = FileDraft::from_file(&file);
        assert_eq!(reopened.tags_input, "emergency, response");
    }
}
