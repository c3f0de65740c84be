//! The significant events board.
//!
//! Owns the event store, the modal state machine, and the identifier
//! sequence for one session. All transitions are synchronous and driven by
//! discrete user actions.

use std::mem;

use tracing::info;

use opshub_core::types::{FilterQuery, IdSequence, Keyed};
use opshub_core::{AppError, AppResult};
use opshub_entity::event::{Event, EventStatus};

use crate::draft::EventDraft;
use crate::modal::ModalState;
use crate::seed;
use crate::store::RecordStore;
use crate::view;

/// One session's event view: store + modal controller + staging draft.
#[derive(Debug, Clone)]
pub struct EventBoard {
    store: RecordStore<Event>,
    modal: ModalState<Event, EventDraft>,
    ids: IdSequence,
}

impl EventBoard {
    /// Identifier prefix for events.
    const ID_PREFIX: &'static str = "EV";
    /// Zero-padding width of event identifiers.
    const ID_WIDTH: usize = 3;

    /// Create an empty board.
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Create a board pre-populated with the session seed events.
    pub fn seeded() -> Self {
        Self::from_records(seed::events())
    }

    /// Create a board from an existing collection. The identifier sequence
    /// is seeded past the highest suffix present so generated identifiers
    /// never collide.
    pub fn from_records(records: Vec<Event>) -> Self {
        let ids = IdSequence::seeded(
            Self::ID_PREFIX,
            Self::ID_WIDTH,
            records.iter().map(|e| e.key()),
        );
        Self {
            store: RecordStore::from_records(records),
            modal: ModalState::Closed,
            ids,
        }
    }

    /// All events in board order.
    pub fn events(&self) -> &[Event] {
        self.store.records()
    }

    /// Look up an event by identifier.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.store.get(id)
    }

    /// The current modal state.
    pub fn modal(&self) -> &ModalState<Event, EventDraft> {
        &self.modal
    }

    /// Events matching the given filter query, in board order.
    pub fn filtered(&self, query: &FilterQuery) -> Vec<&Event> {
        view::filter_records(self.store.records(), query)
    }

    /// Type selector options derived from the current store.
    pub fn categories(&self) -> Vec<String> {
        view::category_options(self.store.records())
    }

    /// Whether the close action is offered for the given event. Only
    /// active events can be closed.
    pub fn can_close(&self, id: &str) -> bool {
        self.store.get(id).is_some_and(Event::is_active)
    }

    /// Open the read-only detail modal for an event.
    pub fn open_view(&mut self, id: &str) -> AppResult<()> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?
            .clone();
        self.modal = ModalState::Viewing(event);
        Ok(())
    }

    /// Open the edit modal for an event, seeding the draft from the
    /// record. Reachable from the list or, via [`Self::edit_from_view`],
    /// from the detail modal.
    pub fn open_edit(&mut self, id: &str) -> AppResult<()> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?
            .clone();
        let buffer = EventDraft::from_event(&event);
        self.modal = ModalState::Editing {
            original: event,
            buffer,
        };
        Ok(())
    }

    /// Switch from the detail modal to the edit modal for the same event.
    /// The detail modal closes first; its record seeds the draft.
    pub fn edit_from_view(&mut self) -> AppResult<()> {
        let id = self
            .modal
            .viewing()
            .map(|e| e.id.clone())
            .ok_or_else(|| AppError::conflict("No event detail modal is open"))?;
        self.open_edit(id.as_str())
    }

    /// Open the create modal with a default draft: a freshly generated
    /// identifier, status Active, and priority Medium.
    pub fn open_new(&mut self) {
        let id = self.ids.next_id();
        self.modal = ModalState::Creating(EventDraft::new(id.into()));
    }

    /// Cancel the open modal, discarding any staging draft.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// The staging draft of the open edit/create modal, if any.
    pub fn draft(&self) -> Option<&EventDraft> {
        self.modal.buffer()
    }

    /// Mutable access to the staging draft for field edits.
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        self.modal.buffer_mut()
    }

    /// Commit the edit draft back into the store by the original record's
    /// identifier, then close the modal.
    pub fn save_edit(&mut self) -> AppResult<Event> {
        match mem::take(&mut self.modal) {
            ModalState::Editing { original, buffer } => {
                let updated = buffer.build();
                self.store = self.store.update_by_key(original.key(), updated.clone());
                info!(event_id = %updated.id, "event updated");
                Ok(updated)
            }
            other => {
                self.modal = other;
                Err(AppError::conflict("No event edit modal is open"))
            }
        }
    }

    /// Commit the create draft as a new event, then close the modal. The
    /// submit guard requires title, type, and location to be present.
    pub fn create(&mut self) -> AppResult<Event> {
        match mem::take(&mut self.modal) {
            ModalState::Creating(buffer) => {
                if !buffer.is_submittable() {
                    self.modal = ModalState::Creating(buffer);
                    return Err(AppError::validation(
                        "Title, type, and location are required to create an event",
                    ));
                }
                let event = buffer.build();
                self.store = self.store.add(event.clone());
                info!(event_id = %event.id, title = %event.title, "event created");
                Ok(event)
            }
            other => {
                self.modal = other;
                Err(AppError::conflict("No event create modal is open"))
            }
        }
    }

    /// Close an event: a status-only transition to Resolved preserving
    /// every other field. A key miss is a silent no-op.
    pub fn close_event(&mut self, id: &str) {
        self.store = self.store.map_by_key(id, |event| Event {
            status: EventStatus::Resolved,
            ..event.clone()
        });
        info!(event_id = id, "event closed");
    }
}

impl Default for EventBoard {
    fn default() -> Self {
        Self::new()
    }
}
