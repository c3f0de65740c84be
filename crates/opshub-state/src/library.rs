//! The shared file library.
//!
//! Owns the file store, the modal state machine, the persistent
//! filter/search inputs, and the injected [`Notifier`] through which
//! simulated downloads and shares are acknowledged.

use std::mem;
use std::sync::Arc;

use tracing::info;

use opshub_core::traits::Notifier;
use opshub_core::types::{FilterQuery, IdSequence, Keyed};
use opshub_core::{AppError, AppResult};
use opshub_entity::file::StoredFile;

use crate::draft::FileDraft;
use crate::modal::ModalState;
use crate::seed;
use crate::store::RecordStore;
use crate::view;

/// One session's file library view.
#[derive(Debug, Clone)]
pub struct FileLibrary {
    store: RecordStore<StoredFile>,
    modal: ModalState<StoredFile, FileDraft>,
    ids: IdSequence,
    query: FilterQuery,
    notifier: Arc<dyn Notifier>,
}

impl FileLibrary {
    /// Identifier prefix for library files.
    const ID_PREFIX: &'static str = "DOC";
    /// Zero-padding width of file identifiers.
    const ID_WIDTH: usize = 3;

    /// Create an empty library.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::from_records(Vec::new(), notifier)
    }

    /// Create a library pre-populated with the session seed files.
    pub fn seeded(notifier: Arc<dyn Notifier>) -> Self {
        Self::from_records(seed::files(), notifier)
    }

    /// Create a library from an existing collection, seeding the
    /// identifier sequence past the highest suffix present.
    pub fn from_records(records: Vec<StoredFile>, notifier: Arc<dyn Notifier>) -> Self {
        let ids = IdSequence::seeded(
            Self::ID_PREFIX,
            Self::ID_WIDTH,
            records.iter().map(|f| f.key()),
        );
        Self {
            store: RecordStore::from_records(records),
            modal: ModalState::Closed,
            ids,
            query: FilterQuery::default(),
            notifier,
        }
    }

    /// All files in library order, ignoring the filter.
    pub fn files(&self) -> &[StoredFile] {
        self.store.records()
    }

    /// Look up a file by identifier.
    pub fn get(&self, id: &str) -> Option<&StoredFile> {
        self.store.get(id)
    }

    /// The current modal state.
    pub fn modal(&self) -> &ModalState<StoredFile, FileDraft> {
        &self.modal
    }

    /// The current filter/search inputs.
    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Replace the search text.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    /// Replace the category selection.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.query.category = category.into();
    }

    /// The displayable subset: files matching the current search text and
    /// category selection, in library order. Purely derived.
    pub fn visible(&self) -> Vec<&StoredFile> {
        view::filter_records(self.store.records(), &self.query)
    }

    /// Category selector options derived from the current store.
    pub fn categories(&self) -> Vec<String> {
        view::category_options(self.store.records())
    }

    /// Open the read-only detail modal for a file.
    pub fn open_view(&mut self, id: &str) -> AppResult<()> {
        let file = self.require(id)?.clone();
        self.modal = ModalState::Viewing(file);
        Ok(())
    }

    /// Open the edit modal for a file, seeding the draft from the record.
    pub fn open_edit(&mut self, id: &str) -> AppResult<()> {
        let file = self.require(id)?.clone();
        let buffer = FileDraft::from_file(&file);
        self.modal = ModalState::Editing {
            original: file,
            buffer,
        };
        Ok(())
    }

    /// Switch from the detail modal to the edit modal for the same file.
    pub fn edit_from_view(&mut self) -> AppResult<()> {
        let id = self
            .modal
            .viewing()
            .map(|f| f.id.clone())
            .ok_or_else(|| AppError::conflict("No file detail modal is open"))?;
        self.open_edit(id.as_str())
    }

    /// Open the upload modal with a default draft: a freshly generated
    /// identifier, kind Document, category General, and today's date.
    pub fn open_upload(&mut self) {
        let id = self.ids.next_id();
        self.modal = ModalState::Creating(FileDraft::new(id.into()));
    }

    /// Open the share modal for a file.
    pub fn open_share(&mut self, id: &str) -> AppResult<()> {
        let file = self.require(id)?.clone();
        self.modal = ModalState::Sharing(file);
        Ok(())
    }

    /// Cancel the open modal, discarding any staging draft.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// The staging draft of the open edit/upload modal, if any.
    pub fn draft(&self) -> Option<&FileDraft> {
        self.modal.buffer()
    }

    /// Mutable access to the staging draft for field edits.
    pub fn draft_mut(&mut self) -> Option<&mut FileDraft> {
        self.modal.buffer_mut()
    }

    /// Commit the upload draft as a new file, then close the modal. The
    /// submit guard requires the name to be present. No content is
    /// transferred; the record is metadata only.
    pub fn upload(&mut self) -> AppResult<StoredFile> {
        match mem::take(&mut self.modal) {
            ModalState::Creating(buffer) => {
                if !buffer.is_submittable() {
                    self.modal = ModalState::Creating(buffer);
                    return Err(AppError::validation("A file name is required to upload"));
                }
                let file = buffer.build();
                self.store = self.store.add(file.clone());
                info!(file_id = %file.id, name = %file.name, "file uploaded");
                self.notifier
                    .notify(&format!("Uploaded {}", file.name));
                Ok(file)
            }
            other => {
                self.modal = other;
                Err(AppError::conflict("No upload modal is open"))
            }
        }
    }

    /// Commit the edit draft back into the store by the original record's
    /// identifier, then close the modal.
    pub fn save_edit(&mut self) -> AppResult<StoredFile> {
        match mem::take(&mut self.modal) {
            ModalState::Editing { original, buffer } => {
                let updated = buffer.build();
                self.store = self.store.update_by_key(original.key(), updated.clone());
                info!(file_id = %updated.id, "file updated");
                Ok(updated)
            }
            other => {
                self.modal = other;
                Err(AppError::conflict("No file edit modal is open"))
            }
        }
    }

    /// Share the file in the open share modal with a destination address.
    /// On success the hand-off is acknowledged and the modal closes; on a
    /// missing destination the modal stays open for correction.
    pub fn share(&mut self, destination: &str) -> AppResult<()> {
        let file = self
            .modal
            .sharing()
            .ok_or_else(|| AppError::conflict("No share modal is open"))?;
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(AppError::validation("A destination address is required"));
        }
        self.notifier.transfer(&file.name, destination)?;
        self.notifier
            .notify(&format!("Shared {} with {destination}", file.name));
        info!(file_id = %file.id, destination, "file shared");
        self.modal = ModalState::Closed;
        Ok(())
    }

    /// Acknowledge a download of the given file. No bytes move.
    pub fn download(&self, id: &str) -> AppResult<()> {
        let file = self.require(id)?;
        self.notifier
            .notify(&format!("Downloading {}", file.name));
        info!(file_id = %file.id, "file download acknowledged");
        Ok(())
    }

    /// Delete a file from the library. Idempotent: deleting an absent
    /// identifier is a no-op. Confirmation is the front-end's
    /// responsibility; there is no undo.
    pub fn delete(&mut self, id: &str) {
        self.store = self.store.remove_by_key(id);
        info!(file_id = id, "file deleted");
    }

    fn require(&self, id: &str) -> AppResult<&StoredFile> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }
}
