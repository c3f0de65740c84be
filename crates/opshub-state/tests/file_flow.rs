//! End-to-end flows for the file library: search, upload, share, delete.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use opshub_core::AppResult;
use opshub_core::traits::Notifier;
use opshub_entity::file::FileKind;
use opshub_state::{FileLibrary, ModalState};

/// Notifier that records every acknowledgement for assertions.
#[derive(Debug, Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    transfers: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn transfers(&self) -> Vec<(String, String)> {
        self.transfers.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn transfer(&self, file_name: &str, destination: &str) -> AppResult<()> {
        self.transfers
            .lock()
            .unwrap()
            .push((file_name.to_string(), destination.to_string()));
        Ok(())
    }
}

fn seeded() -> (FileLibrary, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let library = FileLibrary::seeded(notifier.clone());
    (library, notifier)
}

#[test]
fn evac_search_with_all_categories_returns_exactly_the_matching_file() {
    let (mut library, _) = seeded();
    library.set_search("evac");

    let visible = library.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "DOC-002");
    assert_eq!(visible[0].name, "Evacuation Routes Map.jpg");
}

#[test]
fn search_matches_tags_case_insensitively() {
    let (mut library, _) = seeded();
    library.set_search("PROTOCOL");

    let visible = library.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "DOC-001");
}

#[test]
fn category_filter_and_search_combine() {
    let (mut library, _) = seeded();
    library.set_search("map");
    library.set_category("Templates");
    assert!(library.visible().is_empty());

    library.set_category("Maps");
    assert_eq!(library.visible().len(), 1);
}

#[test]
fn category_options_cover_distinct_values_plus_sentinel() {
    let (library, _) = seeded();
    assert_eq!(
        library.categories(),
        vec!["all", "Plans & Procedures", "Maps", "Templates"]
    );
}

#[test]
fn upload_with_default_kind_gains_fresh_id_and_todays_date() {
    let (mut library, _) = seeded();
    let existing: Vec<String> = library
        .files()
        .iter()
        .map(|f| f.id.as_str().to_string())
        .collect();

    library.open_upload();
    library.draft_mut().unwrap().set_name("Plan.pdf");
    let uploaded = library.upload().unwrap();

    assert_eq!(library.files().len(), 4);
    assert_eq!(uploaded.name, "Plan.pdf");
    assert_eq!(uploaded.kind, FileKind::Document);
    assert!(!existing.contains(&uploaded.id.as_str().to_string()));
    assert_eq!(
        uploaded.upload_date,
        Utc::now().format("%Y-%m-%d").to_string()
    );
}

#[test]
fn upload_guard_requires_a_name() {
    let (mut library, _) = seeded();
    library.open_upload();
    assert!(library.upload().is_err());
    // The modal stays open with the draft intact.
    assert!(library.draft().is_some());
}

#[test]
fn upload_splits_comma_separated_tags_at_submit() {
    let (mut library, _) = seeded();
    library.open_upload();
    {
        let draft = library.draft_mut().unwrap();
        draft.set_name("Shelter Roster.xlsx");
        draft.set_kind(FileKind::Spreadsheet);
        draft.set_category("Rosters");
        draft.set_tags_input("shelter, roster , staffing");
    }
    let uploaded = library.upload().unwrap();
    assert_eq!(uploaded.tags, vec!["shelter", "roster", "staffing"]);
    // The new category becomes a selector option.
    assert!(library.categories().contains(&"Rosters".to_string()));
}

#[test]
fn share_transfers_then_acknowledges_and_closes() {
    let (mut library, notifier) = seeded();
    library.open_share("DOC-001").unwrap();
    library.share("ops@city.example").unwrap();

    assert_eq!(
        notifier.transfers(),
        vec![(
            "Emergency Response Plan 2024.pdf".to_string(),
            "ops@city.example".to_string()
        )]
    );
    assert_eq!(
        notifier.messages(),
        vec!["Shared Emergency Response Plan 2024.pdf with ops@city.example".to_string()]
    );
    assert!(library.modal().is_closed());
}

#[test]
fn share_with_empty_destination_keeps_the_modal_open() {
    let (mut library, notifier) = seeded();
    library.open_share("DOC-001").unwrap();

    assert!(library.share("   ").is_err());
    assert!(matches!(library.modal(), ModalState::Sharing(_)));
    assert!(notifier.transfers().is_empty());

    library.cancel();
    assert!(library.modal().is_closed());
}

#[test]
fn download_acknowledges_by_name() {
    let (library, notifier) = seeded();
    library.download("DOC-003").unwrap();
    assert_eq!(
        notifier.messages(),
        vec!["Downloading Incident Report Template.docx".to_string()]
    );
    assert!(library.download("DOC-999").is_err());
}

#[test]
fn delete_removes_the_record_and_is_idempotent() {
    let (mut library, _) = seeded();
    library.delete("DOC-002");
    assert_eq!(library.files().len(), 2);
    assert!(library.get("DOC-002").is_none());

    library.delete("DOC-002");
    assert_eq!(library.files().len(), 2);
}

#[test]
fn id_generated_after_delete_does_not_collide() {
    // Deleting and re-uploading used to mint a colliding identifier under
    // the length-derived scheme.
    let (mut library, _) = seeded();
    library.delete("DOC-003");

    library.open_upload();
    library.draft_mut().unwrap().set_name("Replacement.docx");
    let uploaded = library.upload().unwrap();

    assert_ne!(uploaded.id.as_str(), "DOC-001");
    assert_ne!(uploaded.id.as_str(), "DOC-002");
    assert_eq!(uploaded.id.as_str(), "DOC-004");
}

#[test]
fn edit_commits_back_by_identifier() {
    let (mut library, _) = seeded();
    library.open_edit("DOC-003").unwrap();
    {
        let draft = library.draft_mut().unwrap();
        draft.set_category("Forms");
        draft.set_tags_input("incident, report, template, form");
    }
    let updated = library.save_edit().unwrap();

    assert_eq!(updated.id.as_str(), "DOC-003");
    let stored = library.get("DOC-003").unwrap();
    assert_eq!(stored.category, "Forms");
    assert_eq!(stored.tags.len(), 4);
    assert!(library.modal().is_closed());
}

#[test]
fn view_then_edit_path_closes_the_detail_modal_first() {
    let (mut library, _) = seeded();
    library.open_view("DOC-001").unwrap();
    library.edit_from_view().unwrap();
    match library.modal() {
        ModalState::Editing { original, .. } => {
            assert_eq!(original.id.as_str(), "DOC-001");
        }
        other => panic!("expected edit modal, got {other:?}"),
    }
}
