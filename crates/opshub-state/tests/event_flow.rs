//! End-to-end flows for the events board: create, view, edit, close.

use opshub_entity::event::EventStatus;
use opshub_entity::priority::Priority;
use opshub_state::{EventBoard, ModalState};

#[test]
fn create_adds_exactly_one_record_with_submitted_values() {
    let mut board = EventBoard::seeded();
    let before = board.events().len();

    board.open_new();
    {
        let draft = board.draft_mut().expect("create modal open");
        draft.set_title("Warehouse Fire");
        draft.set_event_type("Fire");
        draft.set_priority(Priority::High);
        draft.set_location("Industrial District");
        draft.set_description("Smoke reported at the east warehouse.");
        draft.add_team("Fire Department");
    }
    let created = board.create().expect("guarded submit passes");

    assert_eq!(board.events().len(), before + 1);
    let matches: Vec<_> = board
        .events()
        .iter()
        .filter(|e| e.id == created.id)
        .collect();
    assert_eq!(matches.len(), 1);
    let event = matches[0];
    assert_eq!(event.title, "Warehouse Fire");
    assert_eq!(event.event_type, "Fire");
    assert_eq!(event.priority, Priority::High);
    assert_eq!(event.status, EventStatus::Active);
    assert_eq!(event.location, "Industrial District");
    assert_eq!(event.assigned_teams, vec!["Fire Department".to_string()]);
    assert!(board.modal().is_closed());
}

#[test]
fn created_ids_are_distinct_from_all_existing_ones() {
    let mut board = EventBoard::seeded();

    for _ in 0..3 {
        board.open_new();
        let draft = board.draft_mut().unwrap();
        draft.set_title("Drill");
        draft.set_event_type("Exercise");
        draft.set_location("City Hall");
        board.create().unwrap();
    }

    let mut ids: Vec<_> = board.events().iter().map(|e| e.id.as_str()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn ids_stay_unique_after_delete_style_churn() {
    // The legacy length-derived scheme collided once the counter diverged
    // from the collection; the monotonic sequence must not.
    let mut board = EventBoard::from_records(opshub_state::seed::events());
    board.open_new();
    let first_id = board.draft().unwrap().id.clone();
    board.cancel();

    board.open_new();
    let second_id = board.draft().unwrap().id.clone();
    assert_ne!(first_id, second_id);
}

#[test]
fn create_guard_blocks_incomplete_draft_and_keeps_modal_open() {
    let mut board = EventBoard::seeded();
    board.open_new();
    board.draft_mut().unwrap().set_title("No location yet");

    let err = board.create().unwrap_err();
    assert_eq!(err.kind, opshub_core::error::ErrorKind::Validation);
    // The draft survives for correction.
    assert_eq!(board.draft().unwrap().title, "No location yet");
}

#[test]
fn cancel_discards_the_draft() {
    let mut board = EventBoard::seeded();
    let before = board.events().to_vec();

    board.open_new();
    board.draft_mut().unwrap().set_title("Discarded");
    board.cancel();

    assert!(board.modal().is_closed());
    assert_eq!(board.events(), &before[..]);
}

#[test]
fn edit_commits_by_identifier_and_closes_modal() {
    let mut board = EventBoard::seeded();
    board.open_edit("EV-002").unwrap();
    board.draft_mut().unwrap().set_priority(Priority::Critical);
    let updated = board.save_edit().unwrap();

    assert_eq!(updated.id.as_str(), "EV-002");
    assert_eq!(
        board.get("EV-002").unwrap().priority,
        Priority::Critical
    );
    assert!(board.modal().is_closed());
    // Other records pass through unchanged.
    assert_eq!(board.get("EV-001").unwrap().priority, Priority::Critical);
    assert_eq!(board.get("EV-003").unwrap().priority, Priority::Medium);
}

#[test]
fn edit_is_reachable_from_the_detail_modal() {
    let mut board = EventBoard::seeded();
    board.open_view("EV-001").unwrap();
    assert!(matches!(board.modal(), ModalState::Viewing(_)));

    board.edit_from_view().unwrap();
    match board.modal() {
        ModalState::Editing { original, buffer } => {
            assert_eq!(original.id.as_str(), "EV-001");
            assert_eq!(buffer.title, original.title);
        }
        other => panic!("expected edit modal, got {other:?}"),
    }
}

#[test]
fn close_event_changes_only_the_status_field() {
    let mut board = EventBoard::seeded();
    let before = board.get("EV-001").unwrap().clone();
    assert!(board.can_close("EV-001"));

    board.close_event("EV-001");

    let after = board.get("EV-001").unwrap();
    assert_eq!(after.status, EventStatus::Resolved);
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.event_type, before.event_type);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.location, before.location);
    assert_eq!(after.start_date, before.start_date);
    assert_eq!(after.description, before.description);
    assert_eq!(after.assigned_teams, before.assigned_teams);
    // The close action is no longer offered.
    assert!(!board.can_close("EV-001"));
}

#[test]
fn close_event_miss_is_a_silent_noop() {
    let mut board = EventBoard::seeded();
    let before = board.events().to_vec();
    board.close_event("EV-999");
    assert_eq!(board.events(), &before[..]);
}

#[test]
fn view_and_edit_of_unknown_event_report_not_found() {
    let mut board = EventBoard::seeded();
    assert!(board.open_view("EV-999").is_err());
    assert!(board.open_edit("EV-999").is_err());
    assert!(board.modal().is_closed());
}

#[test]
fn team_add_then_remove_restores_the_buffer_exactly() {
    let mut board = EventBoard::seeded();
    board.open_new();
    {
        let draft = board.draft_mut().unwrap();
        draft.add_team("Fire Department");
    }
    let before = board.draft().unwrap().assigned_teams.clone();
    {
        let draft = board.draft_mut().unwrap();
        draft.add_team("Red Cross");
        draft.remove_team("Red Cross");
    }
    assert_eq!(board.draft().unwrap().assigned_teams, before);
}
