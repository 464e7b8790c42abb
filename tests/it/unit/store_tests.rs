//! Unit tests for the board store: load, migration, guards, naming.

use crate::helpers::{seeded_store, FailingChannel, TestBoardBuilder};
use paperboard::store::{BoardStore, MemoryChannel};
use paperboard::types::{Board, Note, NoteKind};
use serde_json::json;
use std::time::{Duration, Instant};

#[test]
fn test_store_is_never_empty() {
    let store = BoardStore::new(Box::new(MemoryChannel::new()));
    assert_eq!(store.boards().len(), 1);
    assert_eq!(store.active_board().id, store.active_board_id());
}

#[test]
fn test_load_failure_synthesizes_default_board() {
    let mut store = BoardStore::new(Box::new(FailingChannel));
    store.load(Instant::now());

    assert_eq!(store.boards().len(), 1);
    assert_eq!(store.active_board().name, "Board 1");
}

#[test]
fn test_load_empty_list_synthesizes_default_board() {
    let (store, _channel) = seeded_store(&[]);
    assert_eq!(store.boards().len(), 1);
    assert_eq!(store.active_board().name, "Board 1");
    assert!(store.is_dirty());
}

#[test]
fn test_load_envelope_resolves_active_id() {
    let a = Board::new("Alpha");
    let b = Board::new("Beta");
    let channel = MemoryChannel::seeded(json!({
        "boards": [&a, &b],
        "activeBoardId": &b.id,
    }));
    let mut store = BoardStore::new(Box::new(channel));
    store.load(Instant::now());

    assert_eq!(store.boards().len(), 2);
    assert_eq!(store.active_board().id, b.id);
}

#[test]
fn test_unknown_active_id_falls_back_to_first() {
    let a = Board::new("Alpha");
    let channel = MemoryChannel::seeded(json!({
        "boards": [&a],
        "activeBoardId": "gone",
    }));
    let mut store = BoardStore::new(Box::new(channel));
    store.load(Instant::now());

    assert_eq!(store.active_board().id, a.id);
}

#[test]
fn test_pending_navigation_honored_once() {
    let a = Board::new("Alpha");
    let b = Board::new("Beta");
    let channel = MemoryChannel::seeded(json!([&a, &b]));
    let mut store = BoardStore::new(Box::new(channel));

    store.request_navigation(b.id.clone());
    store.load(Instant::now());
    assert_eq!(store.active_board().id, b.id);

    // The request was consumed; a reload falls back to the first board.
    store.load(Instant::now());
    assert_eq!(store.active_board().id, a.id);
}

#[test]
fn test_load_migrates_legacy_image_notes() {
    let mut board = Board::new("Photos");
    let mut legacy = Note::new(NoteKind::Image { image_url: None });
    legacy.attachment_style = None;
    board.add_note(legacy);

    let (store, _channel) = seeded_store(&[board]);
    assert_eq!(
        store.active_board().notes[0].attachment_style.as_deref(),
        Some("tape-orange")
    );
    // Migrations are transparently re-persisted.
    assert!(store.is_dirty());
}

#[test]
fn test_creation_guard_suppresses_duplicates() {
    let (mut store, _channel) = seeded_store(&[Board::new("Board 1")]);
    let t0 = Instant::now();

    let first = store.create_board(t0);
    assert!(first.is_some());
    assert!(store.create_board(t0 + Duration::from_millis(50)).is_none());

    // Settling the creation releases the guard.
    store.creation_settled();
    assert!(store
        .create_board(t0 + Duration::from_millis(60))
        .is_some());
}

#[test]
fn test_creation_guard_times_out() {
    let (mut store, _channel) = seeded_store(&[Board::new("Board 1")]);
    let t0 = Instant::now();

    store.create_board(t0);
    assert!(store
        .create_board(t0 + Duration::from_millis(150))
        .is_some());
}

#[test]
fn test_auto_naming_skips_existing_numbers() {
    let (mut store, _channel) = seeded_store(&[Board::new("Board 1")]);
    let id = store.create_board(Instant::now()).unwrap();
    assert_eq!(store.board(&id).unwrap().name, "Board 2");
}

#[test]
fn test_created_board_becomes_active_and_empty() {
    let (mut store, _channel) = seeded_store(&[Board::new("Board 1")]);
    let id = store.create_board(Instant::now()).unwrap();

    assert_eq!(store.active_board_id(), id);
    assert!(store.active_board().notes.is_empty());
}

#[test]
fn test_deleting_last_board_is_a_noop() {
    let (mut store, _channel) = seeded_store(&[Board::new("Board 1")]);
    let id = store.active_board().id.clone();

    assert!(!store.delete_board(&id, Instant::now()));
    assert_eq!(store.boards().len(), 1);
}

#[test]
fn test_deleting_active_board_falls_back_to_first() {
    let a = Board::new("Alpha");
    let b = Board::new("Beta");
    let (mut store, _channel) = seeded_store(&[a.clone(), b.clone()]);
    let now = Instant::now();

    assert!(store.activate_board(&b.id, now));
    assert!(store.delete_board(&b.id, now));

    assert_eq!(store.boards().len(), 1);
    assert_eq!(store.active_board().id, a.id);
}

#[test]
fn test_activate_touches_last_accessed() {
    let a = Board::new("Alpha");
    let b = Board::new("Beta");
    let (mut store, _channel) = seeded_store(&[a, b.clone()]);

    assert!(store.board(&b.id).unwrap().last_accessed.is_none());
    store.activate_board(&b.id, Instant::now());
    assert!(store.board(&b.id).unwrap().last_accessed.is_some());
}

#[test]
fn test_rename_board_trims_and_rejects_empty() {
    let (mut store, _channel) = seeded_store(&[Board::new("Board 1")]);
    let id = store.active_board().id.clone();
    let now = Instant::now();

    assert!(store.rename_board(&id, "  Plans  ", now));
    assert_eq!(store.active_board().name, "Plans");
    assert!(!store.rename_board(&id, "   ", now));
    assert_eq!(store.active_board().name, "Plans");
}

#[test]
fn test_load_during_pending_creation_keeps_selection() {
    let persisted = Board::new("Alpha");
    let channel = MemoryChannel::seeded(json!([persisted.clone()]));
    let mut store = BoardStore::new(Box::new(channel));
    let t0 = Instant::now();

    // User hits "new board" before the startup load lands.
    let created = store.create_board(t0).unwrap();
    store.load(t0 + Duration::from_millis(10));

    assert_eq!(store.active_board_id(), created);
    assert!(store.board(&persisted.id).is_some());
    assert!(store.board(&created).is_some());
}

#[test]
fn test_search_filters_across_variants() {
    let board = TestBoardBuilder::new()
        .with_text_note("quarterly planning", (0.0, 0.0))
        .with_text_note("grocery run", (300.0, 0.0))
        .with_note(
            NoteKind::Link {
                link_url: Some("https://example.com/planning-doc".to_string()),
            },
            (600.0, 0.0),
            (220.0, 160.0),
        )
        .build();
    let (store, _channel) = seeded_store(&[board]);

    let notes = &store.active_board().notes;
    let hits = paperboard::content::search::filter(notes, "PLANNING");
    assert_eq!(hits.len(), 2);
    let hits = paperboard::content::search::filter(notes, "grocery");
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_update_active_marks_dirty() {
    let board = TestBoardBuilder::new().with_name("Board 1").build();
    let (mut store, _channel) = seeded_store(&[board]);
    assert!(!store.is_dirty());

    store.update_active(Instant::now(), |board| {
        board.add_note(Note::new(NoteKind::Text));
    });
    assert!(store.is_dirty());
    assert_eq!(store.active_board().notes.len(), 1);
}
