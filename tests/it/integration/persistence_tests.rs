//! Persistence workflow tests: debounced saves, preview captures, and the
//! full save/load round trip.

use crate::helpers::*;
use paperboard::store::{decode_load_response, BoardStore, MemoryChannel};
use paperboard::types::{Board, Note, NoteKind};
use serde_json::json;
use std::time::{Duration, Instant};

#[test]
fn test_saves_are_debounced() {
    let (mut store, channel) = empty_store();
    let t0 = Instant::now();

    store.update_active(t0, |board| {
        board.add_note(Note::new(NoteKind::Text));
    });

    // Still inside the debounce window: nothing goes out.
    assert!(!store.poll_save(t0 + Duration::from_millis(400)).unwrap());
    assert_eq!(channel.save_count(), 0);

    // A second mutation restarts the window.
    store.update_active(t0 + Duration::from_millis(800), |board| {
        board.add_note(Note::new(NoteKind::Text));
    });
    assert!(!store.poll_save(t0 + Duration::from_millis(1500)).unwrap());

    // One second of inactivity: the write lands, once.
    assert!(store.poll_save(t0 + Duration::from_millis(1900)).unwrap());
    assert_eq!(channel.save_count(), 1);
    assert!(!store.poll_save(t0 + Duration::from_millis(3000)).unwrap());
}

#[test]
fn test_save_writes_entire_list_plus_active_id() {
    let a = Board::new("Alpha");
    let b = Board::new("Beta");
    let (mut store, channel) = seeded_store(&[a.clone(), b.clone()]);
    let t0 = Instant::now();

    store.activate_board(&b.id, t0);
    store.flush().unwrap();

    let saved = channel.snapshot().unwrap();
    let loaded = decode_load_response(&saved);
    assert_eq!(loaded.boards.len(), 2);
    assert_eq!(loaded.active_board_id.as_deref(), Some(b.id.as_str()));
}

#[test]
fn test_round_trip_through_channel() {
    let (mut store, channel) = empty_store();
    let t0 = Instant::now();

    store.update_active(t0, |board| {
        let mut note = Note::new(NoteKind::Link {
            link_url: Some("https://example.com".to_string()),
        });
        note.content = "reading list".to_string();
        board.add_note(note);
    });
    store.flush().unwrap();

    // A second store sharing the channel sees the same state.
    let mut second = BoardStore::new(Box::new(channel.clone()));
    second.load(Instant::now());

    assert_eq!(second.boards().len(), 1);
    let note = &second.active_board().notes[0];
    assert_eq!(note.content, "reading list");
    match &note.kind {
        NoteKind::Link { link_url } => {
            assert_eq!(link_url.as_deref(), Some("https://example.com"));
        }
        other => panic!("expected link, got {other:?}"),
    }
}

#[test]
fn test_preview_capture_persists_immediately() {
    let (mut store, channel) = empty_store();

    let capture = store.begin_preview_capture();
    assert!(store.capture_valid(&capture));
    assert!(store.finish_preview_capture(capture).unwrap());
    assert_eq!(channel.save_count(), 1);
}

#[test]
fn test_stale_preview_capture_aborts_without_saving() {
    let a = Board::new("Alpha");
    let b = Board::new("Beta");
    let (mut store, channel) = seeded_store(&[a, b.clone()]);
    let t0 = Instant::now();

    let capture = store.begin_preview_capture();

    // The active board changes during the capture's asynchronous wait.
    store.activate_board(&b.id, t0);
    assert!(!store.capture_valid(&capture));
    assert!(!store.finish_preview_capture(capture).unwrap());
    assert_eq!(channel.save_count(), 0);
}

#[test]
fn test_failed_save_keeps_store_dirty() {
    let mut store = BoardStore::new(Box::new(FailingChannel));
    let t0 = Instant::now();

    store.update_active(t0, |board| {
        board.add_note(Note::new(NoteKind::Text));
    });

    assert!(store.poll_save(t0 + Duration::from_millis(1500)).is_err());
    assert!(store.is_dirty());
}

#[test]
fn test_malformed_boards_survive_round_trip_as_filtered() {
    let good = Board::new("Good");
    let channel = MemoryChannel::seeded(json!([&good, {"name": "no id"}, null]));
    let mut store = BoardStore::new(Box::new(channel));
    store.load(Instant::now());

    assert_eq!(store.boards().len(), 1);
    assert_eq!(store.active_board().id, good.id);
}
