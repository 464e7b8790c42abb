//! Snapshot tests using the insta crate.
//!
//! The wire format is a compatibility contract with the backend channel:
//! persisted boards from older releases must keep loading. These snapshots
//! pin the exact serialized shape; update them only with a deliberate
//! format change (`cargo insta review`).

use paperboard::store::SaveRequest;
use paperboard::types::{Board, ListItem, Note, NoteKind};

fn pinned_list_note() -> Note {
    let mut item = ListItem::new("milk");
    item.id = "item-1".to_string();

    let mut note = Note::new(NoteKind::List {
        list_items: vec![item],
    });
    note.id = "note-1".to_string();
    note.x = 120.0;
    note.y = 80.0;
    note.width = 220.0;
    note.height = 240.0;
    note.content = "Groceries".to_string();
    note.color = "#fff9b1".to_string();
    note
}

#[test]
fn snapshot_list_note_wire_format() {
    let json = serde_json::to_string(&pinned_list_note()).unwrap();
    insta::assert_snapshot!(
        json,
        @r##"{"id":"note-1","type":"list","listItems":[{"id":"item-1","text":"milk","checked":false}],"x":120.0,"y":80.0,"width":220.0,"height":240.0,"content":"Groceries","color":"#fff9b1"}"##
    );
}

#[test]
fn snapshot_save_request_envelope() {
    let mut board = Board::new("Board 1");
    board.id = "board-1".to_string();

    let boards = vec![board];
    let request = SaveRequest {
        boards: &boards,
        active_board_id: "board-1",
    };
    let json = serde_json::to_string(&request).unwrap();
    insta::assert_snapshot!(
        json,
        @r##"{"boards":[{"id":"board-1","name":"Board 1","color":"#f2b263","notes":[]}],"activeBoardId":"board-1"}"##
    );
}

#[test]
fn snapshot_image_note_wire_format() {
    let mut note = Note::new(NoteKind::Image {
        image_url: Some("data:image/png;base64,AAAA".to_string()),
    });
    note.id = "note-2".to_string();
    note.x = 0.0;
    note.y = 0.0;
    note.width = 370.0;
    note.height = 195.0;
    note.color = "#f5d0c5".to_string();
    note.attachment_style = Some("tape-orange".to_string());

    let json = serde_json::to_string(&note).unwrap();
    insta::assert_snapshot!(
        json,
        @r##"{"id":"note-2","type":"image","imageUrl":"data:image/png;base64,AAAA","x":0.0,"y":0.0,"width":370.0,"height":195.0,"content":"","color":"#f5d0c5","attachmentStyle":"tape-orange"}"##
    );
}

#[test]
fn legacy_note_without_optional_fields_still_loads() {
    let legacy = r##"{
        "id": "note-3",
        "type": "link",
        "linkUrl": "https://example.com",
        "x": -40.5,
        "y": 9000.0,
        "width": 220.0,
        "height": 160.0,
        "color": "#cdeafe"
    }"##;

    let note: Note = serde_json::from_str(legacy).unwrap();
    assert_eq!(note.content, "");
    assert!(note.attachment_style.is_none());
    match note.kind {
        NoteKind::Link { link_url } => {
            assert_eq!(link_url.as_deref(), Some("https://example.com"));
        }
        other => panic!("expected link, got {other:?}"),
    }
}
