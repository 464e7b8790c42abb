//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating boards with notes
//! - Store/canvas fixtures wired to a `MemoryChannel`
//! - Input event constructors

use paperboard::canvas::Canvas;
use paperboard::geometry::{point, size, Point};
use paperboard::input::{
    InputEvent, Key, Modifiers, PasteEvent, PointerButton, PointerEvent, WheelEvent,
};
use paperboard::store::{BoardChannel, BoardStore, ChannelError, MemoryChannel, SaveRequest};
use paperboard::types::{Board, Note, NoteKind};
use serde_json::{json, Value};
use std::time::Instant;

// ============================================================================
// TestBoardBuilder - Builder pattern for creating test boards
// ============================================================================

/// Builder for creating boards with notes at known geometry.
///
/// # Example
/// ```ignore
/// let board = TestBoardBuilder::new()
///     .with_text_note("First note", (0.0, 0.0))
///     .with_note(NoteKind::Calculator, (300.0, 300.0), (220.0, 320.0))
///     .build();
/// ```
pub struct TestBoardBuilder {
    name: String,
    notes: Vec<Note>,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    pub fn new() -> Self {
        Self {
            name: "Test Board".to_string(),
            notes: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a note of any kind with explicit position and size.
    pub fn with_note(mut self, kind: NoteKind, pos: (f32, f32), size: (f32, f32)) -> Self {
        let mut note = Note::new(kind);
        note.x = pos.0;
        note.y = pos.1;
        note.width = size.0;
        note.height = size.1;
        self.notes.push(note);
        self
    }

    /// Add a text note with default size at the given position.
    pub fn with_text_note(mut self, text: impl Into<String>, pos: (f32, f32)) -> Self {
        let mut note = Note::new(NoteKind::Text);
        note.content = text.into();
        note.x = pos.0;
        note.y = pos.1;
        self.notes.push(note);
        self
    }

    pub fn build(self) -> Board {
        let mut board = Board::new(self.name);
        for note in self.notes {
            board.add_note(note);
        }
        board
    }
}

// ============================================================================
// Store and canvas fixtures
// ============================================================================

/// A store loaded from a bare-list response holding `boards`, plus the
/// channel handle for inspecting saves.
pub fn seeded_store(boards: &[Board]) -> (BoardStore, MemoryChannel) {
    let channel = MemoryChannel::seeded(json!(boards));
    let mut store = BoardStore::new(Box::new(channel.clone()));
    store.load(Instant::now());
    (store, channel)
}

/// A store holding a single empty board.
pub fn empty_store() -> (BoardStore, MemoryChannel) {
    seeded_store(&[Board::new("Board 1")])
}

/// A canvas activated on the store's active board and fitted to the given
/// viewport size.
pub fn fitted_canvas(store: &BoardStore, width: f32, height: f32) -> Canvas {
    let mut canvas = Canvas::new();
    canvas.activate(store.active_board());
    canvas.poll_fit(store.active_board(), Some(size(width, height)));
    canvas
}

/// A channel whose backend is unreachable.
pub struct FailingChannel;

impl BoardChannel for FailingChannel {
    fn fetch_boards(&self) -> Result<Value, ChannelError> {
        Err(ChannelError::Unavailable("test backend down".to_string()))
    }

    fn save_boards(&self, _request: &SaveRequest<'_>) -> Result<(), ChannelError> {
        Err(ChannelError::Unavailable("test backend down".to_string()))
    }
}

// ============================================================================
// Input event constructors
// ============================================================================

pub fn pointer_down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown(PointerEvent {
        position: point(x, y),
        button: PointerButton::Primary,
    })
}

pub fn middle_down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown(PointerEvent {
        position: point(x, y),
        button: PointerButton::Middle,
    })
}

pub fn pointer_move(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        position: point(x, y),
    }
}

pub fn pointer_up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp(PointerEvent {
        position: point(x, y),
        button: PointerButton::Primary,
    })
}

pub fn wheel(x: f32, y: f32, dx: f32, dy: f32) -> InputEvent {
    InputEvent::Wheel(WheelEvent {
        position: point(x, y),
        delta: point(dx, dy),
        modifiers: Modifiers::default(),
    })
}

pub fn zoom_wheel(x: f32, y: f32, dy: f32) -> InputEvent {
    InputEvent::Wheel(WheelEvent {
        position: point(x, y),
        delta: point(0.0, dy),
        modifiers: Modifiers {
            control: true,
            ..Modifiers::default()
        },
    })
}

pub fn key(k: Key) -> InputEvent {
    InputEvent::Key(k)
}

pub fn paste_text(text: &str) -> InputEvent {
    InputEvent::Paste(PasteEvent {
        image: None,
        text: Some(text.to_string()),
        in_editable: false,
    })
}

pub fn paste_image(bytes: Vec<u8>) -> InputEvent {
    InputEvent::Paste(PasteEvent {
        image: Some(bytes),
        text: None,
        in_editable: false,
    })
}

/// A 1x1 transparent PNG, for image ingestion paths.
pub fn tiny_png() -> Vec<u8> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    STANDARD
        .decode("iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==")
        .expect("embedded png is valid base64")
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two canvas points agree within floating tolerance.
pub fn assert_points_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2,
        "points differ: {a:?} vs {b:?}"
    );
}
