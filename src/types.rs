//! Core types for the paperboard canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: boards, notes, note content variants, and their invariants.
//! Everything here serializes to the camelCase wire format the backend
//! channel speaks.

use crate::constants::{
    CALC_MIN_HEIGHT, CALC_MIN_WIDTH, DEFAULT_BOARD_COLOR, MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH,
    PAPER_COLORS,
};
use crate::geometry::{point, size, Point, Size};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier type shared by boards, notes and list items (UUID v4 strings).
pub type NoteId = String;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_board_color() -> String {
    DEFAULT_BOARD_COLOR.to_string()
}

/// One entry of a `list` note. Order is significant; ids are unique within
/// the owning note.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            checked: false,
        }
    }
}

/// The content variant of a note, tagged by `type` on the wire.
///
/// Determines which behaviors apply (image ingestion, checklist mutation,
/// search indexing) and which extra fields the note carries. Adding a
/// variant is a compile-time-checked change: every behavior matches
/// exhaustively.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NoteKind {
    /// Free-form text; the body lives in `Note::content`.
    Text,
    /// An ordered checklist.
    List {
        #[serde(rename = "listItems", default)]
        list_items: Vec<ListItem>,
    },
    /// An image held as a self-contained `data:` URL; absent until the
    /// upload completes.
    Image {
        #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    /// An audio attachment (playback is the render surface's concern).
    Audio,
    /// A web link with free-text annotation in `Note::content`.
    Link {
        #[serde(rename = "linkUrl", default, skip_serializing_if = "Option::is_none")]
        link_url: Option<String>,
    },
    /// A calculator. Expression state is ephemeral, scoped to the live
    /// note instance; nothing beyond geometry and color persists.
    Calculator,
}

impl NoteKind {
    /// Default canvas size for a freshly created note of this kind.
    pub fn default_size(&self) -> Size {
        match self {
            NoteKind::Text => size(220.0, 160.0),
            NoteKind::List { .. } => size(220.0, 240.0),
            NoteKind::Image { .. } => size(220.0, 160.0),
            NoteKind::Audio => size(260.0, 140.0),
            NoteKind::Link { .. } => size(220.0, 160.0),
            NoteKind::Calculator => size(CALC_MIN_WIDTH, CALC_MIN_HEIGHT),
        }
    }

    /// Minimum size a resize gesture may shrink this kind to.
    pub fn min_size(&self) -> Size {
        match self {
            NoteKind::Calculator => size(CALC_MIN_WIDTH, CALC_MIN_HEIGHT),
            _ => size(MIN_NOTE_WIDTH, MIN_NOTE_HEIGHT),
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            NoteKind::Text => "TEXT",
            NoteKind::List { .. } => "LIST",
            NoteKind::Image { .. } => "IMAGE",
            NoteKind::Audio => "AUDIO",
            NoteKind::Link { .. } => "LINK",
            NoteKind::Calculator => "CALC",
        }
    }
}

/// Font families a board or note may select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
    Handwritten,
}

/// Board background styling.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// A note placed on the infinite canvas.
///
/// Coordinates are canvas-space floats, unbounded in sign or magnitude.
/// Stored dimensions may fall below the variant minimum (legacy data);
/// [`Note::effective_size`] clamps on read.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(flatten)]
    pub kind: NoteKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Free-text body or annotation, may carry markup from the editor.
    #[serde(default)]
    pub content: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl Note {
    /// Create a note of the given kind at the origin, with the kind's
    /// default size and a random paper color.
    pub fn new(kind: NoteKind) -> Self {
        let Size { width, height } = kind.default_size();
        Self {
            id: new_id(),
            kind,
            x: 0.0,
            y: 0.0,
            width,
            height,
            content: String::new(),
            color: random_paper_color().to_string(),
            paper_style: None,
            attachment_style: None,
            font: None,
            font_size: None,
        }
    }

    /// Create a note centered on the given canvas point (how add-actions
    /// seed geometry at the camera's visible center).
    pub fn at_center(kind: NoteKind, center: Point) -> Self {
        let mut note = Self::new(kind);
        note.x = center.x - note.width / 2.0;
        note.y = center.y - note.height / 2.0;
        note
    }

    pub fn position(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Stored size, clamped to the variant minimum on read.
    pub fn effective_size(&self) -> Size {
        let min = self.kind.min_size();
        size(self.width.max(min.width), self.height.max(min.height))
    }

    /// Canvas-space bounding rectangle as (top-left, bottom-right).
    pub fn rect(&self) -> (Point, Point) {
        let s = self.effective_size();
        (
            point(self.x, self.y),
            point(self.x + s.width, self.y + s.height),
        )
    }

    pub fn center(&self) -> Point {
        let s = self.effective_size();
        point(self.x + s.width / 2.0, self.y + s.height / 2.0)
    }

    /// True when the canvas-space point lies inside the note's rectangle.
    pub fn contains(&self, p: Point) -> bool {
        let (min, max) = self.rect();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

/// An independently-persisted canvas with its own note set.
///
/// A board exclusively owns its notes; no note is shared across boards.
/// Identity is the `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default = "default_board_color")]
    pub color: String,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            color: default_board_color(),
            notes: Vec::new(),
            last_accessed: None,
            font: None,
            background: None,
        }
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn note_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// Append a note, returning its id. New notes land on top of the
    /// z-order (later in the vector renders in front).
    pub fn add_note(&mut self, note: Note) -> NoteId {
        let id = note.id.clone();
        self.notes.push(note);
        id
    }

    /// Remove a note from this board. Cascades to nothing else.
    pub fn remove_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// Record that this board was just accessed.
    pub fn touch(&mut self) {
        self.last_accessed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .ok();
    }
}

/// Pick a default paper color for a new note.
pub fn random_paper_color() -> &'static str {
    PAPER_COLORS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("#fff9b1")
}
