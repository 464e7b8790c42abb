//! Input state machine - unified state management for canvas gestures.
//!
//! A single explicit state machine instead of scattered boolean flags,
//! making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning          (pointer down on empty canvas, or middle button)
//! Idle -> DraggingNote     (pointer down on a note's drag handle)
//! Idle -> ResizingNote     (pointer down on a note's resize corner)
//!
//! Any -> Idle              (pointer up - finalizes the gesture)
//! ```
//!
//! Only one gesture is ever active; starting a new one implicitly cancels
//! a gesture that missed its pointer-up.

use crate::geometry::{Point, Size};
use crate::types::NoteId;

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        /// `cursor - pan` captured at gesture start, so that
        /// `pan = cursor - pan_start` tracks the pointer.
        pan_start: Point,
    },

    /// Dragging a note by its handle
    DraggingNote {
        note_id: NoteId,
        /// Canvas-space offset from the note's top-left to the grab point,
        /// so the note does not jump to the cursor.
        grab_offset: Point,
    },

    /// Resizing a note from its bottom-right corner
    ResizingNote {
        note_id: NoteId,
        /// Size at gesture start
        start_size: Size,
        /// Raw screen cursor at gesture start; move deltas are divided by
        /// zoom rather than re-projected, so resize speed is
        /// zoom-compensated.
        start_cursor: Point,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// The note being dragged, if any
    pub fn dragging_note(&self) -> Option<&NoteId> {
        match self {
            Self::DraggingNote { note_id, .. } => Some(note_id),
            _ => None,
        }
    }

    /// The note being resized, if any
    pub fn resizing_note(&self) -> Option<&NoteId> {
        match self {
            Self::ResizingNote { note_id, .. } => Some(note_id),
            _ => None,
        }
    }

    /// The note involved in the current gesture, if any
    pub fn gesture_note(&self) -> Option<&NoteId> {
        self.dragging_note().or_else(|| self.resizing_note())
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pan_start: Point) {
        *self = Self::Panning { pan_start };
    }

    pub fn start_dragging(&mut self, note_id: NoteId, grab_offset: Point) {
        *self = Self::DraggingNote {
            note_id,
            grab_offset,
        };
    }

    pub fn start_resizing(&mut self, note_id: NoteId, start_size: Size, start_cursor: Point) {
        *self = Self::ResizingNote {
            note_id,
            start_size,
            start_cursor,
        };
    }
}
