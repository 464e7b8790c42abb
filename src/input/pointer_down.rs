//! Pointer down event handling - selection, gesture initiation, hit testing.
//!
//! Pointer down is a hot path during interaction: hit testing goes through
//! the R-tree spatial index (O(log n)) before the z-order scan.

use crate::canvas::Canvas;
use crate::constants::{DRAG_HANDLE_HEIGHT, RESIZE_CORNER_SIZE};
use crate::geometry::size;
use crate::input::events::{EventOutcome, PointerButton, PointerEvent};
use crate::types::Board;

impl Canvas {
    pub(crate) fn handle_pointer_down(
        &mut self,
        board: &Board,
        event: PointerEvent,
    ) -> EventOutcome {
        // A gesture that never saw its pointer-up must not leak into this
        // one.
        if !self.input.is_idle() {
            self.input.reset();
        }
        self.context_menu = None;

        // Middle button pans from anywhere, including over notes.
        if event.button == PointerButton::Middle {
            self.input.start_panning(event.position - self.camera.pan);
            return EventOutcome::Handled;
        }

        let canvas_pos = self.camera.to_canvas(event.position);

        let Some(note) = self.hit_note(board, canvas_pos) else {
            // Outside click: clear selection; primary starts a pan.
            self.selected = None;
            if event.button == PointerButton::Primary {
                self.input.start_panning(event.position - self.camera.pan);
            }
            return EventOutcome::Handled;
        };

        let note_id = note.id.clone();
        self.selected = Some(note_id.clone());

        if event.button == PointerButton::Secondary {
            self.context_menu = Some(note_id);
            return EventOutcome::Handled;
        }

        let (min, max) = note.rect();
        let in_resize_corner = canvas_pos.x >= max.x - RESIZE_CORNER_SIZE
            && canvas_pos.y >= max.y - RESIZE_CORNER_SIZE;
        let in_drag_handle = canvas_pos.y <= min.y + DRAG_HANDLE_HEIGHT;

        if in_resize_corner {
            self.input.start_resizing(
                note_id,
                size(note.width, note.height),
                event.position,
            );
        } else if in_drag_handle {
            self.input
                .start_dragging(note_id, canvas_pos - note.position());
        }
        // A body hit only selects; the interior belongs to the note's own
        // editing surface.

        EventOutcome::Handled
    }
}
