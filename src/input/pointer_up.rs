//! Pointer up event handling - gesture finalization.

use crate::canvas::Canvas;
use crate::input::events::{EventOutcome, PointerEvent};
use crate::types::Board;

impl Canvas {
    /// Any button release returns the controller to `Idle`. A note moved
    /// or resized by the finished gesture gets re-indexed here rather than
    /// on every intermediate move.
    pub(crate) fn handle_pointer_up(
        &mut self,
        board: &Board,
        _event: PointerEvent,
    ) -> EventOutcome {
        if self.input.is_idle() {
            return EventOutcome::PassThrough;
        }

        if let Some(note_id) = self.input.gesture_note() {
            if let Some(note) = board.note(note_id) {
                self.spatial.update(note);
            }
        }

        self.input.reset();
        EventOutcome::Handled
    }
}
