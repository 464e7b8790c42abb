//! Wheel handling - pan scroll and zoom-at-anchor.

use crate::canvas::Canvas;
use crate::constants::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::input::events::{EventOutcome, WheelEvent};
use crate::types::Board;

impl Canvas {
    pub(crate) fn handle_wheel(&mut self, board: &Board, event: WheelEvent) -> EventOutcome {
        // Zoom with Control (or Command on macOS) held: one tick per event,
        // anchored at the cursor so the point under it stays put.
        if event.modifiers.zoom_held() {
            let factor = if event.delta.y < 0.0 {
                ZOOM_IN_FACTOR
            } else if event.delta.y > 0.0 {
                ZOOM_OUT_FACTOR
            } else {
                return EventOutcome::Handled;
            };
            self.camera.zoom_around(factor, event.position);
            return EventOutcome::Handled;
        }

        // A wheel over the selected note's own rectangle belongs to that
        // note's scroll region; the native scroll wins.
        if let Some(selected) = &self.selected {
            let canvas_pos = self.camera.to_canvas(event.position);
            if board
                .note(selected)
                .is_some_and(|note| note.contains(canvas_pos))
            {
                return EventOutcome::PassThrough;
            }
        }

        // Default: pan by the raw wheel delta.
        self.camera.pan = self.camera.pan + event.delta;
        EventOutcome::Handled
    }
}
