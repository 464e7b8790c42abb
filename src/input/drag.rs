//! Pointer move handling - panning, note dragging, note resizing.
//!
//! Pointer move fires very frequently during gestures (60+ times per
//! second), so each arm does the minimum: one camera assignment, or one
//! note mutation through the store.

use crate::canvas::Canvas;
use crate::geometry::{size, Point};
use crate::input::events::EventOutcome;
use crate::input::state::InputState;
use crate::store::BoardStore;
use std::time::Instant;

impl Canvas {
    pub(crate) fn handle_pointer_move(
        &mut self,
        store: &mut BoardStore,
        now: Instant,
        position: Point,
    ) -> EventOutcome {
        match &self.input {
            InputState::Panning { pan_start } => {
                self.camera.pan = position - *pan_start;
                EventOutcome::Handled
            }

            InputState::DraggingNote {
                note_id,
                grab_offset,
            } => {
                let note_id = note_id.clone();
                let new_pos = self.camera.to_canvas(position) - *grab_offset;
                store.update_active(now, |board| {
                    if let Some(note) = board.note_mut(&note_id) {
                        note.set_position(new_pos);
                    }
                });
                EventOutcome::Handled
            }

            InputState::ResizingNote {
                note_id,
                start_size,
                start_cursor,
            } => {
                let note_id = note_id.clone();
                // Screen deltas divided by zoom, not re-projected: resize
                // speed stays constant regardless of zoom level.
                let delta = self.camera.delta_to_canvas(position - *start_cursor);
                let start = *start_size;
                store.update_active(now, |board| {
                    if let Some(note) = board.note_mut(&note_id) {
                        let min = note.kind.min_size();
                        let new = size(
                            (start.width + delta.x).max(min.width),
                            (start.height + delta.y).max(min.height),
                        );
                        note.width = new.width;
                        note.height = new.height;
                    }
                });
                EventOutcome::Handled
            }

            InputState::Idle => EventOutcome::PassThrough,
        }
    }
}
