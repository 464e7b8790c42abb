//! Keyboard handling - note deletion and selection clearing.

use crate::canvas::Canvas;
use crate::input::events::{EventOutcome, Key};
use crate::store::BoardStore;
use std::time::Instant;

impl Canvas {
    pub(crate) fn handle_key(
        &mut self,
        store: &mut BoardStore,
        now: Instant,
        key: Key,
    ) -> EventOutcome {
        match key {
            Key::Delete => {
                let Some(note_id) = self.selected.clone() else {
                    return EventOutcome::PassThrough;
                };
                store.update_active(now, |board| board.remove_note(&note_id));
                self.spatial.remove(&note_id);
                self.selected = None;
                self.context_menu = None;
                EventOutcome::Handled
            }
            Key::Escape => {
                self.selected = None;
                self.context_menu = None;
                EventOutcome::Handled
            }
        }
    }
}
