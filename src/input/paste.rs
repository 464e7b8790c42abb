//! Canvas-level paste handling.
//!
//! Image data beats text; either creates a note centered in the current
//! viewport. A paste inside an editable note field is not intercepted.

use crate::canvas::Canvas;
use crate::content::paste::{classify, note_from_paste};
use crate::input::events::{EventOutcome, PasteEvent};
use crate::store::BoardStore;
use std::time::Instant;

impl Canvas {
    pub(crate) fn handle_paste(
        &mut self,
        store: &mut BoardStore,
        now: Instant,
        event: PasteEvent,
    ) -> EventOutcome {
        if event.in_editable {
            return EventOutcome::PassThrough;
        }

        let Some(payload) = classify(event.image, event.text) else {
            return EventOutcome::PassThrough;
        };

        match note_from_paste(&payload, self.visible_center()) {
            Ok(note) => {
                self.adopt_note(store, now, note);
                EventOutcome::Handled
            }
            Err(err) => {
                tracing::warn!(error = %err, "pasted image could not be ingested");
                EventOutcome::Handled
            }
        }
    }
}
