//! Persistence scheduling: save debounce and preview-capture tokens.

use crate::constants::SAVE_DEBOUNCE_MS;
use std::time::{Duration, Instant};

/// Debounces writes: the store marks itself dirty on every mutation and a
/// write goes out once no mutation has landed for
/// [`SAVE_DEBOUNCE_MS`] milliseconds.
#[derive(Debug, Default)]
pub(crate) struct SaveScheduler {
    dirty: bool,
    last_mutation: Option<Instant>,
}

impl SaveScheduler {
    pub fn mark(&mut self, now: Instant) {
        self.dirty = true;
        self.last_mutation = Some(now);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when a debounced write is due.
    pub fn is_due(&self, now: Instant) -> bool {
        match (self.dirty, self.last_mutation) {
            (true, Some(at)) => {
                now.saturating_duration_since(at) >= Duration::from_millis(SAVE_DEBOUNCE_MS)
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.dirty = false;
        self.last_mutation = None;
    }
}

/// Token for an in-flight preview capture.
///
/// Captures are asynchronous from the store's point of view: the host
/// renders the thumbnail between `begin` and `finish`, and the token pins
/// the board id from invocation time so the result can be discarded if the
/// active board changed underneath it.
#[derive(Debug, Clone)]
pub struct PreviewCapture {
    pub(crate) board_id: String,
}

impl PreviewCapture {
    pub fn board_id(&self) -> &str {
        &self.board_id
    }
}
