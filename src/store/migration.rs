//! Legacy data migration.
//!
//! One-way upgrades applied transparently at load time and re-persisted.
//! Migration only adds missing fields, so it cannot fail on an individual
//! note; board-level malformation is handled by the channel's defensive
//! filtering instead.

use crate::constants::DEFAULT_ATTACHMENT_STYLE;
use crate::types::{Board, Note, NoteKind};

/// Upgrade all boards in place, returning how many notes changed.
pub fn migrate_boards(boards: &mut [Board]) -> usize {
    boards
        .iter_mut()
        .flat_map(|board| board.notes.iter_mut())
        .map(migrate_note)
        .filter(|&changed| changed)
        .count()
}

/// Image notes predating attachment styling get the default. Idempotent.
fn migrate_note(note: &mut Note) -> bool {
    if !matches!(note.kind, NoteKind::Image { .. }) {
        return false;
    }
    let usable = note
        .attachment_style
        .as_deref()
        .is_some_and(|style| !style.trim().is_empty());
    if usable {
        return false;
    }
    note.attachment_style = Some(DEFAULT_ATTACHMENT_STYLE.to_string());
    true
}
