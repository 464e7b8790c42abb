//! Canvas-level paste classification and note construction.

use crate::content::image::{self, ImageIngestError};
use crate::geometry::Point;
use crate::types::{Note, NoteKind};

/// What a canvas-level paste carried, after prioritization.
#[derive(Debug, Clone)]
pub enum PastePayload {
    Image(Vec<u8>),
    Text(String),
}

/// Pick the payload: image data takes priority over text; text must be
/// non-empty after trimming. Returns `None` when there is nothing usable.
pub fn classify(image: Option<Vec<u8>>, text: Option<String>) -> Option<PastePayload> {
    if let Some(bytes) = image {
        if !bytes.is_empty() {
            return Some(PastePayload::Image(bytes));
        }
    }
    let text = text?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PastePayload::Text(trimmed.to_string()))
}

/// Build the note a paste creates, centered on the given canvas point.
pub fn note_from_paste(
    payload: &PastePayload,
    center: Point,
) -> Result<Note, ImageIngestError> {
    match payload {
        PastePayload::Image(bytes) => {
            let ingested = image::ingest(bytes)?;
            let mut note = Note::new(NoteKind::Image { image_url: None });
            image::apply_to_note(&mut note, &ingested);
            // Center after ingestion set the final geometry.
            note.x = center.x - note.width / 2.0;
            note.y = center.y - note.height / 2.0;
            Ok(note)
        }
        PastePayload::Text(text) => {
            let mut note = Note::at_center(NoteKind::Text, center);
            note.content = text.clone();
            Ok(note)
        }
    }
}
