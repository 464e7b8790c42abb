//! Image ingestion: uploaded or pasted blobs become self-contained
//! `data:` URLs, displayed at a bounded size.
//!
//! The blob itself is stored unscaled; only the note's display geometry is
//! fitted, so re-ingesting never loses pixels.

use crate::constants::{DEFAULT_ATTACHMENT_STYLE, IMAGE_CHROME_PADDING, MAX_IMAGE_EDGE};
use crate::geometry::{size, Size};
use crate::types::{Note, NoteKind};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::GenericImageView;
use thiserror::Error;

/// Errors that can occur while ingesting an image blob.
#[derive(Error, Debug)]
pub enum ImageIngestError {
    /// The bytes did not decode as any supported image format
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// The payload was empty
    #[error("empty image payload")]
    Empty,
}

/// A decoded, measured image ready to land on a note.
#[derive(Debug, Clone)]
pub struct IngestedImage {
    /// `data:<mime>;base64,...` holding the original blob
    pub data_url: String,
    /// Natural dimensions in pixels
    pub natural: Size,
    /// Display dimensions with the longer edge fitted to
    /// [`MAX_IMAGE_EDGE`]
    pub display: Size,
}

/// Decode a raw blob, measure it, and wrap it as a `data:` URL.
pub fn ingest(bytes: &[u8]) -> Result<IngestedImage, ImageIngestError> {
    if bytes.is_empty() {
        return Err(ImageIngestError::Empty);
    }

    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();

    let natural = size(width as f32, height as f32);
    let display = fit_to_edge(natural, MAX_IMAGE_EDGE);
    let data_url = format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        BASE64.encode(bytes)
    );

    Ok(IngestedImage {
        data_url,
        natural,
        display,
    })
}

/// Scale so the longer edge is at most `max_edge`, preserving aspect ratio.
/// Images already within bounds keep their natural size.
pub fn fit_to_edge(natural: Size, max_edge: f32) -> Size {
    let longer = natural.width.max(natural.height);
    if longer <= max_edge || longer <= 0.0 {
        return natural;
    }
    let scale = max_edge / longer;
    size(natural.width * scale, natural.height * scale)
}

/// Land an ingested image on a note: the blob becomes `imageUrl`, the
/// note geometry is fitted plus chrome padding, and the attachment style
/// defaults when absent. No-op for non-image notes.
pub fn apply_to_note(note: &mut Note, ingested: &IngestedImage) -> bool {
    let NoteKind::Image { image_url } = &mut note.kind else {
        return false;
    };
    *image_url = Some(ingested.data_url.clone());
    note.width = ingested.display.width + IMAGE_CHROME_PADDING;
    note.height = ingested.display.height + IMAGE_CHROME_PADDING;
    if note.attachment_style.is_none() {
        note.attachment_style = Some(DEFAULT_ATTACHMENT_STYLE.to_string());
    }
    true
}
