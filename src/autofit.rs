//! Auto-fit solver: computes the camera transform that frames a board's
//! note set when the board becomes active.
//!
//! The solver runs once per activation, after the render surface reports a
//! non-zero measured size. Measurement is polled by the host at
//! [`MEASURE_RETRY_INTERVAL_MS`](crate::constants::MEASURE_RETRY_INTERVAL_MS)
//! intervals; after [`MEASURE_RETRY_LIMIT`](crate::constants::MEASURE_RETRY_LIMIT)
//! failed attempts the solver silently gives up and leaves the default
//! camera in place.

use crate::constants::{FIT_FILL_RATIO, FIT_MAX_ZOOM, FIT_MIN_ZOOM, MEASURE_RETRY_LIMIT};
use crate::geometry::{point, Camera, Point, Size};
use crate::types::Note;

/// Axis-aligned bounding box over a note set, in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        point(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// Bounding box over each note's `(x, y)`–`(x+width, y+height)` rectangle.
/// Returns `None` for an empty set.
pub fn bounding_box(notes: &[Note]) -> Option<BoundingBox> {
    let mut iter = notes.iter();
    let first = iter.next()?;

    let mut min = point(first.x, first.y);
    let mut max = point(first.x + first.width, first.y + first.height);
    for note in iter {
        min.x = min.x.min(note.x);
        min.y = min.y.min(note.y);
        max.x = max.x.max(note.x + note.width);
        max.y = max.y.max(note.y + note.height);
    }
    Some(BoundingBox { min, max })
}

/// Compute the camera that frames `notes` inside `viewport`.
///
/// An empty set yields the identity camera. Otherwise the zoom fills 90%
/// of the viewport, clamped to `[0.6, 1.2]`, and the pan maps the box
/// center onto the viewport center. Pure: calling it twice on unchanged
/// inputs yields the same camera.
pub fn fit_camera(viewport: Size, notes: &[Note]) -> Camera {
    let Some(bbox) = bounding_box(notes) else {
        return Camera::default();
    };

    // Degenerate boxes (a single zero-sized rectangle) would blow up the
    // fill ratio; treat them as one canvas unit wide.
    let box_w = bbox.width().max(1.0);
    let box_h = bbox.height().max(1.0);

    let zoom_x = FIT_FILL_RATIO * viewport.width / box_w;
    let zoom_y = FIT_FILL_RATIO * viewport.height / box_h;
    let zoom = zoom_x
        .min(zoom_y)
        .min(FIT_MAX_ZOOM)
        .clamp(FIT_MIN_ZOOM, FIT_MAX_ZOOM);

    let pan = viewport.center() - bbox.center() * zoom;
    Camera { pan, zoom }
}

/// Per-activation fit progress. Idempotent: once fitted (or given up),
/// subsequent note mutations within the same activation do not re-run the
/// solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct FitState {
    fitted: bool,
    attempts: u32,
}

/// Outcome of one measurement poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitPoll {
    /// The camera was just fitted.
    Fitted,
    /// The surface has not reported a size yet; poll again.
    Pending,
    /// Retries exhausted; the default camera stays.
    GaveUp,
    /// A previous poll already settled this activation.
    Settled,
}

impl FitState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_settled(&self) -> bool {
        self.fitted
    }

    /// Advance the fit state with the latest measurement. Returns what the
    /// caller should do; the actual camera computation is the caller's
    /// (it owns the camera).
    pub fn poll(&mut self, measured: Option<Size>) -> FitPoll {
        if self.fitted {
            return FitPoll::Settled;
        }
        match measured {
            Some(viewport) if viewport.is_measured() => {
                self.fitted = true;
                FitPoll::Fitted
            }
            _ => {
                self.attempts += 1;
                if self.attempts >= MEASURE_RETRY_LIMIT {
                    self.fitted = true;
                    tracing::debug!(
                        attempts = self.attempts,
                        "canvas never reported a size; keeping default camera"
                    );
                    FitPoll::GaveUp
                } else {
                    FitPoll::Pending
                }
            }
        }
    }
}
