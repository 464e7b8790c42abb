//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom factor applied per wheel tick when zooming in
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Zoom factor applied per wheel tick when zooming out
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

// ============================================================================
// Note Geometry
// ============================================================================

/// Minimum note width in canvas units
pub const MIN_NOTE_WIDTH: f32 = 150.0;

/// Minimum note height in canvas units
pub const MIN_NOTE_HEIGHT: f32 = 100.0;

/// Minimum calculator note width (clamped on read, not storage)
pub const CALC_MIN_WIDTH: f32 = 220.0;

/// Minimum calculator note height (clamped on read, not storage)
pub const CALC_MIN_HEIGHT: f32 = 320.0;

/// Height of a note's drag handle strip, in canvas units
pub const DRAG_HANDLE_HEIGHT: f32 = 28.0;

/// Size of the bottom-right resize corner, in canvas units
pub const RESIZE_CORNER_SIZE: f32 = 24.0;

// ============================================================================
// Auto-Fit
// ============================================================================

/// Fraction of the viewport the fitted bounding box may fill
pub const FIT_FILL_RATIO: f32 = 0.9;

/// Auto-fit never zooms below this, no matter how sparse the content
pub const FIT_MIN_ZOOM: f32 = 0.6;

/// Auto-fit never zooms above this, no matter how dense the content
pub const FIT_MAX_ZOOM: f32 = 1.2;

/// Maximum viewport-measurement attempts before auto-fit gives up
pub const MEASURE_RETRY_LIMIT: u32 = 10;

/// Interval between measurement attempts, driven by the host's timer
pub const MEASURE_RETRY_INTERVAL_MS: u64 = 100;

// ============================================================================
// Persistence & Guards
// ============================================================================

/// Save debounce delay in milliseconds
pub const SAVE_DEBOUNCE_MS: u64 = 1000;

/// Window during which a second board creation is treated as a duplicate
pub const CREATE_GUARD_MS: u64 = 100;

// ============================================================================
// Image Ingestion
// ============================================================================

/// Maximum edge length an ingested image is displayed at
pub const MAX_IMAGE_EDGE: f32 = 350.0;

/// Chrome padding added around an ingested image's scaled dimensions
pub const IMAGE_CHROME_PADDING: f32 = 20.0;

// ============================================================================
// Styling Defaults
// ============================================================================

/// Attachment style assigned to image notes that lack one
pub const DEFAULT_ATTACHMENT_STYLE: &str = "tape-orange";

/// Default board accent color
pub const DEFAULT_BOARD_COLOR: &str = "#f2b263";

/// Paper colors a new note is randomly assigned from
pub const PAPER_COLORS: &[&str] = &[
    "#fff9b1", "#f5d0c5", "#d5f6bb", "#cdeafe", "#e8d5f9", "#fde0ef",
];
