//! Coordinate conversion between canvas space and screen space.
//!
//! Canvas space is the note-content coordinate system, independent of
//! viewport or zoom. Screen space is the pixel coordinates of the render
//! surface as currently panned and zoomed. The camera transform is
//! `screen = canvas * zoom + pan`.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2-D point or vector, in either coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        point(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;
    fn div(self, rhs: f32) -> Point {
        point(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        point(-self.x, -self.y)
    }
}

/// A measured extent in pixels or canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Shorthand constructor.
#[inline]
pub fn size(width: f32, height: f32) -> Size {
    Size { width, height }
}

impl Size {
    /// True when both dimensions are positive, i.e. the surface has
    /// actually been measured.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Point {
        point(self.width / 2.0, self.height / 2.0)
    }
}

/// The camera transform for one board: a pan offset plus a uniform zoom
/// scalar, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
///
/// Not persisted: recomputed on board activation by the auto-fit solver,
/// then mutated live by the interaction controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub pan: Point,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Camera {
    pub fn new(pan: Point, zoom: f32) -> Self {
        Self {
            pan,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Convert a canvas-space point to screen space.
    #[inline]
    pub fn to_screen(&self, p: Point) -> Point {
        p * self.zoom + self.pan
    }

    /// Convert a screen-space point to canvas space.
    #[inline]
    pub fn to_canvas(&self, p: Point) -> Point {
        (p - self.pan) / self.zoom
    }

    /// Convert a screen-space delta to canvas space (for drag operations).
    #[inline]
    pub fn delta_to_canvas(&self, delta: Point) -> Point {
        delta / self.zoom
    }

    /// Zoom by `factor` while keeping the canvas point under the screen
    /// anchor stationary. Returns false when the clamp left the zoom
    /// unchanged (already at a limit).
    ///
    /// The new pan is solved from the anchor constraint:
    /// `pan' = anchor - to_canvas(anchor) * zoom'`.
    pub fn zoom_around(&mut self, factor: f32, anchor: Point) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() <= f32::EPSILON {
            return false;
        }
        let anchor_canvas = self.to_canvas(anchor);
        self.pan = anchor - anchor_canvas * new_zoom;
        self.zoom = new_zoom;
        true
    }

    /// The canvas-space point at the center of the given viewport.
    pub fn visible_center(&self, viewport: Size) -> Point {
        self.to_canvas(viewport.center())
    }
}
