//! The explicit input-event port.
//!
//! Hosts translate their windowing toolkit's events into these types and
//! feed them to [`Canvas::handle_event`](crate::canvas::Canvas::handle_event).
//! Each canvas instance owns exactly one event scope; nothing here listens
//! ambiently.

use crate::geometry::Point;

/// Which pointer button an event carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers relevant to canvas gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub platform: bool,
    pub shift: bool,
}

impl Modifiers {
    /// True when the zoom chord (Control, or Command on macOS) is held.
    pub fn zoom_held(&self) -> bool {
        self.control || self.platform
    }
}

/// A pointer press or release, in screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
}

/// A wheel tick, in screen coordinates. Positive `delta.y` scrolls down.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: Point,
    pub modifiers: Modifiers,
}

/// Keys the canvas responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
}

/// A canvas-level paste. `in_editable` is set by the host when the paste
/// landed inside an editable note field, in which case the canvas does not
/// intercept it.
#[derive(Clone, Debug, Default)]
pub struct PasteEvent {
    pub image: Option<Vec<u8>>,
    pub text: Option<String>,
    pub in_editable: bool,
}

/// Every event the canvas consumes.
#[derive(Clone, Debug)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove { position: Point },
    PointerUp(PointerEvent),
    Wheel(WheelEvent),
    Key(Key),
    Paste(PasteEvent),
}

/// What the canvas did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The canvas consumed the event.
    Handled,
    /// Not the canvas's event; the host should let native behavior win
    /// (e.g. a note's own scroll region).
    PassThrough,
}
