//! Input handling - the interaction controller.
//!
//! Events enter through the explicit port in [`events`] and are consumed by
//! [`Canvas`](crate::canvas::Canvas) handler methods, split by event type:
//!
//! - [`pointer_down`] - gesture initiation, selection, hit testing
//! - [`drag`] - pointer-move handling for pan/drag/resize
//! - [`pointer_up`] - gesture finalization
//! - [`scroll`] - wheel pan and zoom-at-anchor
//! - [`keyboard`] - delete/escape
//! - [`paste`] - canvas-level paste ingestion

pub mod events;
pub mod state;

mod drag;
mod keyboard;
mod paste;
mod pointer_down;
mod pointer_up;
mod scroll;

pub use events::{
    EventOutcome, InputEvent, Key, Modifiers, PasteEvent, PointerButton, PointerEvent, WheelEvent,
};
pub use state::InputState;
