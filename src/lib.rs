//! paperboard - an infinite-canvas board engine.
//!
//! The engine lets a host place, drag, resize and organize heterogeneous
//! notes on a pannable, zoomable 2-D surface, persists multiple boards
//! through an opaque backend channel, and computes a camera transform that
//! frames all content when a board becomes active.
//!
//! The render surface is the host's concern: it feeds input events into a
//! [`canvas::Canvas`], reads note geometry back through the
//! [`store::BoardStore`], and drives the cooperative polls
//! ([`canvas::Canvas::poll_fit`], [`store::BoardStore::poll_save`]) from
//! its event loop.

pub mod autofit;
pub mod canvas;
pub mod constants;
pub mod content;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod spatial_index;
pub mod store;
pub mod types;
