//! Per-variant content behaviors.
//!
//! Each behavior matches exhaustively over [`NoteKind`](crate::types::NoteKind),
//! so adding a variant is a compile-time-checked change:
//!
//! - [`image`] - blob ingestion and fit-to-bounds sizing
//! - [`checklist`] - list-note mutation
//! - [`paste`] - canvas-level paste classification
//! - [`search`] - free-text indexing and filtering
//! - [`calc`] - the calculator's safe arithmetic evaluator

pub mod calc;
pub mod checklist;
pub mod image;
pub mod paste;
pub mod search;
