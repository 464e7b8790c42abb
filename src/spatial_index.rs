//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for efficient hit testing on the
//! canvas. This reduces pointer hit testing from O(n) to O(log n) for point
//! queries.

use crate::types::{Note, NoteId};
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A spatial entry representing a note's bounding box in canvas space.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub note_id: NoteId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn from_note(note: &Note) -> Self {
        let (min, max) = note.rect();
        Self {
            note_id: note.id.clone(),
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.note_id == other.note_id
    }
}

/// Spatial index over a board's notes using an R-tree.
/// Provides O(log n) point queries and range queries for hit testing.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NoteId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spatial index from a board's notes.
    pub fn from_notes<'a, I>(notes: I) -> Self
    where
        I: IntoIterator<Item = &'a Note>,
    {
        let entries: Vec<SpatialEntry> = notes.into_iter().map(SpatialEntry::from_note).collect();
        let entries_map: HashMap<NoteId, SpatialEntry> = entries
            .iter()
            .map(|e| (e.note_id.clone(), e.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, note: &Note) {
        if let Some(old_entry) = self.entries.remove(&note.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::from_note(note);
        self.tree.insert(entry.clone());
        self.entries.insert(entry.note_id.clone(), entry);
    }

    pub fn remove(&mut self, note_id: &str) -> bool {
        if let Some(entry) = self.entries.remove(note_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Re-index a note after a move or resize.
    pub fn update(&mut self, note: &Note) {
        self.insert(note);
    }

    /// Query all notes whose rectangle contains the given canvas point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NoteId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.note_id.clone())
            .collect()
    }

    /// Query all notes intersecting a rectangular canvas region.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<NoteId> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.note_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a, I>(&mut self, notes: I)
    where
        I: IntoIterator<Item = &'a Note>,
    {
        *self = Self::from_notes(notes);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
