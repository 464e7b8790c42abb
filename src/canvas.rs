//! The per-board canvas session: camera, gesture state, selection and
//! hit-testing index.
//!
//! A `Canvas` is created by the host alongside its render surface and
//! re-activated whenever the active board changes. Input handlers live in
//! the [`input`](crate::input) module; note mutations are funneled through
//! the [`BoardStore`](crate::store::BoardStore)'s update functions so that
//! migrations, guards and debounced persistence stay consistent.

use crate::autofit::{fit_camera, FitPoll, FitState};
use crate::geometry::{Camera, Point, Size};
use crate::input::events::{EventOutcome, InputEvent};
use crate::input::state::InputState;
use crate::spatial_index::SpatialIndex;
use crate::store::BoardStore;
use crate::types::{Board, Note, NoteId, NoteKind};
use std::time::Instant;

pub struct Canvas {
    pub camera: Camera,
    pub(crate) viewport: Option<Size>,
    pub(crate) input: InputState,
    pub(crate) selected: Option<NoteId>,
    pub(crate) context_menu: Option<NoteId>,
    pub(crate) fit: FitState,
    pub(crate) spatial: SpatialIndex,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            viewport: None,
            input: InputState::default(),
            selected: None,
            context_menu: None,
            fit: FitState::default(),
            spatial: SpatialIndex::new(),
        }
    }

    /// Reset the session for a newly activated board: default camera until
    /// auto-fit settles, cleared gesture/selection state, rebuilt hit index.
    pub fn activate(&mut self, board: &Board) {
        self.camera = Camera::default();
        self.input.reset();
        self.selected = None;
        self.context_menu = None;
        self.fit.reset();
        self.spatial.rebuild(&board.notes);
    }

    pub fn selected_note(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    pub fn context_menu(&self) -> Option<&NoteId> {
        self.context_menu.as_ref()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// The canvas-space point at the center of the viewport; where
    /// add-actions seed new note geometry. Falls back to the canvas origin
    /// before the surface has been measured.
    pub fn visible_center(&self) -> Point {
        self.camera.visible_center(self.viewport.unwrap_or_default())
    }

    /// Feed one input event through the interaction controller.
    pub fn handle_event(
        &mut self,
        store: &mut BoardStore,
        now: Instant,
        event: InputEvent,
    ) -> EventOutcome {
        match event {
            InputEvent::PointerDown(ev) => self.handle_pointer_down(store.active_board(), ev),
            InputEvent::PointerMove { position } => self.handle_pointer_move(store, now, position),
            InputEvent::PointerUp(ev) => self.handle_pointer_up(store.active_board(), ev),
            InputEvent::Wheel(ev) => self.handle_wheel(store.active_board(), ev),
            InputEvent::Key(key) => self.handle_key(store, now, key),
            InputEvent::Paste(ev) => self.handle_paste(store, now, ev),
        }
    }

    /// One auto-fit measurement poll, driven by the host's activation
    /// timer. Updates the camera when the surface reports a usable size.
    pub fn poll_fit(&mut self, board: &Board, measured: Option<Size>) -> FitPoll {
        if let Some(viewport) = measured {
            if viewport.is_measured() {
                self.viewport = Some(viewport);
            }
        }
        let outcome = self.fit.poll(measured);
        if outcome == FitPoll::Fitted {
            if let Some(viewport) = self.viewport {
                self.camera = fit_camera(viewport, &board.notes);
            }
        }
        outcome
    }

    /// Add a note of `kind` seeded at the camera's visible center (the
    /// seam used by toolbar, AI-generation and dictionary-lookup adds).
    pub fn insert_note(
        &mut self,
        store: &mut BoardStore,
        now: Instant,
        kind: NoteKind,
    ) -> NoteId {
        let note = Note::at_center(kind, self.visible_center());
        self.adopt_note(store, now, note)
    }

    /// Insert an already-built note, indexing and selecting it.
    pub(crate) fn adopt_note(
        &mut self,
        store: &mut BoardStore,
        now: Instant,
        note: Note,
    ) -> NoteId {
        let id = store.update_active(now, |board| board.add_note(note));
        if let Some(note) = store.active_board().note(&id) {
            self.spatial.insert(note);
        }
        self.selected = Some(id.clone());
        id
    }

    /// Re-index a note after a host-side mutation (content edits and image
    /// ingestion change geometry outside any gesture).
    pub fn refresh_note(&mut self, board: &Board, id: &str) {
        match board.note(id) {
            Some(note) => self.spatial.update(note),
            None => {
                self.spatial.remove(id);
            }
        }
    }

    /// Pan so the given note is centered in the viewport, at the current
    /// zoom. No-op before the surface has been measured.
    pub fn center_on_note(&mut self, board: &Board, id: &str) -> bool {
        let (Some(viewport), Some(note)) = (self.viewport, board.note(id)) else {
            return false;
        };
        self.camera.pan = viewport.center() - note.center() * self.camera.zoom;
        true
    }

    /// Topmost note under the given canvas point, by z-order (later notes
    /// render in front).
    pub(crate) fn hit_note<'a>(&self, board: &'a Board, canvas_pos: Point) -> Option<&'a Note> {
        let candidates = self.spatial.query_point(canvas_pos.x, canvas_pos.y);
        board
            .notes
            .iter()
            .rev()
            .find(|note| candidates.contains(&note.id))
    }

    /// Notes intersecting a canvas-space rectangle (viewport culling query
    /// for the render surface).
    pub fn notes_in_rect<'a>(
        &self,
        board: &'a Board,
        min: Point,
        max: Point,
    ) -> Vec<&'a Note> {
        let ids = self.spatial.query_rect(min.x, min.y, max.x, max.y);
        board
            .notes
            .iter()
            .filter(|note| ids.contains(&note.id))
            .collect()
    }
}
