//! The board store: single source of truth for the board list, the active
//! board pointer, persistence round-trips and legacy migration.
//!
//! All mutation is funneled through the store's update functions; no other
//! component holds a durable copy of the board list. That discipline is
//! what keeps migrations, guards and debounced persistence consistent.

pub mod channel;
pub mod migration;
mod persist;

pub use channel::{
    decode_load_response, BoardChannel, ChannelError, JsonFileChannel, LoadedBoards,
    MemoryChannel, SaveRequest,
};
pub use persist::PreviewCapture;

use crate::constants::CREATE_GUARD_MS;
use crate::types::Board;
use migration::migrate_boards;
use once_cell::sync::Lazy;
use persist::SaveScheduler;
use regex::Regex;
use std::time::{Duration, Instant};
use thiserror::Error;

static BOARD_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Board (\d+)$").expect("board name pattern is valid")
});

/// Errors surfaced by store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

pub struct BoardStore {
    channel: Box<dyn BoardChannel>,
    boards: Vec<Board>,
    active_board_id: String,
    /// A board id requested by an external navigation; honored once by the
    /// next load, then consumed.
    pending_navigation: Option<String>,
    /// When a board creation started and has not yet settled.
    create_guard: Option<Instant>,
    saver: SaveScheduler,
}

impl BoardStore {
    /// A store always holds at least one board, from birth: before the
    /// first load it carries a synthesized default.
    pub fn new(channel: Box<dyn BoardChannel>) -> Self {
        let board = Board::new(next_board_name(&[]));
        let active_board_id = board.id.clone();
        Self {
            channel,
            boards: vec![board],
            active_board_id,
            pending_navigation: None,
            create_guard: None,
            saver: SaveScheduler::default(),
        }
    }

    // ==================== Accessors ====================

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn active_board_id(&self) -> &str {
        &self.active_board_id
    }

    /// The active board. The active id always resolves to a member of the
    /// set; should that invariant ever be violated the first board stands
    /// in (the list is never empty).
    pub fn active_board(&self) -> &Board {
        self.boards
            .iter()
            .find(|b| b.id == self.active_board_id)
            .unwrap_or(&self.boards[0])
    }

    pub fn is_dirty(&self) -> bool {
        self.saver.is_dirty()
    }

    // ==================== Load ====================

    /// Fetch persisted state through the channel. Failures and empty
    /// responses both fall back to a synthesized default board; the store
    /// is never left empty.
    pub fn load(&mut self, now: Instant) {
        let value = match self.channel.fetch_boards() {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(error = %err, "board load failed; synthesizing default board");
                serde_json::Value::Array(Vec::new())
            }
        };
        let loaded = decode_load_response(&value);

        let mut boards = loaded.boards;
        if boards.is_empty() {
            boards.push(Board::new(next_board_name(&boards)));
            self.saver.mark(now);
        }

        let migrated = migrate_boards(&mut boards);
        if migrated > 0 {
            tracing::info!(count = migrated, "migrated legacy image notes");
            self.saver.mark(now);
        }

        fn resolves(id: &str, set: &[Board]) -> bool {
            set.iter().any(|b| b.id == id)
        }

        let active = if self.creation_pending(now) {
            // The load raced a creation: keep the current selection (and
            // the freshly created board, which the backend cannot know
            // about yet) rather than overriding it.
            if !resolves(&self.active_board_id, &boards) {
                if let Some(current) = self.boards.iter().find(|b| b.id == self.active_board_id) {
                    boards.push(current.clone());
                }
            }
            if resolves(&self.active_board_id, &boards) {
                self.active_board_id.clone()
            } else {
                boards[0].id.clone()
            }
        } else {
            self.pending_navigation
                .take()
                .filter(|id| resolves(id, &boards))
                .or_else(|| {
                    loaded
                        .active_board_id
                        .filter(|id| resolves(id, &boards))
                })
                .unwrap_or_else(|| boards[0].id.clone())
        };

        self.boards = boards;
        self.active_board_id = active;
    }

    // ==================== Navigation ====================

    /// Record an external "navigate to board" request, honored once by the
    /// next load.
    pub fn request_navigation(&mut self, board_id: impl Into<String>) {
        self.pending_navigation = Some(board_id.into());
    }

    /// Switch the active board. Touches its `last_accessed` stamp. Returns
    /// false for an unknown id.
    pub fn activate_board(&mut self, id: &str, now: Instant) -> bool {
        if !self.boards.iter().any(|b| b.id == id) {
            return false;
        }
        self.active_board_id = id.to_string();
        if let Some(board) = self.boards.iter_mut().find(|b| b.id == id) {
            board.touch();
        }
        self.saver.mark(now);
        true
    }

    // ==================== Creation / Deletion ====================

    /// Create a board, auto-named `Board N`, and make it active. Returns
    /// `None` when a creation is already pending (duplicate invocation
    /// within the guard window); the guard clears on
    /// [`creation_settled`](Self::creation_settled) or after
    /// [`CREATE_GUARD_MS`].
    pub fn create_board(&mut self, now: Instant) -> Option<String> {
        if self.creation_pending(now) {
            tracing::debug!("duplicate board creation suppressed");
            return None;
        }
        self.create_guard = Some(now);

        let board = Board::new(next_board_name(&self.boards));
        let id = board.id.clone();
        self.boards.push(board);
        self.active_board_id = id.clone();
        self.saver.mark(now);
        Some(id)
    }

    /// Release the creation guard once the triggering operation settled.
    pub fn creation_settled(&mut self) {
        self.create_guard = None;
    }

    pub fn creation_pending(&self, now: Instant) -> bool {
        self.create_guard.is_some_and(|started| {
            now.saturating_duration_since(started) < Duration::from_millis(CREATE_GUARD_MS)
        })
    }

    /// Delete a board. Deleting the last remaining board is a no-op: at
    /// least one board must always exist.
    pub fn delete_board(&mut self, id: &str, now: Instant) -> bool {
        if self.boards.len() <= 1 {
            tracing::debug!("refusing to delete the last board");
            return false;
        }
        let before = self.boards.len();
        self.boards.retain(|b| b.id != id);
        if self.boards.len() == before {
            return false;
        }
        if self.active_board_id == id {
            self.active_board_id = self.boards[0].id.clone();
        }
        self.saver.mark(now);
        true
    }

    /// Rename a board. Whitespace is trimmed; an empty name is rejected.
    pub fn rename_board(&mut self, id: &str, name: &str, now: Instant) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(board) = self.boards.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        board.name = name.to_string();
        self.saver.mark(now);
        true
    }

    // ==================== Mutation Funnel ====================

    /// Apply a mutation to the active board and mark the store dirty.
    pub fn update_active<R>(&mut self, now: Instant, f: impl FnOnce(&mut Board) -> R) -> R {
        let index = self
            .boards
            .iter()
            .position(|b| b.id == self.active_board_id)
            .unwrap_or(0);
        let result = f(&mut self.boards[index]);
        self.saver.mark(now);
        result
    }

    /// Apply a mutation to a specific board and mark the store dirty.
    pub fn update_board<R>(
        &mut self,
        id: &str,
        now: Instant,
        f: impl FnOnce(&mut Board) -> R,
    ) -> Option<R> {
        let index = self.boards.iter().position(|b| b.id == id)?;
        let result = f(&mut self.boards[index]);
        self.saver.mark(now);
        Some(result)
    }

    // ==================== Persistence ====================

    /// Write out the debounced save if one is due. Returns whether a write
    /// happened. On channel failure the store stays dirty and the next
    /// poll retries.
    pub fn poll_save(&mut self, now: Instant) -> Result<bool, StoreError> {
        if !self.saver.is_due(now) {
            return Ok(false);
        }
        self.write_out()?;
        self.saver.clear();
        Ok(true)
    }

    /// Write immediately, regardless of the debounce window.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.write_out()?;
        self.saver.clear();
        Ok(())
    }

    fn write_out(&self) -> Result<(), StoreError> {
        let request = SaveRequest {
            boards: &self.boards,
            active_board_id: &self.active_board_id,
        };
        self.channel.save_boards(&request)?;
        Ok(())
    }

    // ==================== Preview Capture ====================

    /// Begin a preview capture of the active board. The returned token
    /// pins the board id; every later checkpoint re-validates it.
    pub fn begin_preview_capture(&self) -> PreviewCapture {
        PreviewCapture {
            board_id: self.active_board_id.clone(),
        }
    }

    /// Checkpoint: is the capture still for the active board?
    pub fn capture_valid(&self, capture: &PreviewCapture) -> bool {
        capture.board_id == self.active_board_id
    }

    /// Complete a capture. A stale token (active board changed during the
    /// asynchronous wait) aborts without side effects; a valid one
    /// triggers an immediate persist.
    pub fn finish_preview_capture(
        &mut self,
        capture: PreviewCapture,
    ) -> Result<bool, StoreError> {
        if !self.capture_valid(&capture) {
            tracing::debug!(
                board_id = %capture.board_id,
                "preview capture aborted; active board changed"
            );
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Record a failed capture. Non-fatal, no retry.
    pub fn preview_capture_failed(&self, capture: &PreviewCapture, err: &anyhow::Error) {
        tracing::warn!(
            board_id = %capture.board_id,
            error = %err,
            "preview capture failed; skipping thumbnail"
        );
    }
}

/// Auto-name for a new board: `Board N` with the smallest positive `N` not
/// already used by a name matching the pattern.
fn next_board_name(boards: &[Board]) -> String {
    let used: Vec<u64> = boards
        .iter()
        .filter_map(|b| BOARD_NAME_RE.captures(&b.name))
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    let mut n = 1;
    while used.contains(&n) {
        n += 1;
    }
    format!("Board {n}")
}
