//! The backend persistence channel.
//!
//! The engine treats persistence as an opaque request/response contract:
//! `fetch_boards` returns either a bare board list or a
//! `{boards, activeBoardId}` envelope as raw JSON, `save_boards` writes the
//! entire list plus active id. Two adapters are provided: an in-memory
//! channel for embedding hosts and tests, and a JSON-file channel with
//! atomic writes.

use crate::types::Board;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors crossing the channel boundary.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend could not be reached
    #[error("backend channel unavailable: {0}")]
    Unavailable(String),
}

/// The `save-boards` request payload: always the whole list plus active id.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest<'a> {
    pub boards: &'a [Board],
    pub active_board_id: &'a str,
}

/// The opaque backend contract.
pub trait BoardChannel {
    /// `get-boards`: a bare `Board[]` or a `{boards, activeBoardId}`
    /// envelope, as raw JSON.
    fn fetch_boards(&self) -> Result<Value, ChannelError>;

    /// `save-boards`: persist the full request.
    fn save_boards(&self, request: &SaveRequest<'_>) -> Result<(), ChannelError>;
}

/// A decoded `get-boards` response.
pub struct LoadedBoards {
    pub boards: Vec<Board>,
    pub active_board_id: Option<String>,
    /// Entries dropped by defensive filtering.
    pub dropped: usize,
}

/// Decode either response shape. Malformed board entries are filtered
/// defensively, not repaired.
pub fn decode_load_response(value: &Value) -> LoadedBoards {
    let (entries, active_board_id) = match value {
        Value::Array(entries) => (entries.as_slice(), None),
        Value::Object(map) => {
            let entries = map
                .get("boards")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let active = map
                .get("activeBoardId")
                .and_then(Value::as_str)
                .map(str::to_string);
            (entries, active)
        }
        _ => (&[][..], None),
    };

    let mut boards = Vec::with_capacity(entries.len());
    let mut dropped = 0;
    for entry in entries {
        match serde_json::from_value::<Board>(entry.clone()) {
            Ok(board) => boards.push(board),
            Err(err) => {
                dropped += 1;
                tracing::warn!(error = %err, "dropping malformed persisted board");
            }
        }
    }

    LoadedBoards {
        boards,
        active_board_id,
        dropped,
    }
}

#[derive(Default)]
struct MemoryState {
    stored: Option<Value>,
    saves: usize,
}

/// In-memory channel: hosts that bridge to their own persistence keep the
/// shared handle; tests inspect what was saved.
#[derive(Clone, Default)]
pub struct MemoryChannel {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel pre-seeded with a `get-boards` response.
    pub fn seeded(value: Value) -> Self {
        let channel = Self::new();
        channel.state.lock().stored = Some(value);
        channel
    }

    /// The most recently saved payload, if any.
    pub fn snapshot(&self) -> Option<Value> {
        self.state.lock().stored.clone()
    }

    /// How many saves have landed.
    pub fn save_count(&self) -> usize {
        self.state.lock().saves
    }
}

impl BoardChannel for MemoryChannel {
    fn fetch_boards(&self) -> Result<Value, ChannelError> {
        Ok(self
            .state
            .lock()
            .stored
            .clone()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    fn save_boards(&self, request: &SaveRequest<'_>) -> Result<(), ChannelError> {
        let mut state = self.state.lock();
        state.stored = Some(serde_json::to_value(request)?);
        state.saves += 1;
        Ok(())
    }
}

/// File-backed channel writing pretty JSON atomically (tempfile + rename).
pub struct JsonFileChannel {
    path: PathBuf,
}

impl JsonFileChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional location under the user's data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("paperboard").join("boards.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardChannel for JsonFileChannel {
    fn fetch_boards(&self) -> Result<Value, ChannelError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Value::Array(Vec::new()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save_boards(&self, request: &SaveRequest<'_>) -> Result<(), ChannelError> {
        let parent = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&parent)?;

        let bytes = serde_json::to_vec_pretty(request)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
