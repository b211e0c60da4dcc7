//! File-backed cool-down store.
//!
//! Holds one JSON document, `{ "lastPostTime": <epoch ms> }`. Writes go to a
//! sibling temp file that is then renamed over the original, so a crash never
//! leaves a half-written file behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use anon_core::ports::{CooldownStore, StoreError};

const STATE_FILE_NAME: &str = "state.json";
const APP_DIR_NAME: &str = "arena-anon";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredState {
    last_post_time: i64,
}

#[derive(Debug, Clone)]
pub struct FileCooldownStore {
    path: PathBuf,
}

impl FileCooldownStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_STATE_HOME/arena-anon/state.json`, falling back to
    /// `$HOME/.local/state/arena-anon/state.json`, then the working directory.
    pub fn default_path() -> PathBuf {
        let base = std::env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/state"))
            })
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR_NAME).join(STATE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CooldownStore for FileCooldownStore {
    fn load(&self) -> Result<Option<i64>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let state: StoredState =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        Ok(Some(state.last_post_time))
    }

    fn save(&self, last_post_ms: i64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let body = serde_json::to_vec(&StoredState {
            last_post_time: last_post_ms,
        })
        .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), last_post_ms, "Cool-down state saved");
        Ok(())
    }
}
