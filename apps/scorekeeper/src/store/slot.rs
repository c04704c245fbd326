//! The durable slot: one JSON document holding the full game record.
//!
//! The slot is read once at process start and written after every
//! transition. Read failures are never fatal — a missing or unreadable
//! slot yields `None` and the caller falls back to the initial record.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::warn;

use crate::config::app::slot_path_in;
use crate::domain::state::GameState;
use crate::error::AppError;

/// Read/write seam for the durable slot.
pub trait GameStore {
    /// Read the saved record, if a readable one exists.
    fn load(&self) -> Result<Option<GameState>, AppError>;

    /// Serialize the full record to the slot.
    fn save(&self, state: &GameState) -> Result<(), AppError>;
}

/// JSON-file slot store.
///
/// Holds an exclusive advisory lock on a sibling lock file for its whole
/// lifetime: one process writes a given slot at a time.
pub struct JsonSlotStore {
    path: PathBuf,
    _lock: File,
}

impl JsonSlotStore {
    /// Open the slot inside `dir`, creating the directory as needed and
    /// taking the single-writer lock.
    pub fn open(dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::storage(format!("create {}: {e}", dir.display())))?;

        let path = slot_path_in(dir);
        let lock_path = path.with_extension("lock");
        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| AppError::storage(format!("open {}: {e}", lock_path.display())))?;
        // try_lock_exclusive() returns io::Result<bool>: Ok(true) = lock
        // acquired, Ok(false) = would block, Err = I/O error.
        match lock.try_lock_exclusive() {
            Ok(true) => Ok(Self { path, _lock: lock }),
            Ok(false) => Err(AppError::storage(format!(
                "slot {} is in use by another scorekeeper session",
                path.display()
            ))),
            Err(e) if e.kind() == ErrorKind::WouldBlock => Err(AppError::storage(format!(
                "slot {} is in use by another scorekeeper session",
                path.display()
            ))),
            Err(e) => Err(AppError::storage(format!(
                "lock {}: {e}",
                lock_path.display()
            ))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for JsonSlotStore {
    fn load(&self) -> Result<Option<GameState>, AppError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        match serde_json::from_str(&text) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Slot unreadable, ignoring it");
                Ok(None)
            }
        }
    }

    fn save(&self, state: &GameState) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AppError::storage(format!("serialize game record: {e}")))?;

        // Write-then-rename keeps the slot intact if the process dies
        // mid-write.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| AppError::storage(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| AppError::storage(format!("rename into {}: {e}", self.path.display())))
    }
}
