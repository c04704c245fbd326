use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// File name of the durable slot, kept equal to the storage key the
/// original web version used so the two are recognizably the same slot.
pub const SLOT_FILE_NAME: &str = "wizard-score-keeper-v1.json";

/// Environment variable selecting where the slot lives.
pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";

/// Resolve the data directory from the environment (defaults to the
/// current directory). A set-but-empty variable is a configuration error
/// rather than a silent fallback.
pub fn data_dir() -> Result<PathBuf, AppError> {
    match env::var(DATA_DIR_VAR) {
        Ok(value) if value.trim().is_empty() => Err(AppError::config(format!(
            "{DATA_DIR_VAR} is set but empty"
        ))),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(".")),
    }
}

/// Path of the slot file inside a data directory.
pub fn slot_path_in(dir: &Path) -> PathBuf {
    dir.join(SLOT_FILE_NAME)
}
