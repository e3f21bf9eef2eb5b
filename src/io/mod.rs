//! File output: the SVG document writer and the guarded file sink.

pub mod svg;

use crate::errors::ValidationError;
use std::fs;
use std::path::{Path, PathBuf};

/// Generic I/O and export errors.
///
/// Every variant carries the offending path or cause, so the message can be shown
/// to the user as is. Nothing here is retried; the caller decides whether to ask
/// for a new path or for permission to overwrite.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File {} already exists.", .0.display())]
    DestinationExists(PathBuf),
    #[error("File {} is a directory.", .0.display())]
    IsDirectory(PathBuf),
    #[error("File {} is not writable.", .0.display())]
    NotWritable(PathBuf),
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),
    #[error("Could not read JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Write `contents` to `path`.
///
/// Checked in order: a directory at `path` is refused, an existing file is refused
/// unless `overwrite` is set, and an existing read-only file is refused.
pub fn write_file(path: impl AsRef<Path>, contents: &str, overwrite: bool) -> Result<(), IoError> {
    let path = path.as_ref();

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.is_dir() {
            return Err(IoError::IsDirectory(path.to_path_buf()));
        }
        if !overwrite {
            return Err(IoError::DestinationExists(path.to_path_buf()));
        }
        if metadata.permissions().readonly() {
            return Err(IoError::NotWritable(path.to_path_buf()));
        }
    }

    fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Persist the user preferences blob, replacing any previous one.
pub fn save_user_prefs(path: impl AsRef<Path>, prefs_json: &str) -> Result<(), IoError> {
    write_file(path, prefs_json, true)
}

/// Read the user preferences blob; a missing file reads as `{}`.
pub fn load_user_prefs(path: impl AsRef<Path>) -> Result<String, IoError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(json) => Ok(json),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok("{}".to_string()),
        Err(err) => Err(err.into()),
    }
}
