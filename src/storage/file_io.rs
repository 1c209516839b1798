//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure: every
//! write goes to a temp file in the same directory and is renamed over the
//! target, so a crash or interruption mid-write never leaves a truncated
//! container behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{SplitError, SplitResult};

/// Read a whole file into memory
pub fn read_bytes<P: AsRef<Path>>(path: P) -> SplitResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path)
        .map_err(|e| SplitError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> SplitResult<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SplitError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (required for an atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .map_err(|e| SplitError::Io(format!("Failed to create temp file: {}", e)))?;

    file.write_all(bytes)
        .map_err(|e| SplitError::Io(format!("Failed to write data: {}", e)))?;

    file.flush()
        .map_err(|e| SplitError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| SplitError::Io(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        SplitError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Serialize a value to pretty JSON and write it atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> SplitResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| SplitError::Json(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, &bytes)
}
