//! Show the stored ledger
//!
//! Decrypts (when encryption is enabled) and prints the ledger document as
//! pretty JSON, mirroring the original tool's show flag.

use crate::config::{SplitPaths, Settings};
use crate::error::{SplitError, SplitResult};

/// Print the stored ledger as pretty JSON
pub fn handle_show(paths: &SplitPaths, settings: &Settings) -> SplitResult<()> {
    let document = super::open_ledger(paths, settings)?;
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| SplitError::Json(format!("Failed to render ledger: {}", e)))?;
    println!("{}", json);
    Ok(())
}
