//! JSON Export functionality
//!
//! Writes the decrypted ledger as pretty-printed JSON, the same shape the
//! plaintext storage mode uses.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::LedgerDocument;

/// Export the ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(document: &LedgerDocument, mut writer: W) -> SplitResult<()> {
    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| SplitError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}
