//! Ledger export command
//!
//! Exports the decrypted ledger to CSV or JSON, to stdout or a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::{SplitPaths, Settings};
use crate::error::{SplitError, SplitResult};
use crate::export::{export_ledger_csv, export_ledger_json};
use crate::models::{LedgerDocument, UserPair};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export the stored ledger in the requested format
pub fn handle_export(
    paths: &SplitPaths,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SplitResult<()> {
    let document = super::open_ledger(paths, settings)?;
    let users = settings.user_pair()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SplitError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_export(&document, &users, format, file)?;
            println!("Exported ledger to {}", path.display());
        }
        None => {
            write_export(&document, &users, format, io::stdout().lock())?;
        }
    }
    Ok(())
}

fn write_export<W: Write>(
    document: &LedgerDocument,
    users: &UserPair,
    format: ExportFormat,
    writer: W,
) -> SplitResult<()> {
    match format {
        ExportFormat::Csv => export_ledger_csv(document, users, writer),
        ExportFormat::Json => export_ledger_json(document, writer),
    }
}
