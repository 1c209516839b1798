//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service and storage layers.

pub mod export;
pub mod input;
pub mod record;
pub mod show;

pub use export::{handle_export, ExportFormat};
pub use record::handle_add;
pub use show::handle_show;

use crate::config::{SplitPaths, Settings};
use crate::error::SplitResult;
use crate::models::LedgerDocument;
use crate::storage::{LedgerStore, StorageMode};

/// Load the configured ledger, prompting for the password when encrypted
pub(crate) fn open_ledger(paths: &SplitPaths, settings: &Settings) -> SplitResult<LedgerDocument> {
    let store = LedgerStore::new(
        paths.ledger_file(&settings.json_output.name),
        StorageMode::from_encrypt_flag(settings.json_output.encrypt),
    );

    let password = if settings.json_output.encrypt {
        Some(input::prompt_password()?)
    } else {
        None
    };
    store.load(password.as_ref())
}
