//! Ledger store orchestration
//!
//! One `update` call runs the full load-merge-store cycle: ensure the
//! parent directory exists, decrypt the existing container (or start from
//! an empty document), merge the new period record, re-encode, and persist
//! atomically. A failed load never touches the file on disk.

use std::path::{Path, PathBuf};

use crate::crypto::Password;
use crate::error::{SplitError, SplitResult};
use crate::models::{LedgerDocument, MergeOutcome, PeriodFields, PeriodKey};

use super::codec;

/// Whether the ledger file is encrypted or plain JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Plain,
    Encrypted,
}

impl StorageMode {
    /// Map the configuration's encrypt flag to a mode
    pub fn from_encrypt_flag(encrypt: bool) -> Self {
        if encrypt {
            StorageMode::Encrypted
        } else {
            StorageMode::Plain
        }
    }
}

/// Owns the ledger file for the duration of a load or update cycle
pub struct LedgerStore {
    path: PathBuf,
    mode: StorageMode,
}

impl LedgerStore {
    /// Create a store for the given file and mode
    pub fn new(path: PathBuf, mode: StorageMode) -> Self {
        Self { path, mode }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the ledger file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load and decode the ledger file
    ///
    /// In encrypted mode a wrong password or a corrupted file surfaces as
    /// the opaque [`SplitError::Decryption`]; there is no partial recovery.
    pub fn load(&self, password: Option<&Password>) -> SplitResult<LedgerDocument> {
        if !self.exists() {
            return Err(SplitError::Io(format!(
                "Ledger file not found: {}",
                self.path.display()
            )));
        }
        match self.mode {
            StorageMode::Plain => codec::read_plain(&self.path),
            StorageMode::Encrypted => codec::read_encrypted(&self.path, self.require_password(password)?),
        }
    }

    /// Merge one period record into the stored ledger
    ///
    /// Returns the merge outcome so the caller can report a kept duplicate.
    /// When the merge is a no-op the file is left untouched; otherwise the
    /// whole document is re-encoded and replaced atomically, with a fresh
    /// salt and nonce in encrypted mode.
    pub fn update(
        &self,
        period: &PeriodKey,
        fields: PeriodFields,
        password: Option<&Password>,
        overwrite: bool,
    ) -> SplitResult<MergeOutcome> {
        if self.mode == StorageMode::Encrypted {
            self.require_password(password)?;
        }

        let mut document = if self.exists() {
            self.load(password)?
        } else {
            LedgerDocument::new()
        };

        let outcome = document.merge(period, fields, overwrite);
        if outcome.is_noop() {
            return Ok(outcome);
        }

        match self.mode {
            StorageMode::Plain => codec::write_plain(&self.path, &document)?,
            StorageMode::Encrypted => {
                codec::write_encrypted(&self.path, &document, self.require_password(password)?)?
            }
        }
        Ok(outcome)
    }

    fn require_password<'a>(&self, password: Option<&'a Password>) -> SplitResult<&'a Password> {
        password.ok_or_else(|| {
            SplitError::Config("Encryption is enabled but no password was provided".into())
        })
    }
}
