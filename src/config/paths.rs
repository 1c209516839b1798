//! Path management for split-ledger
//!
//! Provides XDG-compliant path resolution for the configuration file and
//! the ledger file.
//!
//! ## Path Resolution Order
//!
//! 1. `SPLIT_LEDGER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/split-ledger` or `~/.config/split-ledger`
//! 3. Windows: `%APPDATA%\split-ledger`

use std::path::PathBuf;

use crate::error::{SplitError, SplitResult};

/// Manages all paths used by split-ledger
#[derive(Debug, Clone)]
pub struct SplitPaths {
    /// Base directory for all split-ledger data
    base_dir: PathBuf,
}

impl SplitPaths {
    /// Create a new SplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> SplitResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("SPLIT_LEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/split-ledger/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.yml")
    }

    /// Get the path to the ledger file with the configured name
    ///
    /// The ledger lives directly in the base directory, like the original
    /// tool's output file.
    pub fn ledger_file(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> SplitResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if a configuration file is present
    pub fn is_configured(&self) -> bool {
        self.config_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> SplitResult<PathBuf> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SplitError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("split-ledger"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> SplitResult<PathBuf> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("split-ledger"))
}
