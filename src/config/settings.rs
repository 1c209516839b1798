//! User settings for split-ledger
//!
//! The configuration file is YAML, with the same shape the original tool
//! used so existing `config.yml` files keep working: the two user names
//! plus the `json_output` block controlling persistence and encryption.

use serde::{Deserialize, Serialize};

use super::paths::SplitPaths;
use crate::error::{SplitError, SplitResult};
use crate::models::UserPair;

/// Ledger output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Whether to persist records at all
    #[serde(default)]
    pub enable: bool,

    /// File name of the ledger inside the data directory
    #[serde(default = "default_ledger_name")]
    pub name: String,

    /// Whether the ledger file is encrypted at rest
    #[serde(default)]
    pub encrypt: bool,

    /// Whether a record for an existing (year, month) replaces the stored one
    #[serde(default)]
    pub overwrite_duplicate_month: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            enable: false,
            name: default_ledger_name(),
            encrypt: false,
            overwrite_duplicate_month: false,
        }
    }
}

fn default_ledger_name() -> String {
    "expenses.json".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

/// User settings for split-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The two user names, in display order
    pub users: Vec<String>,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger persistence settings
    #[serde(default)]
    pub json_output: OutputSettings,
}

impl Settings {
    /// Load settings from the configuration file
    ///
    /// A missing file is a configuration error naming the expected path;
    /// there are no implicit defaults for the user names.
    pub fn load(paths: &SplitPaths) -> SplitResult<Self> {
        let config_path = paths.config_file();

        if !config_path.exists() {
            return Err(SplitError::Config(format!(
                "Missing configuration file: {}",
                config_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| SplitError::Io(format!("Failed to read configuration file: {}", e)))?;

        let settings: Settings = serde_yaml::from_str(&contents)
            .map_err(|e| SplitError::Config(format!("Failed to parse configuration file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> SplitResult<()> {
        if self.users.len() != 2 {
            return Err(SplitError::Config(format!(
                "Exactly two users must be configured, found {}",
                self.users.len()
            )));
        }
        if self.json_output.enable && self.json_output.name.trim().is_empty() {
            return Err(SplitError::Config(
                "json_output.name must not be empty when output is enabled".into(),
            ));
        }
        Ok(())
    }

    /// The configured users as a typed pair
    pub fn user_pair(&self) -> SplitResult<UserPair> {
        self.validate()?;
        UserPair::new(self.users[0].clone(), self.users[1].clone())
    }
}
