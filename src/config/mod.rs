//! Configuration module for split-ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - YAML settings parsing and validation

pub mod paths;
pub mod settings;

pub use paths::SplitPaths;
pub use settings::Settings;
