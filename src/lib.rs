//! split-ledger - Terminal tool for splitting shared expenses
//!
//! This library provides the core functionality for split-ledger: two
//! users' monthly income and expenses are split proportionally to income,
//! and each month's record is merged into a per-year, per-month ledger
//! that can be encrypted at rest with a password.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration file and path management
//! - `error`: Custom error types
//! - `models`: The ledger document, period keys, and typed records
//! - `crypto`: Key derivation and authenticated encryption
//! - `storage`: Container codec, atomic file I/O, and store orchestration
//! - `services`: The expense-splitting arithmetic
//! - `display`: Terminal output of the monthly settlement
//! - `export`: CSV/JSON export of the stored ledger
//! - `cli`: Command handlers
//!
//! # On-disk format
//!
//! With encryption enabled the ledger file is
//! `salt(32) || nonce(16) || ciphertext+tag`, where the key is derived
//! with PBKDF2-SHA256 (100,000 iterations) and the payload sealed with
//! AES-256-GCM using the salt‖nonce header as AAD. Without encryption the
//! file is the plain JSON document.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::SplitError;
