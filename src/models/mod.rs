//! Core data models for split-ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: the document stored on disk, period keys, and the typed
//! per-month record for the two configured users.

pub mod document;
pub mod period;
pub mod record;

pub use document::{LedgerDocument, MergeOutcome, PeriodFields};
pub use period::{Month, PeriodKey, Year};
pub use record::{EntryKind, PeriodRecord, UserAmounts, UserPair, UserSlot};
