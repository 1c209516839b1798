//! Service layer for split-ledger
//!
//! Business logic on top of the data models: the income-proportional
//! splitting of shared expenses and the monthly summary figures.

pub mod split;

pub use split::{round_cents, settle, summarize, Debt, MonthlySummary, Settlement};
