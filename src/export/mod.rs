//! Export module for split-ledger
//!
//! Provides ledger export in two formats:
//! - CSV: one row per stored (year, month), spreadsheet-compatible
//! - JSON: the full document, pretty-printed

pub mod csv;
pub mod json;

pub use csv::export_ledger_csv;
pub use json::export_ledger_json;
