//! Display formatting for terminal output
//!
//! Provides formatting of the monthly settlement and summary figures for
//! the terminal.

pub mod summary;

pub use summary::{print_debt, print_shares, print_summary};
