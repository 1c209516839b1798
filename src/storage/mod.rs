//! Storage layer for split-ledger
//!
//! Provides the on-disk container codec (encrypted and plain), atomic file
//! I/O, and the store orchestration that runs a load-merge-store cycle.

pub mod codec;
pub mod file_io;
pub mod store;

pub use file_io::{read_bytes, write_bytes_atomic, write_json_atomic};
pub use store::{LedgerStore, StorageMode};
