//! Cryptographic functions for split-ledger
//!
//! Provides AES-256-GCM authenticated encryption with PBKDF2-SHA256 key
//! derivation for optional at-rest encryption of the ledger file.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{open, random_nonce, seal, NONCE_SIZE};
pub use key_derivation::{derive_key, random_salt, DerivedKey, KEY_SIZE, SALT_SIZE};
pub use secure_memory::Password;
