//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Derives encryption keys from user passwords. The parameters are fixed
//! (100,000 iterations, 32-byte output) because the ledger container format
//! stores no KDF metadata: any reader must apply exactly these parameters
//! to the salt found in the file header.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

/// Size of the key derivation salt in bytes
pub const SALT_SIZE: usize = 32;

/// Size of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// PBKDF2 iteration count, fixed by the container format
const PBKDF2_ITERATIONS: u32 = 100_000;

/// A derived encryption key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

/// Derive an encryption key from a password and salt
///
/// Deterministic: the same (password, salt) pair always yields the same
/// key, which is what lets a later decrypt reproduce the encryption key
/// from the salt stored in the file header.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> DerivedKey {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}

/// Generate a fresh random salt from the OS CSPRNG
///
/// Called once per encryption so two writes of the same document under the
/// same password never share a key.
pub fn random_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_length() {
        let salt = random_salt();
        let key = derive_key(b"test_password", &salt);
        assert_eq!(key.as_bytes().len(), KEY_SIZE);
    }

    #[test]
    fn test_same_inputs_same_key() {
        let salt = random_salt();
        let key1 = derive_key(b"test_password", &salt);
        let key2 = derive_key(b"test_password", &salt);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = random_salt();
        let key1 = derive_key(b"password1", &salt);
        let key2 = derive_key(b"password2", &salt);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let salt1 = random_salt();
        let salt2 = random_salt();
        let key1 = derive_key(b"same_password", &salt1);
        let key2 = derive_key(b"same_password", &salt2);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_salts_are_fresh() {
        assert_ne!(random_salt(), random_salt());
    }
}
