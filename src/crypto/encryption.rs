//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption for the ledger container. The cipher
//! is instantiated with a 128-bit nonce to match the container format; the
//! 16-byte authentication tag is appended to the ciphertext. Tag
//! verification happens inside the AEAD implementation, which compares in
//! constant time.

use aes_gcm::{
    aead::{consts::U16, Aead, KeyInit, OsRng, Payload},
    aes::Aes256,
    AesGcm, Nonce,
};
use aes_gcm::aead::rand_core::RngCore;

use crate::error::{SplitError, SplitResult};

use super::DerivedKey;

/// Size of the AES-GCM nonce in bytes (128 bits, fixed by the container format)
pub const NONCE_SIZE: usize = 16;

/// AES-256-GCM with a 16-byte nonce
type ContainerCipher = AesGcm<Aes256, U16>;

/// Encrypt plaintext under a key and nonce, binding `aad` into the tag
///
/// Returns the ciphertext with the 16-byte tag appended.
pub fn seal(
    key: &DerivedKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
) -> SplitResult<Vec<u8>> {
    let cipher = ContainerCipher::new_from_slice(key.as_bytes())
        .map_err(|e| SplitError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .encrypt(
            Nonce::<U16>::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| SplitError::Encryption(format!("Encryption failed: {}", e)))
}

/// Decrypt ciphertext-with-tag, verifying the tag against key/nonce/aad
///
/// Fails with [`SplitError::Authentication`] if the tag does not verify:
/// wrong key (wrong password or salt) or modified bytes.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_SIZE],
    ciphertext_with_tag: &[u8],
    aad: &[u8],
) -> SplitResult<Vec<u8>> {
    let cipher = ContainerCipher::new_from_slice(key.as_bytes())
        .map_err(|e| SplitError::Encryption(format!("Failed to create cipher: {}", e)))?;

    cipher
        .decrypt(
            Nonce::<U16>::from_slice(nonce),
            Payload {
                msg: ciphertext_with_tag,
                aad,
            },
        )
        .map_err(|_| SplitError::Authentication)
}

/// Generate a fresh random nonce from the OS CSPRNG
pub fn random_nonce() -> [u8; NONCE_SIZE] {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
