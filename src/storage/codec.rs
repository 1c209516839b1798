//! On-disk container codec
//!
//! The encrypted container is `salt(32) || nonce(16) || ciphertext+tag`.
//! The salt and nonce double as the AAD, so a ciphertext cannot be replayed
//! under a different header. Outside this module the container is opaque;
//! any external reader must apply PBKDF2-SHA256 (100,000 iterations, 32-byte
//! key) and AES-256-GCM with AAD = salt‖nonce to interoperate.
//!
//! In plaintext mode the document is stored as plain JSON with no header.

use std::path::Path;

use crate::crypto::{
    derive_key, open, random_nonce, random_salt, seal, Password, NONCE_SIZE, SALT_SIZE,
};
use crate::error::{SplitError, SplitResult};
use crate::models::LedgerDocument;

use super::file_io;

/// Combined size of the salt and nonce header
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// Serialize a document to its canonical JSON bytes
fn document_to_json(document: &LedgerDocument) -> SplitResult<Vec<u8>> {
    serde_json::to_vec(document)
        .map_err(|e| SplitError::Json(format!("Failed to serialize ledger: {}", e)))
}

/// Encrypt a document into a complete container byte sequence
///
/// Generates a fresh salt and nonce, so two calls with the same document
/// and password never produce the same bytes.
pub fn seal_document(document: &LedgerDocument, password: &Password) -> SplitResult<Vec<u8>> {
    let salt = random_salt();
    let nonce = random_nonce();
    let key = derive_key(password.as_bytes(), &salt);

    let plaintext = document_to_json(document)?;

    let mut container = Vec::with_capacity(HEADER_SIZE + plaintext.len() + 16);
    container.extend_from_slice(&salt);
    container.extend_from_slice(&nonce);

    let ciphertext = seal(&key, &nonce, &plaintext, &container[..HEADER_SIZE])?;
    container.extend_from_slice(&ciphertext);
    Ok(container)
}

/// Decrypt a container byte sequence back into a document
///
/// Every failure mode (truncated header, tag mismatch, undecodable JSON)
/// maps to the same opaque [`SplitError::Decryption`]: the caller cannot
/// tell a wrong password from a corrupted file, and neither can an
/// attacker guessing passwords.
pub fn open_document(container: &[u8], password: &Password) -> SplitResult<LedgerDocument> {
    if container.len() < HEADER_SIZE {
        return Err(SplitError::Decryption);
    }

    let (header, ciphertext) = container.split_at(HEADER_SIZE);

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&header[..SALT_SIZE]);
    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&header[SALT_SIZE..]);

    let key = derive_key(password.as_bytes(), &salt);
    let plaintext = open(&key, &nonce, ciphertext, header).map_err(|_| SplitError::Decryption)?;

    serde_json::from_slice(&plaintext).map_err(|_| SplitError::Decryption)
}

/// Encrypt a document and write the container to `path` atomically
pub fn write_encrypted<P: AsRef<Path>>(
    path: P,
    document: &LedgerDocument,
    password: &Password,
) -> SplitResult<()> {
    let container = seal_document(document, password)?;
    file_io::write_bytes_atomic(path, &container)
}

/// Read and decrypt a container from `path`
pub fn read_encrypted<P: AsRef<Path>>(path: P, password: &Password) -> SplitResult<LedgerDocument> {
    let container = file_io::read_bytes(path)?;
    open_document(&container, password)
}

/// Write a document to `path` as plain JSON, atomically
pub fn write_plain<P: AsRef<Path>>(path: P, document: &LedgerDocument) -> SplitResult<()> {
    file_io::write_json_atomic(path, document)
}

/// Read a plain JSON document from `path`
pub fn read_plain<P: AsRef<Path>>(path: P) -> SplitResult<LedgerDocument> {
    let path = path.as_ref();
    let bytes = file_io::read_bytes(path)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| SplitError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, PeriodFields, PeriodKey, Year};
    use tempfile::TempDir;

    fn sample_document() -> LedgerDocument {
        let mut doc = LedgerDocument::new();
        let mut fields = PeriodFields::new();
        fields.insert("alice_income".into(), 2000.0);
        fields.insert("bob_income".into(), 1500.0);
        fields.insert("alice_shared_exp".into(), 321.43);
        fields.insert("bob_shared_exp".into(), 241.07);
        fields.insert("alice_personal_exp".into(), 80.0);
        fields.insert("bob_personal_exp".into(), 40.0);
        let period = PeriodKey::new(Year::new(2024).unwrap(), Month::Mar);
        doc.merge(&period, fields, false);
        doc
    }

    #[test]
    fn test_container_round_trip() {
        let doc = sample_document();
        let password = Password::new("correct horse");

        let container = seal_document(&doc, &password).unwrap();
        let decoded = open_document(&container, &password).unwrap();

        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_container_layout() {
        let doc = sample_document();
        let password = Password::new("pw");

        let container = seal_document(&doc, &password).unwrap();
        let json_len = serde_json::to_vec(&doc).unwrap().len();

        // salt || nonce || ciphertext || tag
        assert_eq!(container.len(), HEADER_SIZE + json_len + 16);
    }

    #[test]
    fn test_wrong_password_is_opaque_failure() {
        let doc = sample_document();
        let container = seal_document(&doc, &Password::new("right")).unwrap();

        let result = open_document(&container, &Password::new("wrong"));
        assert!(matches!(result, Err(SplitError::Decryption)));
    }

    #[test]
    fn test_any_flipped_bit_fails() {
        let doc = sample_document();
        let password = Password::new("pw");
        let container = seal_document(&doc, &password).unwrap();

        // Flip one bit in the salt, the nonce, the ciphertext, and the tag
        for index in [0, SALT_SIZE, HEADER_SIZE, container.len() - 1] {
            let mut tampered = container.clone();
            tampered[index] ^= 0x01;
            let result = open_document(&tampered, &password);
            assert!(
                matches!(result, Err(SplitError::Decryption)),
                "bit flip at byte {} was not detected",
                index
            );
        }
    }

    #[test]
    fn test_truncated_container_fails() {
        let doc = sample_document();
        let password = Password::new("pw");
        let container = seal_document(&doc, &password).unwrap();

        for len in [0, 10, HEADER_SIZE - 1, HEADER_SIZE, HEADER_SIZE + 4] {
            let result = open_document(&container[..len], &password);
            assert!(matches!(result, Err(SplitError::Decryption)));
        }
    }

    #[test]
    fn test_salt_is_fresh_per_write() {
        let doc = sample_document();
        let password = Password::new("pw");

        let first = seal_document(&doc, &password).unwrap();
        let second = seal_document(&doc, &password).unwrap();

        assert_ne!(first, second);
        assert_ne!(first[..SALT_SIZE], second[..SALT_SIZE]);

        // Both still decrypt under the same password
        assert_eq!(open_document(&first, &password).unwrap(), doc);
        assert_eq!(open_document(&second, &password).unwrap(), doc);
    }

    #[test]
    fn test_encrypted_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.enc");
        let doc = sample_document();
        let password = Password::new("pw");

        write_encrypted(&path, &doc, &password).unwrap();
        let loaded = read_encrypted(&path, &password).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_plain_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        let doc = sample_document();

        write_plain(&path, &doc).unwrap();
        let loaded = read_plain(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_plain_file_is_readable_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        write_plain(&path, &sample_document()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"2024\""));
        assert!(raw.contains("alice_income"));
    }

    #[test]
    fn test_read_plain_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(read_plain(&path), Err(SplitError::Json(_))));
    }
}
