//! Password normalization and key derivation
//!
//! Keys are a single SHA-256 pass over the NFKC-normalized password wrapped
//! in a fixed template that carries the fcrypto domain tag. There is no salt
//! and no iteration count, so the same password always yields the same key.

use std::fmt;

use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{FcryptoError, FcryptoResult};

/// Literal mixed into every key so the digest is specific to fcrypto
pub const DOMAIN_TAG: &str = "fcrypto";

/// Length of the derived key in bytes
pub const KEY_SIZE: usize = 32;

/// A password after validation and NFKC normalization
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedPassword(Zeroizing<String>);

impl NormalizedPassword {
    /// Get the normalized text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NormalizedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedPassword")
            .field("len", &self.0.len())
            .finish()
    }
}

/// A derived encryption key
///
/// The bytes are zeroized when the key is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Normalize a password to its NFKC form
///
/// Fails with `EmptyPassword` if nothing is left after normalization.
pub fn normalize_password(password: &str) -> FcryptoResult<NormalizedPassword> {
    let normalized: String = password.nfkc().collect();
    if normalized.is_empty() {
        return Err(FcryptoError::EmptyPassword);
    }
    Ok(NormalizedPassword(Zeroizing::new(normalized)))
}

/// Validate raw password bytes as UTF-8, then normalize them
pub fn normalize_password_bytes(password: &[u8]) -> FcryptoResult<NormalizedPassword> {
    let text = std::str::from_utf8(password).map_err(|_| FcryptoError::InvalidPasswordEncoding)?;
    normalize_password(text)
}

/// Derive the file key from a password
pub fn derive_key(password: &str) -> FcryptoResult<DerivedKey> {
    let normalized = normalize_password(password)?;
    Ok(derive_key_normalized(&normalized))
}

/// Derive the file key from an already normalized password
///
/// Hashes `"[" + password + "][" + DOMAIN_TAG + "]"`.
pub fn derive_key_normalized(password: &NormalizedPassword) -> DerivedKey {
    let mut hasher = Sha256::new();
    hasher.update(b"[");
    hasher.update(password.as_str().as_bytes());
    hasher.update(b"][");
    hasher.update(DOMAIN_TAG.as_bytes());
    hasher.update(b"]");

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&hasher.finalize());
    DerivedKey { key }
}
