//! Cryptographic functions for fcrypto
//!
//! Provides XSalsa20-Poly1305 (NaCl secretbox) sealing with keys derived from a single
//! SHA-256 pass over the normalized password.

pub mod encryption;
pub mod key_derivation;

pub use encryption::{generate_nonce, open, seal, Nonce, NONCE_SIZE, OVERHEAD};
pub use key_derivation::{
    derive_key, derive_key_normalized, normalize_password, normalize_password_bytes, DerivedKey,
    NormalizedPassword, DOMAIN_TAG, KEY_SIZE,
};
