//! XSalsa20-Poly1305 sealing and opening
//!
//! Provides authenticated encryption for container payloads using the NaCl
//! secretbox construction, so sealed output is the 16-byte tag followed by
//! the ciphertext. Every save draws a fresh 24-byte nonce from the OS random
//! source.

use crypto_secretbox::{
    aead::{Aead, KeyInit},
    XSalsa20Poly1305,
};

use crate::error::{FcryptoError, FcryptoResult};

use super::DerivedKey;

/// Size of the XSalsa20 nonce in bytes (192 bits)
pub const NONCE_SIZE: usize = 24;

/// Bytes the Poly1305 tag adds to every sealed payload
pub const OVERHEAD: usize = 16;

/// A per-save nonce
pub type Nonce = [u8; NONCE_SIZE];

/// Fill a new nonce from the OS random source
pub fn generate_nonce() -> FcryptoResult<Nonce> {
    let mut nonce = [0u8; NONCE_SIZE];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| FcryptoError::NonceGeneration(format!("nonce short read: {}", e)))?;
    Ok(nonce)
}

/// Seal plaintext under the key and nonce
///
/// The output is the tag followed by the ciphertext, `OVERHEAD` bytes
/// longer than the input.
pub fn seal(key: &DerivedKey, nonce: &Nonce, plaintext: &[u8]) -> FcryptoResult<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new(key.as_bytes().into());
    cipher
        .encrypt(crypto_secretbox::Nonce::from_slice(nonce), plaintext)
        .map_err(|e| FcryptoError::Encryption(format!("Sealing failed: {}", e)))
}

/// Authenticate and decrypt a sealed payload
pub fn open(key: &DerivedKey, nonce: &Nonce, sealed: &[u8]) -> FcryptoResult<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new(key.as_bytes().into());
    cipher
        .decrypt(crypto_secretbox::Nonce::from_slice(nonce), sealed)
        .map_err(|_| FcryptoError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key_derivation::derive_key;

    fn test_key() -> DerivedKey {
        derive_key("test_passphrase").unwrap()
    }

    #[test]
    fn test_seal_open() {
        let key = test_key();
        let nonce = generate_nonce().unwrap();
        let plaintext = b"Hello, World!";

        let sealed = seal(&key, &nonce, plaintext).unwrap();
        let opened = open(&key, &nonce, &sealed).unwrap();

        assert_eq!(plaintext, opened.as_slice());
    }

    #[test]
    fn test_sealed_length() {
        let key = test_key();
        let nonce = generate_nonce().unwrap();

        for len in [0usize, 1, 15, 16, 1000] {
            let sealed = seal(&key, &nonce, &vec![7u8; len]).unwrap();
            assert_eq!(sealed.len(), len + OVERHEAD);
        }
    }

    #[test]
    fn test_different_nonces() {
        let nonce1 = generate_nonce().unwrap();
        let nonce2 = generate_nonce().unwrap();
        assert_ne!(nonce1, nonce2);
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = test_key();
        let key2 = derive_key("different_passphrase").unwrap();
        let nonce = generate_nonce().unwrap();

        let sealed = seal(&key1, &nonce, b"Hello, World!").unwrap();
        let result = open(&key2, &nonce, &sealed);
        assert!(matches!(result, Err(FcryptoError::DecryptionFailed)));
    }

    #[test]
    fn test_wrong_nonce_fails() {
        let key = test_key();
        let nonce = generate_nonce().unwrap();
        let mut other = nonce;
        other[0] ^= 0x01;

        let sealed = seal(&key, &nonce, b"Hello, World!").unwrap();
        assert!(open(&key, &other, &sealed).is_err());
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = test_key();
        let nonce = generate_nonce().unwrap();

        let mut sealed = seal(&key, &nonce, b"Hello, World!").unwrap();
        sealed[0] ^= 0xFF;

        let result = open(&key, &nonce, &sealed);
        assert!(matches!(result, Err(FcryptoError::DecryptionFailed)));
    }

    fn counting_nonce() -> Nonce {
        let mut nonce = [0u8; NONCE_SIZE];
        for (i, byte) in nonce.iter_mut().enumerate() {
            *byte = i as u8;
        }
        nonce
    }

    #[test]
    fn test_seal_matches_secretbox() {
        // NaCl crypto_secretbox output for key SHA-256("[bar][fcrypto]")
        let expected: [u8; 22] = [
            0x07, 0x48, 0xff, 0x04, 0xdd, 0xfd, 0x8c, 0x01, 0xbd, 0xc2, 0x0f, 0x56, 0x84, 0xfd,
            0xac, 0xe9, 0x2c, 0xe2, 0x1e, 0x0b, 0xbc, 0x0f,
        ];
        let key = derive_key("bar").unwrap();

        let sealed = seal(&key, &counting_nonce(), b"foobar").unwrap();
        assert_eq!(sealed, expected);

        let opened = open(&key, &counting_nonce(), &expected).unwrap();
        assert_eq!(opened, b"foobar");
    }
}
