//! The versioned text container
//!
//! ```text
//! # Encrypted fcrypto file
//!
//! FCRYPTO_V0:
//! <base64 of nonce || sealed payload>
//! ```
//!
//! Anything whose first meaningful line is not the marker is treated as
//! plaintext and passed through untouched.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD, write::EncoderWriter, Engine};
use tracing::debug;

use crate::crypto::{self, DerivedKey, Nonce, NONCE_SIZE, OVERHEAD};
use crate::error::{FcryptoError, FcryptoResult, SaveStage};

/// Human readable first line of every container
pub const BANNER: &str = "# Encrypted fcrypto file";

/// Sentinel line; its text is the format version tag
pub const MARKER: &str = "FCRYPTO_V0:";

/// Smallest decoded body that can hold a nonce and a tag
pub const MIN_BODY_LEN: usize = NONCE_SIZE + OVERHEAD;

/// Find where the encoded body starts
///
/// Blank lines and lines starting with `;` or `#` are skipped. Returns
/// `None` when the first remaining line is not the marker, or when there is
/// no such line at all.
pub fn body_offset(content: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while offset < content.len() {
        let end = content[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(content.len(), |i| offset + i);
        let next = (end + 1).min(content.len());

        let line = String::from_utf8_lossy(&content[offset..end]);
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            offset = next;
            continue;
        }

        return (line == MARKER).then_some(next);
    }
    None
}

/// Check whether content is an fcrypto container
pub fn is_container(content: &[u8]) -> bool {
    body_offset(content).is_some()
}

/// Write a complete container for the plaintext
///
/// The body is base64 encoded on the fly into `writer`.
pub fn write_container<W: Write>(
    writer: &mut W,
    key: &DerivedKey,
    plaintext: &[u8],
) -> FcryptoResult<()> {
    let write_err = |e: std::io::Error| FcryptoError::write_failure(SaveStage::Write, e);

    write!(writer, "{}\n\n{}\n", BANNER, MARKER).map_err(write_err)?;

    let nonce = crypto::generate_nonce()?;
    let sealed = crypto::seal(key, &nonce, plaintext)?;

    {
        let mut encoder = EncoderWriter::new(&mut *writer, &STANDARD);
        encoder.write_all(&nonce).map_err(write_err)?;
        encoder.write_all(&sealed).map_err(write_err)?;
        encoder.finish().map_err(write_err)?;
    }

    writer.write_all(b"\n").map_err(write_err)?;

    debug!(
        plaintext_len = plaintext.len(),
        sealed_len = sealed.len(),
        "wrote container"
    );
    Ok(())
}

/// Encode plaintext into container bytes
pub fn encode(plaintext: &[u8], password: &str) -> FcryptoResult<Vec<u8>> {
    let key = crypto::derive_key(password)?;
    let mut out = Vec::with_capacity(plaintext.len() * 4 / 3 + 128);
    write_container(&mut out, &key, plaintext)?;
    Ok(out)
}

/// Decode container bytes, or pass plaintext content through
pub fn decode(content: Vec<u8>, password: &str) -> FcryptoResult<Vec<u8>> {
    let Some(offset) = body_offset(&content) else {
        debug!(len = content.len(), "no container marker, passing through");
        return Ok(content);
    };

    let decoded = decode_body(&content[offset..])?;
    if decoded.len() < MIN_BODY_LEN {
        return Err(FcryptoError::TruncatedData {
            len: decoded.len(),
            min: MIN_BODY_LEN,
        });
    }

    let (nonce_bytes, sealed) = decoded.split_at(NONCE_SIZE);
    let mut nonce: Nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(nonce_bytes);

    let key = crypto::derive_key(password)?;
    // One attempt only: retrying with the same key cannot succeed.
    let plaintext = crypto::open(&key, &nonce, sealed)?;
    debug!(plaintext_len = plaintext.len(), "opened container");
    Ok(plaintext)
}

/// Base64 decode a body, accepting any line wrapping
fn decode_body(body: &[u8]) -> FcryptoResult<Vec<u8>> {
    let compact: Vec<u8> = body
        .iter()
        .copied()
        .filter(|&b| b != b'\n' && b != b'\r')
        .collect();
    STANDARD
        .decode(&compact)
        .map_err(|e| FcryptoError::CorruptEncoding(e.to_string()))
}
