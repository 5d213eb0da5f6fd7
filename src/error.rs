//! Custom error types for fcrypto
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Stage of a save operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStage {
    /// Creating or truncating the destination file
    Create,
    /// Writing the banner, marker or encoded body
    Write,
    /// Flushing and syncing the file
    Close,
}

impl fmt::Display for SaveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Create => "create",
            Self::Write => "write",
            Self::Close => "close",
        };
        f.write_str(stage)
    }
}

/// The main error type for fcrypto operations
#[derive(Error, Debug)]
pub enum FcryptoError {
    /// Password bytes are not valid UTF-8
    #[error("Password contains invalid UTF-8 characters")]
    InvalidPasswordEncoding,

    /// Password is empty after normalization
    #[error("No characters in password")]
    EmptyPassword,

    /// Source file does not exist
    #[error("File {} not found", .0.display())]
    FileNotFound(PathBuf),

    /// Container body is not valid base64
    #[error("Failed to load base64 encoded data: {0}")]
    CorruptEncoding(String),

    /// Container body is shorter than nonce plus tag
    #[error("File data too short: {len} bytes, need at least {min}")]
    TruncatedData { len: usize, min: usize },

    /// Authentication failed while opening the payload
    #[error("Decryption failed: wrong password or tampered data")]
    DecryptionFailed,

    /// The OS random source could not supply a nonce
    #[error("Nonce generation failed: {0}")]
    NonceGeneration(String),

    /// A save stage failed
    #[error("Failed to {stage} file: {message}")]
    WriteFailure { stage: SaveStage, message: String },

    /// Permission bits could not be applied after a save (non-fatal)
    #[error("Failed to set permissions {mode:o} on {}: {message}", .path.display())]
    PermissionSet {
        path: PathBuf,
        mode: u32,
        message: String,
    },

    /// Sealing the payload failed
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user request
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FcryptoError {
    pub(crate) fn write_failure(stage: SaveStage, err: impl fmt::Display) -> Self {
        Self::WriteFailure {
            stage,
            message: err.to_string(),
        }
    }

    /// Check if this is a password validation error
    pub fn is_password_error(&self) -> bool {
        matches!(self, Self::InvalidPasswordEncoding | Self::EmptyPassword)
    }

    /// Check if this error means the file could not be authenticated
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, Self::DecryptionFailed)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

impl From<std::io::Error> for FcryptoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FcryptoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fcrypto operations
pub type FcryptoResult<T> = Result<T, FcryptoError>;
