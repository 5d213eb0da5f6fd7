//! fcrypto - password-based encryption for small configuration files
//!
//! Content is sealed with XSalsa20-Poly1305 (NaCl secretbox) under a key derived from the
//! user's password and stored in a versioned text container that can sit
//! next to ordinary config files. Files that are not containers load as
//! plaintext, so configs can be encrypted gradually.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Password normalization, key derivation, sealing/opening
//! - `container`: Container format and file load/save
//! - `prompt`: Interactive password prompting
//! - `config`: Configuration and path management for the CLI
//! - `cli`: Command handlers for the `fcrypto` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! let path = "secret.conf";
//! fcrypto::save_file(b"token = abc123", path, "bar")?;
//! let plaintext = fcrypto::load_file(path, "bar")?;
//! assert_eq!(plaintext, b"token = abc123");
//! # Ok::<(), fcrypto::FcryptoError>(())
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod crypto;
pub mod error;
pub mod prompt;

pub use container::{create_file, decode, encode, load_file, save_file, SaveOutcome};
pub use crypto::{derive_key, normalize_password, DerivedKey, NormalizedPassword};
pub use error::{FcryptoError, FcryptoResult};
pub use prompt::{read_password, Prompter};
