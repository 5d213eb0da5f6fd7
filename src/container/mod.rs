//! Encrypted file container
//!
//! `format` handles the text layout and in-memory encode/decode,
//! `file_io` wraps it with file creation, reading and permission handling.

pub mod file_io;
pub mod format;

pub use file_io::{
    create_file, load_file, read_file, save_file, write_plaintext, SaveOutcome,
    DEFAULT_FILE_MODE,
};
pub use format::{decode, encode, is_container, BANNER, MARKER};
