//! Configuration module for fcrypto
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FcryptoPaths;
pub use settings::Settings;
