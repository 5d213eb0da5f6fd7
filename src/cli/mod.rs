//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the container layer.

pub mod config;
pub mod file;
pub mod password;

pub use config::handle_config_command;
pub use file::{handle_file_command, FileCommands};
pub use password::{resolve_password, PasswordRequest};
