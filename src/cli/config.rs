//! Config CLI command
//!
//! Shows resolved paths and settings, and can persist a default file.

use std::path::PathBuf;

use crate::config::{FcryptoPaths, Settings};
use crate::error::FcryptoResult;

/// Handle the config command
pub fn handle_config_command(
    paths: &FcryptoPaths,
    settings: &mut Settings,
    default_file: Option<PathBuf>,
) -> FcryptoResult<()> {
    if let Some(file) = default_file {
        settings.default_file = Some(file);
        settings.save(paths)?;
        println!("Saved settings to {}", paths.settings_file().display());
        println!();
    }

    println!("fcrypto Configuration");
    println!("=====================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    match &settings.default_file {
        Some(file) => println!("  Default file:     {}", file.display()),
        None => println!("  Default file:     (none)"),
    }
    println!("  Password env var: {}", settings.password_env);
    println!("  Log filter:       {}", settings.log_filter);

    Ok(())
}
