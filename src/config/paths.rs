//! Path management for fcrypto
//!
//! ## Path Resolution Order
//!
//! 1. `FCRYPTO_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fcrypto` or `~/.config/fcrypto`
//! 3. Windows: `%APPDATA%\fcrypto`

use std::path::PathBuf;

use crate::error::FcryptoError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "FCRYPTO_CONFIG_DIR";

/// Manages the paths used by the fcrypto CLI
#[derive(Debug, Clone)]
pub struct FcryptoPaths {
    base_dir: PathBuf,
}

impl FcryptoPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FcryptoError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FcryptoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fcrypto/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), FcryptoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FcryptoError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FcryptoError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join("fcrypto"));
    }

    let home = std::env::var_os("HOME")
        .ok_or_else(|| FcryptoError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("fcrypto"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FcryptoError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| FcryptoError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fcrypto"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FcryptoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = FcryptoPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FcryptoPaths::with_base_dir(temp_dir.path().join("nested").join("fcrypto"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
