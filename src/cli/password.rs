//! Password acquisition for CLI commands
//!
//! The environment variable named in the settings wins; otherwise the user
//! is prompted on stderr.

use std::env::VarError;

use crate::config::Settings;
use crate::crypto::{normalize_password, NormalizedPassword};
use crate::error::{FcryptoError, FcryptoResult};
use crate::prompt::Prompter;

/// How a command wants its password asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequest<'a> {
    /// Unlock an existing file
    Existing(&'a str),
    /// Choose a new password, entered twice
    New(&'a str),
}

/// Read the password from the environment, if the variable is set
pub fn password_from_env(settings: &Settings) -> FcryptoResult<Option<NormalizedPassword>> {
    match std::env::var(&settings.password_env) {
        Ok(value) => normalize_password(&value).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(FcryptoError::InvalidPasswordEncoding),
    }
}

/// Resolve the password for a command
pub fn resolve_password(
    settings: &Settings,
    request: PasswordRequest<'_>,
) -> FcryptoResult<NormalizedPassword> {
    if let Some(password) = password_from_env(settings)? {
        return Ok(password);
    }

    let mut prompter = Prompter::stderr();
    match request {
        PasswordRequest::Existing(prompt) => prompter.get_password(prompt),
        PasswordRequest::New(label) => prompter.change_password(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_env(name: &str) -> Settings {
        Settings {
            password_env: name.to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_env_password_is_normalized() {
        let settings = settings_with_env("FCRYPTO_TEST_PW_NORMALIZED");
        std::env::set_var(&settings.password_env, "\u{fb01}le");

        let password = password_from_env(&settings).unwrap().unwrap();
        std::env::remove_var(&settings.password_env);

        assert_eq!(password.as_str(), "file");
    }

    #[test]
    fn test_env_password_missing() {
        let settings = settings_with_env("FCRYPTO_TEST_PW_MISSING");
        assert!(password_from_env(&settings).unwrap().is_none());
    }

    #[test]
    fn test_env_password_empty_is_rejected() {
        let settings = settings_with_env("FCRYPTO_TEST_PW_EMPTY");
        std::env::set_var(&settings.password_env, "");

        let result = password_from_env(&settings);
        std::env::remove_var(&settings.password_env);

        assert!(matches!(result, Err(FcryptoError::EmptyPassword)));
    }
}
