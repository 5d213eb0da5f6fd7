//! File CLI commands
//!
//! Create, show, encrypt and decrypt container files.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::container::{self, SaveOutcome};
use crate::crypto::NormalizedPassword;
use crate::error::{FcryptoError, FcryptoResult};

use super::password::{resolve_password, PasswordRequest};

/// File subcommands
#[derive(Subcommand)]
pub enum FileCommands {
    /// Create a new, empty encrypted file
    Create {
        /// Target file (defaults to the configured default file)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the decrypted contents of a file
    #[command(alias = "show")]
    Cat {
        /// Source file (defaults to the configured default file)
        path: Option<PathBuf>,
    },

    /// Encrypt a file in place
    Encrypt {
        /// File to encrypt (defaults to the configured default file)
        path: Option<PathBuf>,
    },

    /// Decrypt a file in place, or into another file
    Decrypt {
        /// File to decrypt (defaults to the configured default file)
        path: Option<PathBuf>,

        /// Write the plaintext here instead of over the source
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a file command
pub fn handle_file_command(settings: &Settings, cmd: FileCommands) -> FcryptoResult<()> {
    match cmd {
        FileCommands::Create { path, force } => {
            let path = resolve_target(settings, path)?;
            if path.exists() && !force {
                return Err(FcryptoError::Validation(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            let password = resolve_password(settings, PasswordRequest::New("file"))?;
            let outcome = container::create_file(&path, password.as_str())?;
            report_warning(&mut std::io::stderr(), &outcome)?;
            println!("Created {}", path.display());
        }

        FileCommands::Cat { path } => {
            let path = resolve_target(settings, path)?;
            let content = container::read_file(&path)?;
            let plaintext = if container::is_container(&content) {
                let password = unlock(settings, &path)?;
                container::decode(content, password.as_str())?
            } else {
                content
            };

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&plaintext)?;
            stdout.flush()?;
        }

        FileCommands::Encrypt { path } => {
            let path = resolve_target(settings, path)?;
            let content = container::read_file(&path)?;
            let was_container = container::is_container(&content);

            let password = if was_container {
                unlock(settings, &path)?
            } else {
                resolve_password(settings, PasswordRequest::New("file"))?
            };
            let plaintext = container::decode(content, password.as_str())?;

            let outcome = container::save_file(&plaintext, &path, password.as_str())?;
            report_warning(&mut std::io::stderr(), &outcome)?;
            if was_container {
                println!("Re-encrypted {}", path.display());
            } else {
                println!("Encrypted {}", path.display());
            }
        }

        FileCommands::Decrypt { path, output } => {
            let path = resolve_target(settings, path)?;
            let content = container::read_file(&path)?;
            if !container::is_container(&content) {
                println!("{} is not encrypted", path.display());
                return Ok(());
            }

            let password = unlock(settings, &path)?;
            let plaintext = container::decode(content, password.as_str())?;

            let destination = output.unwrap_or_else(|| path.clone());
            container::write_plaintext(&destination, &plaintext)?;
            println!("Decrypted {} to {}", path.display(), destination.display());
        }
    }

    Ok(())
}

/// Pick the explicit path, falling back to the configured default file
pub fn resolve_target(settings: &Settings, path: Option<PathBuf>) -> FcryptoResult<PathBuf> {
    path.or_else(|| settings.default_file.clone()).ok_or_else(|| {
        FcryptoError::Validation(
            "No file given and no default file configured (see 'fcrypto config --default-file')"
                .to_string(),
        )
    })
}

fn unlock(settings: &Settings, path: &Path) -> FcryptoResult<NormalizedPassword> {
    let prompt = format!("Password for {}:", path.display());
    resolve_password(settings, PasswordRequest::Existing(&prompt))
}

fn report_warning<W: Write>(out: &mut W, outcome: &SaveOutcome) -> FcryptoResult<()> {
    if let Some(warning) = &outcome.permission_warning {
        writeln!(out, "Warning: {}", warning)?;
    }
    Ok(())
}
