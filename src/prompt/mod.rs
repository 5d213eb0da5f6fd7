//! Interactive password prompting
//!
//! The output sink and the password source are handed to [`Prompter`] at
//! construction, so tests can script both sides of the conversation.

pub mod source;

use std::io::{self, Write};

use crate::crypto::{normalize_password_bytes, NormalizedPassword};
use crate::error::FcryptoResult;

pub use source::{
    stdin_source, LineSource, PasswordSource, RawPassword, StdinSource, TerminalSource,
};

/// Asks for passwords on an output sink and reads them from a source
pub struct Prompter<W: Write> {
    output: W,
    source: Box<dyn PasswordSource>,
}

impl Prompter<io::Stderr> {
    /// Prompt on stderr, reading from stdin
    pub fn stderr() -> Self {
        Self::new(io::stderr(), stdin_source())
    }
}

impl<W: Write> Prompter<W> {
    pub fn new(output: W, source: Box<dyn PasswordSource>) -> Self {
        Self { output, source }
    }

    /// Read one password without validating it
    pub fn read_password(&mut self) -> FcryptoResult<RawPassword> {
        let password = self.source.read_password()?;
        if self.source.is_interactive() {
            // the terminal swallowed the user's newline
            writeln!(self.output)?;
        }
        Ok(password)
    }

    /// Ask for a password until a valid one is entered
    pub fn get_password(&mut self, prompt: &str) -> FcryptoResult<NormalizedPassword> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            write!(self.output, "password:")?;
            self.output.flush()?;

            let raw = self.read_password()?;
            match normalize_password_bytes(&raw) {
                Ok(password) => return Ok(password),
                Err(err) => writeln!(self.output, "Bad password: {}", err)?,
            }
        }
    }

    /// Ask for a new password twice until both entries match
    pub fn change_password(&mut self, label: &str) -> FcryptoResult<NormalizedPassword> {
        loop {
            let first = self.get_password(&format!("Enter {} password:", label))?;
            let second = self.get_password(&format!("Confirm {} password:", label))?;
            if first == second {
                return Ok(first);
            }
            writeln!(self.output, "Passwords do not match!")?;
        }
    }

    /// Consume the prompter and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Read one password from stdin, choosing the strategy for this call
pub fn read_password() -> FcryptoResult<RawPassword> {
    let mut source = stdin_source();
    let password = source.read_password()?;
    if source.is_interactive() {
        eprintln!();
    }
    Ok(password)
}
