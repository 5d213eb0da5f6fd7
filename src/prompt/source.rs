//! Where password bytes come from
//!
//! A terminal gets a no-echo read; anything else (pipes, files, test
//! harnesses) is read one visible line at a time.

use std::io::{self, BufRead, IsTerminal};

use zeroize::Zeroizing;

/// Raw password bytes as read, before validation
pub type RawPassword = Zeroizing<Vec<u8>>;

/// Strategy for reading one password
pub trait PasswordSource {
    /// Read a single password entry
    fn read_password(&mut self) -> io::Result<RawPassword>;

    /// Whether input comes from an interactive terminal
    fn is_interactive(&self) -> bool {
        false
    }
}

/// No-echo read from the controlling terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSource;

impl PasswordSource for TerminalSource {
    fn read_password(&mut self) -> io::Result<RawPassword> {
        let password = rpassword::read_password()?;
        Ok(Zeroizing::new(password.into_bytes()))
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Visible line reads from any buffered reader
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PasswordSource for LineSource<R> {
    fn read_password(&mut self) -> io::Result<RawPassword> {
        read_trimmed_line(&mut self.reader)
    }
}

/// Visible line reads from the process stdin
#[derive(Debug)]
pub struct StdinSource {
    stdin: io::Stdin,
}

impl Default for StdinSource {
    fn default() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl PasswordSource for StdinSource {
    fn read_password(&mut self) -> io::Result<RawPassword> {
        read_trimmed_line(&mut self.stdin.lock())
    }
}

/// Pick the source for the current stdin
pub fn stdin_source() -> Box<dyn PasswordSource> {
    if io::stdin().is_terminal() {
        Box::new(TerminalSource)
    } else {
        Box::new(StdinSource::default())
    }
}

/// Read one line with surrounding whitespace removed
///
/// End of input is an error so callers cannot spin on an empty stream.
fn read_trimmed_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<RawPassword> {
    let mut line = Zeroizing::new(Vec::new());
    let read = reader.read_until(b'\n', &mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no more input while reading password",
        ));
    }

    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    Ok(Zeroizing::new(line[start..end].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_source_trims() {
        let mut source = LineSource::new(Cursor::new(b"  secret \r\nnext\n".to_vec()));
        assert_eq!(source.read_password().unwrap().as_slice(), b"secret");
        assert_eq!(source.read_password().unwrap().as_slice(), b"next");
    }

    #[test]
    fn test_line_source_without_newline() {
        let mut source = LineSource::new(Cursor::new(b"last".to_vec()));
        assert_eq!(source.read_password().unwrap().as_slice(), b"last");
    }

    #[test]
    fn test_line_source_blank_line() {
        let mut source = LineSource::new(Cursor::new(b"   \n".to_vec()));
        assert!(source.read_password().unwrap().is_empty());
    }

    #[test]
    fn test_line_source_eof() {
        let mut source = LineSource::new(Cursor::new(Vec::new()));
        let err = source.read_password().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_line_source_keeps_invalid_utf8() {
        let mut source = LineSource::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        assert_eq!(source.read_password().unwrap().as_slice(), &[0xff, 0xfe]);
    }

    #[test]
    fn test_interactivity() {
        assert!(TerminalSource.is_interactive());
        assert!(!LineSource::new(Cursor::new(Vec::new())).is_interactive());
    }
}
