//! Loading and saving container files
//!
//! Saves truncate the destination in place. There is no temp-file rename,
//! so a failed save can leave a partial file behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::crypto;
use crate::error::{FcryptoError, FcryptoResult, SaveStage};

use super::format;

/// Permission bits for newly created containers
pub const DEFAULT_FILE_MODE: u32 = 0o600;

/// Result of a successful save
#[derive(Debug)]
pub struct SaveOutcome {
    /// Permission bits applied to the file
    pub mode: u32,
    /// Set when the permission bits could not be applied
    pub permission_warning: Option<FcryptoError>,
}

/// Load a file, decrypting it if it is a container
///
/// Files that are not containers are returned unchanged.
pub fn load_file<P: AsRef<Path>>(path: P, password: &str) -> FcryptoResult<Vec<u8>> {
    let content = read_file(path)?;
    format::decode(content, password)
}

/// Read a file's raw bytes without decoding them
pub fn read_file<P: AsRef<Path>>(path: P) -> FcryptoResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FcryptoError::FileNotFound(path.to_path_buf()),
        _ => FcryptoError::Io(format!("Failed to read {}: {}", path.display(), e)),
    })
}

/// Encrypt plaintext into a container at `path`
///
/// Permission bits of an existing file are kept; new files get
/// `DEFAULT_FILE_MODE`.
pub fn save_file<P: AsRef<Path>>(
    plaintext: &[u8],
    path: P,
    password: &str,
) -> FcryptoResult<SaveOutcome> {
    let path = path.as_ref();
    let key = crypto::derive_key(password)?;
    let previous_mode = existing_mode(path);

    let file = create_owner_only(path)?;
    debug!(path = %path.display(), "created container file");

    let mut writer = BufWriter::new(file);
    format::write_container(&mut writer, &key, plaintext)?;

    let file = writer
        .into_inner()
        .map_err(|e| FcryptoError::write_failure(SaveStage::Close, e.into_error()))?;
    file.sync_all()
        .map_err(|e| FcryptoError::write_failure(SaveStage::Close, e))?;
    drop(file);

    let mode = previous_mode.unwrap_or(DEFAULT_FILE_MODE);
    Ok(SaveOutcome {
        mode,
        permission_warning: apply_mode(path, mode),
    })
}

/// Apply permission bits, turning a failure into a warning
fn apply_mode(path: &Path, mode: u32) -> Option<FcryptoError> {
    let err = set_mode(path, mode).err()?;
    let octal = format!("{:o}", mode);
    warn!(
        path = %path.display(),
        mode = %octal,
        error = %err,
        "failed to set permissions on container"
    );
    Some(FcryptoError::PermissionSet {
        path: PathBuf::from(path),
        mode,
        message: err.to_string(),
    })
}

/// Create a container holding an empty payload
pub fn create_file<P: AsRef<Path>>(path: P, password: &str) -> FcryptoResult<SaveOutcome> {
    save_file(&[], path, password)
}

#[cfg(unix)]
fn existing_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .ok()
        .map(|meta| meta.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn existing_mode(_path: &Path) -> Option<u32> {
    None
}

/// Create or truncate `path`; a new file starts out as `DEFAULT_FILE_MODE`
fn create_owner_only(path: &Path) -> FcryptoResult<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DEFAULT_FILE_MODE);
    }

    options.open(path).map_err(|e| {
        FcryptoError::write_failure(
            SaveStage::Create,
            format!("{}: {}", path.display(), e),
        )
    })
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

/// Write plaintext to a file
///
/// An existing file keeps its permissions; a new one is owner-only.
pub fn write_plaintext<P: AsRef<Path>>(path: P, plaintext: &[u8]) -> FcryptoResult<()> {
    let path = path.as_ref();
    let mut file = create_owner_only(path)?;
    file.write_all(plaintext)
        .map_err(|e| FcryptoError::write_failure(SaveStage::Write, e))?;
    file.sync_all()
        .map_err(|e| FcryptoError::write_failure(SaveStage::Close, e))?;
    Ok(())
}
