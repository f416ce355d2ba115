// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::SIGNATURE_HEX_LEN;
use crate::error::CrypError;
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// True when `name` could be an artifact: exactly 64 lowercase hex characters.
///
/// Uppercase hex is rejected; artifacts are always written in lowercase.
#[inline]
#[must_use]
pub fn is_artifact_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() == SIGNATURE_HEX_LEN && bytes.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Create `path` for writing, failing if anything already exists there.
///
/// `mode` is the creation mode and is still subject to the process umask.
pub(crate) fn create_exclusive(path: &Path, mode: u32) -> Result<File, CrypError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(mode)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => CrypError::ArtifactCollision(path.to_path_buf()),
            _ => CrypError::Io(e),
        })
}

/// Write all of `data` into `file` and check that exactly `expected` bytes landed.
pub(crate) fn write_counted(
    file: &mut File,
    path: &Path,
    mut data: &[u8],
    expected: u64,
) -> Result<(), CrypError> {
    let written = io::copy(&mut data, file)?;
    if written != expected {
        return Err(CrypError::IncompleteWrite {
            path: path.to_path_buf(),
            expected,
            written,
        });
    }
    file.flush()?;
    Ok(())
}
