//! # Directory Walker
//!
//! Applies the file codec to every regular file under a root, replacing
//! originals with artifacts (and back).
//!
//! Walks are not transactional: the first error stops the walk and is
//! returned, and files converted before it stay converted. What was converted
//! is always a prefix of the traversal order.

use crate::aliases::Secret;
use crate::error::CrypError;
use crate::file_ops::{decrypt_file, encrypt_file};
use crate::utils::is_artifact_name;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Encrypt every regular file under `root`, deleting each original once its
/// artifact is on disk.
///
/// Directories, symlinks, pipes, sockets and devices are left as they are.
pub fn encrypt_dir(root: impl AsRef<Path>, secret: &Secret) -> Result<(), CrypError> {
    for entry in walk(root.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        encrypt_file(entry.path(), secret)?;
        fs::remove_file(entry.path())?;
    }
    Ok(())
}

/// Decrypt every artifact under `root`, deleting each artifact once it has
/// been decrypted (an artifact whose payload holds no file is deleted too).
///
/// Regular files whose names are not 64 lowercase hex characters are skipped,
/// so this is safe to run over a tree that mixes artifacts and plain files.
pub fn decrypt_dir(root: impl AsRef<Path>, secret: &Secret) -> Result<(), CrypError> {
    for entry in walk(root.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }
        if !is_artifact_name(entry.file_name()) {
            info!(path = %entry.path().display(), "skipping");
            continue;
        }

        decrypt_file(entry.path(), secret)?;
        fs::remove_file(entry.path())?;
    }
    Ok(())
}

// Sorting makes walkdir read each directory in full before yielding from it,
// so files created during the walk are never visited.
fn walk(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}
