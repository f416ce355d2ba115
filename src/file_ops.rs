//! # File Codec
//!
//! Encrypts one regular file into an artifact named by its signature, and
//! restores an artifact back to the file it was made from.
//!
//! ```text
//! notes.txt (0644)  --encrypt_file-->  <64 hex chars> (0400)
//!                   <--decrypt_file--
//! ```
//!
//! Neither direction deletes its input; [`crate::dir_ops`] does that.

use crate::aliases::Secret;
use crate::archive::{self, ArchiveEntry};
use crate::consts::ARTIFACT_MODE;
use crate::error::CrypError;
use crate::utils::{create_exclusive, is_artifact_name, write_counted};
use crate::{decrypt, encrypt};
use std::fs::{self, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Encrypt the regular file at `path` into a sibling artifact.
///
/// The artifact is named by the hex signature of its contents, created
/// exclusively with mode 0400 and synced before this returns. Its path is
/// returned; the source file is left in place.
pub fn encrypt_file(path: impl AsRef<Path>, secret: &Secret) -> Result<PathBuf, CrypError> {
    let path = path.as_ref();

    let metadata = fs::symlink_metadata(path)?;
    if !metadata.file_type().is_file() {
        return Err(CrypError::UnsupportedFileType(path.to_path_buf()));
    }
    let Some(name) = path.file_name() else {
        return Err(CrypError::UnsupportedFileType(path.to_path_buf()));
    };

    let start = Instant::now();

    let contents = fs::read(path)?;
    let entry = ArchiveEntry {
        name: name.to_os_string(),
        mode: metadata.permissions().mode() & 0o7777,
        size: contents.len() as u64,
        mtime: unix_seconds(metadata.modified()?),
        contents,
    };

    let (envelope, signature) = encrypt(&archive::pack(&entry)?, secret)?;

    let artifact_path = path.with_file_name(&signature);
    let mut artifact = create_exclusive(&artifact_path, ARTIFACT_MODE)?;
    write_counted(&mut artifact, &artifact_path, &envelope, envelope.len() as u64)?;
    artifact.sync_all()?;

    info!(
        path = %path.display(),
        artifact = %signature,
        elapsed = ?start.elapsed(),
        "encrypted file"
    );

    Ok(artifact_path)
}

/// Restore the file an artifact was made from, next to the artifact.
///
/// The artifact's base name is its signature, so a renamed or modified
/// artifact fails authentication and nothing is written. The restored file
/// gets the archived name, permission bits, contents and modification time.
///
/// Returns `Ok(None)` when the authenticated payload holds no entry; nothing
/// is restored in that case. The artifact itself is never removed here.
///
/// A failed restore (for example [`CrypError::IncompleteWrite`]) leaves the
/// partially written file on disk; retrying then fails with
/// [`CrypError::ArtifactCollision`] until it is removed.
pub fn decrypt_file(path: impl AsRef<Path>, secret: &Secret) -> Result<Option<PathBuf>, CrypError> {
    let path = path.as_ref();

    let signature = match path.file_name() {
        Some(name) if is_artifact_name(name) => name.to_string_lossy().into_owned(),
        _ => return Err(CrypError::InvalidArtifactName(path.to_path_buf())),
    };

    let metadata = fs::symlink_metadata(path)?;
    if !metadata.file_type().is_file() {
        return Err(CrypError::UnsupportedFileType(path.to_path_buf()));
    }

    let start = Instant::now();

    let envelope = fs::read(path)?;
    let payload = decrypt(&envelope, &signature, secret)?;

    let Some(entry) = archive::unpack(&payload)? else {
        debug!(path = %path.display(), "artifact holds no archived file");
        return Ok(None);
    };

    let restored_path = path.with_file_name(&entry.name);
    restore(&restored_path, &entry)?;

    info!(
        path = %path.display(),
        restored = %restored_path.display(),
        elapsed = ?start.elapsed(),
        "decrypted file"
    );

    Ok(Some(restored_path))
}

fn restore(path: &Path, entry: &ArchiveEntry) -> Result<(), CrypError> {
    let mut file = create_exclusive(path, entry.mode)?;
    write_counted(&mut file, path, &entry.contents, entry.size)?;
    file.set_permissions(Permissions::from_mode(entry.mode))?;
    file.set_modified(UNIX_EPOCH + Duration::from_secs(entry.mtime))?;
    file.sync_all()?;
    Ok(())
}

// Pre-epoch timestamps clamp to the epoch.
fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
