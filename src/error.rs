//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, CrypError>`](CrypError).

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all cryp operations.
///
/// Every error is surfaced to the immediate caller. Directory walks stop on
/// the first one and return it verbatim.
#[derive(Error, Debug)]
pub enum CrypError {
    /// I/O error occurred during file operations.
    ///
    /// Wraps [`std::io::Error`] for failures that have no more specific
    /// variant (file not found, permission denied, read errors).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular file was required but the path names a directory, symlink,
    /// device, named pipe or socket.
    #[error("invalid file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// The base name of an artifact is not a 64-character lowercase hex string.
    #[error("invalid file name, expected hex HMAC-SHA256 signature: {}", .0.display())]
    InvalidArtifactName(PathBuf),

    /// The envelope is too short to even hold its IV.
    #[error("insufficient data to decrypt: {len} bytes")]
    MalformedEnvelope { len: usize },

    /// The detached signature is not valid hex.
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(#[from] hex::FromHexError),

    /// The signature does not match the envelope (tampered data or wrong secret).
    #[error("signature does not match data")]
    AuthenticationFailure,

    /// The authenticated payload failed to decompress.
    #[error("corrupt payload: {0}")]
    CorruptPayload(#[source] std::io::Error),

    /// The decrypted payload is not a usable single-entry archive.
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    /// The destination file already exists.
    #[error("refusing to overwrite existing file: {}", .0.display())]
    ArtifactCollision(PathBuf),

    /// Fewer bytes reached the destination than were intended.
    #[error("incomplete write to {}: {written} of {expected} bytes", .path.display())]
    IncompleteWrite {
        path: PathBuf,
        expected: u64,
        written: u64,
    },

    /// The operating system's random source failed while drawing an IV.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// Armored text could not be split into signature and envelope.
    #[error("malformed armored input: {0}")]
    MalformedArmor(String),

    /// Directory enumeration failed during a walk.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}
