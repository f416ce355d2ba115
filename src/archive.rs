//! # Archive Payload
//!
//! A single-entry tar archive carrying one file's name, permission bits, size,
//! modification time and contents through the envelope codec. GNU headers are
//! used so names longer than 100 bytes survive.

use crate::error::CrypError;
use std::ffi::OsString;
use std::io::{Cursor, Read};
use std::path::{Component, Path};
use tar::{Archive, Builder, EntryType, Header};

/// One file's metadata and contents as carried inside an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Base name only, never a path.
    pub name: OsString,
    /// Permission and mode bits (`st_mode & 0o7777`).
    pub mode: u32,
    /// Declared content length.
    pub size: u64,
    /// Modification time, whole seconds since the Unix epoch.
    pub mtime: u64,
    pub contents: Vec<u8>,
}

/// Serialize `entry` as a terminated single-entry tar archive.
pub fn pack(entry: &ArchiveEntry) -> Result<Vec<u8>, CrypError> {
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Regular);
    header.set_size(entry.contents.len() as u64);
    header.set_mode(entry.mode);
    header.set_mtime(entry.mtime);

    let mut builder = Builder::new(Vec::new());
    builder.append_data(&mut header, Path::new(&entry.name), entry.contents.as_slice())?;
    Ok(builder.into_inner()?)
}

/// Read the first entry of a tar archive.
///
/// An archive without entries is not an error and yields `None`. Contents are
/// read up to the declared size; a truncated body comes back short and is
/// left for the caller to detect against [`ArchiveEntry::size`].
pub fn unpack(payload: &[u8]) -> Result<Option<ArchiveEntry>, CrypError> {
    let mut archive = Archive::new(Cursor::new(payload));
    let mut entries = archive.entries().map_err(malformed)?;

    let Some(entry) = entries.next() else {
        return Ok(None);
    };
    let mut entry = entry.map_err(malformed)?;

    let name = base_name(&entry.path().map_err(malformed)?)?;
    let header = entry.header();
    let mode = header.mode().map_err(malformed)?;
    let mtime = header.mtime().map_err(malformed)?;
    let size = header.size().map_err(malformed)?;

    let mut contents = Vec::new();
    entry.read_to_end(&mut contents).map_err(malformed)?;

    Ok(Some(ArchiveEntry {
        name,
        mode,
        size,
        mtime,
        contents,
    }))
}

fn malformed(e: std::io::Error) -> CrypError {
    CrypError::MalformedArchive(e.to_string())
}

// Restores always land next to the artifact, so the name must be one plain component.
fn base_name(path: &Path) -> Result<OsString, CrypError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Ok(name.to_os_string()),
        _ => Err(CrypError::MalformedArchive(format!(
            "entry name is not a plain file name: {}",
            path.display()
        ))),
    }
}
