//! tests/common.rs
//! Common constants and helpers shared across test files

use cryp_rs::Secret;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Standard test secret used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY: &[u8] = b"key";

/// Common test data used across multiple tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"test data";

#[allow(dead_code)] // Used across multiple test files
pub fn secret(bytes: &[u8]) -> Secret {
    Secret::new(bytes.to_vec())
}

/// Write `data` to `path` and force its permission bits to `mode`.
#[allow(dead_code)] // Used across multiple test files
pub fn write_file(path: &Path, data: &[u8], mode: u32) {
    fs::write(path, data).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .unwrap_or_else(|e| panic!("Failed to chmod {path:?}: {e}"));
}

#[allow(dead_code)] // Used across multiple test files
pub fn mode_of(path: &Path) -> u32 {
    fs::symlink_metadata(path)
        .unwrap_or_else(|e| panic!("Failed to stat {path:?}: {e}"))
        .permissions()
        .mode()
        & 0o7777
}
