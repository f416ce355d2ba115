//! # Constants
//!
//! Sizes and cost parameters shared by the envelope codec, the file codec and
//! the directory walker.

/// AES block size, and therefore the length of the IV that prefixes every envelope.
pub const IV_LEN: usize = 16;

/// AES-256 key length produced by the KDF.
pub const KEY_LEN: usize = 32;

/// SHA-512 digest length, used as the scrypt salt length.
pub const SALT_LEN: usize = 64;

/// Raw HMAC-SHA256 tag length.
pub const SIGNATURE_LEN: usize = 32;

/// Hex-encoded signature length. Artifact file names are exactly this long.
pub const SIGNATURE_HEX_LEN: usize = SIGNATURE_LEN * 2;

/// scrypt CPU/memory cost, as log2(N). N = 16384 is the classic interactive-login setting.
pub const SCRYPT_LOG_N: u8 = 14;

/// scrypt block size.
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelism.
pub const SCRYPT_P: u32 = 1;

/// Permission bits of every persisted artifact (owner read-only).
pub const ARTIFACT_MODE: u32 = 0o400;
