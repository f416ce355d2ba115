//! # Secure-Gate Type Aliases
//!
//! Type aliases for the secret-bearing buffers used by the codec, built on
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). Every alias is
//! zeroized on drop and requires an explicit `.expose_secret()` /
//! `.expose_secret_mut()` to reach the bytes.
//!
//! ## Type Categories
//!
//! ### Primitives
//! - [`HmacSha256`] - detached envelope signature
//! - [`Aes256CfbEnc`] / [`Aes256CfbDec`] - AES-256 in full-block CFB mode
//!
//! ### Dynamic Secrets
//! - [`Secret`] - caller-supplied key material of any length (including empty)
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - scrypt-derived AES-256 key
//! - [`Iv16`] - per-envelope initialization vector
//! - [`Salt64`] - SHA-512 digest of the secret, used as the scrypt salt

use hmac::Hmac;
use secure_gate::{Dynamic, Fixed};
use sha2::Sha256;

// ─────────────────────────────────────────────────────────────────────────────
// Primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;
pub type Aes256CfbEnc = cfb_mode::Encryptor<aes::Aes256>;
pub type Aes256CfbDec = cfb_mode::Decryptor<aes::Aes256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

pub type Aes256Key32 = SpanBuffer<32>;
pub type Iv16 = SpanBuffer<16>;
pub type Salt64 = SpanBuffer<64>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type Secret = Dynamic<Vec<u8>>;
