// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, envelope MAC, IV generation).
//!
//! The high-level [`encrypt`](crate::encrypt) / [`decrypt`](crate::decrypt)
//! functions compose these; they are public for callers that need to check an
//! artifact's signature without decrypting it.

pub mod hmac;
pub mod kdf;
pub mod rng;
