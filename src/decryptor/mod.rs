// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(envelope, signature_hex, &secret)?` -> plaintext.

pub(crate) mod decrypt;

pub use decrypt::decrypt;
