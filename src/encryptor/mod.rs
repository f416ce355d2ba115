// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(plaintext, &secret)?` -> `(envelope, signature_hex)`.

pub(crate) mod encrypt;

pub use encrypt::{encrypt, encrypt_with_iv};
