// src/lib.rs

pub mod aliases;
pub mod archive;
pub mod armor;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod deflate;
pub mod dir_ops;
pub mod encryptor;
pub mod error;
pub mod file_ops;
pub mod utils;

// High-level API
pub use decryptor::decrypt;
pub use encryptor::{encrypt, encrypt_with_iv};
pub use error::CrypError;

pub use aliases::Secret;
pub use dir_ops::{decrypt_dir, encrypt_dir};
pub use file_ops::{decrypt_file, encrypt_file};

// Low-level KDF, exposed for callers that want the derived key itself
pub use crypto::kdf::{derive_key, derive_secure_scrypt_key};

pub use utils::is_artifact_name;
