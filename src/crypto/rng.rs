// src/crypto/rng.rs
//! Secure randomness for per-envelope IVs, drawn straight from the OS.

use crate::aliases::Iv16;
use crate::consts::IV_LEN;
use crate::error::CrypError;
use rand::{rngs::OsRng, TryRngCore};

/// Draw a fresh IV from the operating system CSPRNG.
///
/// A failing random source is fatal for the encryption that asked for it.
#[inline]
pub fn random_iv() -> Result<Iv16, CrypError> {
    let mut iv = Iv16::new([0u8; IV_LEN]);
    OsRng
        .try_fill_bytes(iv.expose_secret_mut())
        .map_err(|e| CrypError::Entropy(e.to_string()))?;
    Ok(iv)
}
