//! src/encryptor/encrypt.rs
//! Envelope encryption: gzip -> AES-256-CFB -> detached HMAC-SHA256

use crate::aliases::{Aes256CfbEnc, Iv16, Secret};
use crate::consts::IV_LEN;
use crate::crypto::hmac::sign_envelope;
use crate::crypto::kdf::derive_key;
use crate::crypto::rng::random_iv;
use crate::deflate::compress;
use crate::error::CrypError;
use aes::cipher::{AsyncStreamCipher, KeyIvInit};

/// Encrypt `plaintext` under `secret`.
///
/// Returns the envelope (`iv || ciphertext`) and its detached signature, the
/// lowercase hex HMAC-SHA256 of the whole envelope keyed by the raw secret.
/// Both inputs may be empty.
#[inline]
pub fn encrypt(plaintext: &[u8], secret: &Secret) -> Result<(Vec<u8>, String), CrypError> {
    let iv = random_iv()?;
    encrypt_with_iv(plaintext, secret, &iv)
}

/// Encrypt with a caller-chosen IV.
///
/// Deterministic: same inputs, same envelope and signature. Reusing an IV
/// under the same secret leaks plaintext relationships, so outside of tests
/// use [`encrypt`].
pub fn encrypt_with_iv(
    plaintext: &[u8],
    secret: &Secret,
    iv: &Iv16,
) -> Result<(Vec<u8>, String), CrypError> {
    let key = derive_key(secret);
    let compressed = compress(plaintext)?;

    let mut envelope = Vec::with_capacity(IV_LEN + compressed.len());
    envelope.extend_from_slice(iv.expose_secret());
    envelope.extend_from_slice(&compressed);

    Aes256CfbEnc::new(key.expose_secret().into(), iv.expose_secret().into())
        .encrypt(&mut envelope[IV_LEN..]);

    let signature = sign_envelope(&envelope, secret);
    Ok((envelope, signature))
}
