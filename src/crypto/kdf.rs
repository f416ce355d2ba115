//! src/crypto/kdf.rs
//! scrypt key derivation with a secret-bound salt

use crate::aliases::{Aes256Key32, Salt64, Secret};
use crate::consts::{KEY_LEN, SALT_LEN, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use scrypt::{scrypt, Params};
use sha2::{Digest, Sha512};

/// Derive the AES-256 key for `secret` directly into `out_key`.
///
/// - salt = SHA-512(secret), so nothing but the secret is needed to re-derive
/// - scrypt with N = 2^14, r = 8, p = 1
///
/// Total: every secret, including the empty one, yields a key.
#[inline]
pub fn derive_secure_scrypt_key(secret: &Secret, out_key: &mut Aes256Key32) {
    let mut salt = Salt64::new([0u8; SALT_LEN]);
    salt.expose_secret_mut()
        .copy_from_slice(&Sha512::digest(secret.expose_secret()));

    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
        .expect("scrypt cost constants are within range");

    scrypt(
        secret.expose_secret(),
        salt.expose_secret(),
        &params,
        out_key.expose_secret_mut(),
    )
    .expect("output buffer is KEY_LEN bytes");
}

/// Convenience: derive and return a fresh secure key
#[inline]
#[must_use]
pub fn derive_key(secret: &Secret) -> Aes256Key32 {
    let mut key = Aes256Key32::new([0u8; KEY_LEN]);
    derive_secure_scrypt_key(secret, &mut key);
    key
}
