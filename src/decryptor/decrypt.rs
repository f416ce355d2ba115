//! src/decryptor/decrypt.rs
//! Envelope decryption: authenticate first, then AES-256-CFB, then gunzip

use crate::aliases::{Aes256CfbDec, Iv16, Secret};
use crate::consts::IV_LEN;
use crate::crypto::hmac::verify_envelope;
use crate::crypto::kdf::derive_key;
use crate::deflate::decompress;
use crate::error::CrypError;
use aes::cipher::{AsyncStreamCipher, KeyIvInit};

/// Decrypt an envelope produced by [`encrypt`](crate::encrypt).
///
/// The signature is checked before anything else touches the ciphertext: a
/// tampered envelope, a tampered signature or the wrong secret all fail with
/// [`CrypError::AuthenticationFailure`] without deriving a key.
pub fn decrypt(envelope: &[u8], signature: &str, secret: &Secret) -> Result<Vec<u8>, CrypError> {
    if envelope.len() < IV_LEN {
        return Err(CrypError::MalformedEnvelope {
            len: envelope.len(),
        });
    }

    verify_envelope(envelope, signature, secret)?;

    let key = derive_key(secret);
    let (iv_bytes, ciphertext) = envelope.split_at(IV_LEN);
    let mut iv = Iv16::new([0u8; IV_LEN]);
    iv.expose_secret_mut().copy_from_slice(iv_bytes);

    let mut compressed = ciphertext.to_vec();
    Aes256CfbDec::new(key.expose_secret().into(), iv.expose_secret().into())
        .decrypt(&mut compressed);

    decompress(&compressed)
}
