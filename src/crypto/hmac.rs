//! src/crypto/hmac.rs
//! Detached HMAC-SHA256 signatures over whole envelopes.
//!
//! The MAC is keyed by the raw secret, not the derived key, so a signature can
//! be checked without paying for scrypt.

use crate::aliases::{HmacSha256, Secret};
use crate::error::CrypError;
use hmac::Mac;

#[inline]
fn envelope_mac(envelope: &[u8], secret: &Secret) -> HmacSha256 {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.expose_secret())
        .expect("HMAC accepts keys of any length");
    mac.update(envelope);
    mac
}

/// Lowercase hex HMAC-SHA256 of `envelope` under `secret`.
#[must_use]
pub fn sign_envelope(envelope: &[u8], secret: &Secret) -> String {
    hex::encode(envelope_mac(envelope, secret).finalize().into_bytes())
}

/// Check `signature` against `envelope` in constant time.
///
/// Malformed hex is reported as [`CrypError::InvalidSignatureEncoding`]; a
/// well-formed signature that does not match (including one of the wrong
/// length) is [`CrypError::AuthenticationFailure`].
pub fn verify_envelope(envelope: &[u8], signature: &str, secret: &Secret) -> Result<(), CrypError> {
    let expected = hex::decode(signature)?;
    envelope_mac(envelope, secret)
        .verify_slice(&expected)
        .map_err(|_| CrypError::AuthenticationFailure)
}
