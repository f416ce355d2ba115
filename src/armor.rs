//! Text form of an envelope for pipes and terminals:
//! `base64(signature_hex || envelope)`, standard alphabet with padding.

use crate::aliases::Secret;
use crate::consts::SIGNATURE_HEX_LEN;
use crate::error::CrypError;
use crate::{decrypt, encrypt};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encrypt `plaintext` and armor the signature and envelope together.
pub fn seal(plaintext: &[u8], secret: &Secret) -> Result<String, CrypError> {
    let (envelope, signature) = encrypt(plaintext, secret)?;

    let mut buf = Vec::with_capacity(signature.len() + envelope.len());
    buf.extend_from_slice(signature.as_bytes());
    buf.extend_from_slice(&envelope);

    Ok(STANDARD.encode(buf))
}

/// Inverse of [`seal`]. Surrounding whitespace (such as a trailing newline) is ignored.
pub fn open(armored: &str, secret: &Secret) -> Result<Vec<u8>, CrypError> {
    let input = STANDARD
        .decode(armored.trim())
        .map_err(|e| CrypError::MalformedArmor(e.to_string()))?;

    if input.len() < SIGNATURE_HEX_LEN {
        return Err(CrypError::MalformedArmor("data too short to decrypt".into()));
    }

    let (signature, envelope) = input.split_at(SIGNATURE_HEX_LEN);
    let signature = std::str::from_utf8(signature)
        .map_err(|_| CrypError::MalformedArmor("signature prefix is not text".into()))?;

    decrypt(envelope, signature, secret)
}
