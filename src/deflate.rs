//! gzip framing of the plaintext ahead of encryption.

use crate::error::CrypError;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress `data` at the best compression level.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CrypError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Inverse of [`compress`]. Any failure here means the (already authenticated)
/// payload was not produced by this codec.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CrypError> {
    let mut out = Vec::new();
    GzDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(CrypError::CorruptPayload)?;
    Ok(out)
}
