//! tests/envelope_tests.rs
//! Envelope codec: round trips, tamper detection, wrong-secret rejection

mod common;
use common::{secret, TEST_DATA, TEST_KEY};

use cryp_rs::consts::{IV_LEN, SIGNATURE_HEX_LEN};
use cryp_rs::crypto::hmac::sign_envelope;
use cryp_rs::{decrypt, encrypt, CrypError};

fn binary_blob(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 7)) as u8).collect()
}

#[test]
fn roundtrip_secrets_and_sizes() {
    let large_data = "large data".repeat(1 << 10);
    let large_key = "large key".repeat(1 << 10);

    let cases: Vec<(&[u8], &[u8], &str)> = vec![
        (b"".as_slice(), b"small data".as_slice(), "empty key"),
        (b"key".as_slice(), b"".as_slice(), "empty data"),
        ("utf8 key ∆∆".as_bytes(), "utf8 data ∆∆".as_bytes(), "utf8"),
        (b"key".as_slice(), large_data.as_bytes(), "large data"),
        (large_key.as_bytes(), large_data.as_bytes(), "large key and data"),
        (large_key.as_bytes(), b"sml data".as_slice(), "large key"),
    ];

    for (key, data, desc) in cases {
        let key = secret(key);
        let (envelope, signature) =
            encrypt(data, &key).unwrap_or_else(|e| panic!("Encryption failed for {desc}: {e:?}"));
        let decrypted = decrypt(&envelope, &signature, &key)
            .unwrap_or_else(|e| panic!("Decryption failed for {desc}: {e:?}"));
        assert_eq!(decrypted, data, "{desc}: output mismatch");
    }
}

#[test]
fn roundtrip_key_hi() {
    let key = secret(b"key");
    let (envelope, signature) = encrypt(b"hi", &key).unwrap();
    assert_eq!(decrypt(&envelope, &signature, &key).unwrap(), b"hi");
}

#[test]
fn roundtrip_empty_everything() {
    let key = secret(b"");
    let (envelope, signature) = encrypt(b"", &key).unwrap();
    assert!(decrypt(&envelope, &signature, &key).unwrap().is_empty());
}

#[test]
fn roundtrip_multi_megabyte_binary() {
    let key = secret(TEST_KEY);
    let data = binary_blob(3 << 20);
    let (envelope, signature) = encrypt(&data, &key).unwrap();
    assert_eq!(decrypt(&envelope, &signature, &key).unwrap(), data);
}

#[test]
fn envelope_layout() {
    let key = secret(TEST_KEY);
    let (envelope, signature) = encrypt(TEST_DATA, &key).unwrap();

    assert!(envelope.len() > IV_LEN);
    assert_eq!(signature.len(), SIGNATURE_HEX_LEN);
    assert!(signature.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    assert_eq!(signature, sign_envelope(&envelope, &key));
}

#[test]
fn every_flipped_envelope_bit_fails_authentication() {
    let key = secret(TEST_KEY);
    let (envelope, signature) = encrypt(b"hi", &key).unwrap();

    for byte in 0..envelope.len() {
        for bit in 0..8 {
            let mut tampered = envelope.clone();
            tampered[byte] ^= 1 << bit;
            let err = decrypt(&tampered, &signature, &key).unwrap_err();
            assert!(
                matches!(err, CrypError::AuthenticationFailure),
                "byte {byte} bit {bit}: {err:?}"
            );
        }
    }
}

#[test]
fn every_flipped_signature_bit_fails_authentication() {
    let key = secret(TEST_KEY);
    let (envelope, signature) = encrypt(b"hi", &key).unwrap();
    let raw = hex::decode(&signature).unwrap();

    for byte in 0..raw.len() {
        for bit in 0..8 {
            let mut tampered = raw.clone();
            tampered[byte] ^= 1 << bit;
            let err = decrypt(&envelope, &hex::encode(&tampered), &key).unwrap_err();
            assert!(
                matches!(err, CrypError::AuthenticationFailure),
                "byte {byte} bit {bit}: {err:?}"
            );
        }
    }
}

#[test]
fn wrong_secret_fails_authentication() {
    let (envelope, signature) = encrypt(TEST_DATA, &secret(b"right")).unwrap();
    for wrong in [b"wrong".as_slice(), b"".as_slice(), b"right ".as_slice(), b"Right".as_slice()] {
        let err = decrypt(&envelope, &signature, &secret(wrong)).unwrap_err();
        assert!(matches!(err, CrypError::AuthenticationFailure));
    }
}

#[test]
fn truncated_envelope_is_malformed() {
    let key = secret(TEST_KEY);
    let (envelope, signature) = encrypt(TEST_DATA, &key).unwrap();

    let err = decrypt(&envelope[..IV_LEN - 1], &signature, &key).unwrap_err();
    assert!(matches!(err, CrypError::MalformedEnvelope { len } if len == IV_LEN - 1));

    let err = decrypt(&[], &signature, &key).unwrap_err();
    assert!(matches!(err, CrypError::MalformedEnvelope { len: 0 }));
}

#[test]
fn non_hex_signature_is_rejected() {
    let key = secret(TEST_KEY);
    let (envelope, _) = encrypt(TEST_DATA, &key).unwrap();

    let err = decrypt(&envelope, &"zz".repeat(32), &key).unwrap_err();
    assert!(matches!(err, CrypError::InvalidSignatureEncoding(_)));
}

#[test]
fn authenticated_garbage_is_corrupt_payload() {
    // A correctly signed envelope whose body was never gzip output
    let key = secret(TEST_KEY);
    let envelope = [0x5au8; 64];
    let signature = sign_envelope(&envelope, &key);

    let err = decrypt(&envelope, &signature, &key).unwrap_err();
    assert!(matches!(err, CrypError::CorruptPayload(_)));
}
