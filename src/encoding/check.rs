//! Base58Check - base-58 with a 4-byte double-SHA-256 checksum suffix
//!
//! Encoding: base58(payload ++ sha256(sha256(payload))[0..4])

use tracing::debug;

use super::base58::{decode, encode, Base58Error};
use crate::constants::CHECKSUM_SIZE;
use crate::crypto::double_sha256;

/// First four bytes of the double SHA-256 of `payload`
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = double_sha256(payload);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}

/// Append the checksum and base-58 encode
pub fn check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Base-58 decode, verify and strip the checksum
pub fn check_decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut data = decode(input)?;
    if data.len() < CHECKSUM_SIZE {
        debug!(length = data.len(), "base58check data shorter than checksum");
        return Err(Base58Error::TooShort { length: data.len() });
    }

    let split = data.len() - CHECKSUM_SIZE;
    let mut found = [0u8; CHECKSUM_SIZE];
    found.copy_from_slice(&data[split..]);
    data.truncate(split);

    let expected = checksum(&data);
    if expected != found {
        debug!(
            expected = %hex::encode(expected),
            found = %hex::encode(found),
            "base58check checksum mismatch"
        );
        return Err(Base58Error::Checksum { expected, found });
    }

    Ok(data)
}
