//! SHA-256 and hash-160 digests
//!
//! Hash-160 (RIPEMD-160 of SHA-256) compresses a public key into the
//! 20-byte payload carried by an address.

use ripemd::Ripemd160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::constants::HASH160_SIZE;

/// 20-byte hash-160 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160(pub [u8; HASH160_SIZE]);

impl Hash160 {
    /// Create from a slice, which must be exactly 20 bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; HASH160_SIZE] = bytes.try_into().ok()?;
        Some(Hash160(arr))
    }

    /// Create hash from hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        Self::from_slice(&bytes).ok_or(hex::FromHexError::InvalidStringLength)
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; HASH160_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self.to_hex())
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash160 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash160 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str: String = Deserialize::deserialize(deserializer)?;
        Hash160::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// SHA-256 of arbitrary bytes
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice, the digest behind Base58Check checksums
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// RIPEMD-160 of the SHA-256 of `data`
pub fn hash160(data: &[u8]) -> Hash160 {
    Hash160(Ripemd160::digest(Sha256::digest(data)).into())
}
