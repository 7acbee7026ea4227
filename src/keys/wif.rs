//! Wallet Import Format
//!
//! WIF = Base58Check(version ++ secret (32 bytes) ++ [0x01 if compressed])

use std::fmt;
use tracing::debug;

use super::secret::secret_array;
use super::{public_key_from_secret, Address, KeyError, PublicKeyBytes};
use crate::constants::{COMPRESSED_MARKER, SECRET_KEY_SIZE};
use crate::encoding::{check_decode, check_encode};
use crate::network::Network;

/// Payload length without / with the compression marker
const WIF_UNCOMPRESSED_LEN: usize = 1 + SECRET_KEY_SIZE;
const WIF_COMPRESSED_LEN: usize = 1 + SECRET_KEY_SIZE + 1;

fn encode_wif(version: u8, secret: &[u8; SECRET_KEY_SIZE], compressed: bool) -> String {
    let mut payload = Vec::with_capacity(WIF_COMPRESSED_LEN);
    payload.push(version);
    payload.extend_from_slice(secret);
    if compressed {
        payload.push(COMPRESSED_MARKER);
    }
    check_encode(&payload)
}

/// Encode a 32-byte secret as a mainnet WIF string
pub fn wif_from_secret(secret: &[u8], compressed: bool) -> Result<String, KeyError> {
    wif_from_secret_for(Network::Mainnet, secret, compressed)
}

pub fn wif_from_secret_for(
    network: Network,
    secret: &[u8],
    compressed: bool,
) -> Result<String, KeyError> {
    let secret = secret_array(secret)?;
    Ok(encode_wif(network.wif_version(), &secret, compressed))
}

/// Extract the 32-byte secret from a WIF string.
///
/// Only the checksum and payload length are checked; the version byte and
/// compression marker are stripped without inspection. See [`WifKey::decode`]
/// for strict parsing.
pub fn secret_from_wif(wif: &str) -> Result<[u8; SECRET_KEY_SIZE], KeyError> {
    let payload = check_decode(wif)?;
    let secret = match payload.len() {
        WIF_COMPRESSED_LEN => &payload[1..1 + SECRET_KEY_SIZE],
        WIF_UNCOMPRESSED_LEN => &payload[1..],
        other => {
            debug!(length = other, "unexpected WIF payload length");
            return Err(KeyError::InvalidWifLength(other));
        }
    };
    secret_array(secret)
}

/// A fully decoded WIF secret key
#[derive(Clone, PartialEq, Eq)]
pub struct WifKey {
    pub network: Network,
    pub secret: [u8; SECRET_KEY_SIZE],
    pub compressed: bool,
}

impl fmt::Debug for WifKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifKey")
            .field("network", &self.network)
            .field("secret", &"[REDACTED]")
            .field("compressed", &self.compressed)
            .finish()
    }
}

impl WifKey {
    pub fn new(network: Network, secret: [u8; SECRET_KEY_SIZE], compressed: bool) -> Self {
        Self {
            network,
            secret,
            compressed,
        }
    }

    /// Decode, requiring a known version byte and a `0x01` compression marker
    pub fn decode(wif: &str) -> Result<Self, KeyError> {
        let payload = check_decode(wif)?;
        let compressed = match payload.len() {
            WIF_COMPRESSED_LEN => {
                let marker = payload[WIF_COMPRESSED_LEN - 1];
                if marker != COMPRESSED_MARKER {
                    debug!(marker, "bad WIF compression marker");
                    return Err(KeyError::InvalidCompressionMarker(marker));
                }
                true
            }
            WIF_UNCOMPRESSED_LEN => false,
            other => {
                debug!(length = other, "unexpected WIF payload length");
                return Err(KeyError::InvalidWifLength(other));
            }
        };

        let network =
            Network::from_wif_version(payload[0]).ok_or(KeyError::UnknownWifVersion(payload[0]))?;
        let secret = secret_array(&payload[1..1 + SECRET_KEY_SIZE])?;

        Ok(Self {
            network,
            secret,
            compressed,
        })
    }

    pub fn encode(&self) -> String {
        encode_wif(self.network.wif_version(), &self.secret, self.compressed)
    }

    /// Public key in the form selected by the compression flag
    pub fn public_key(&self) -> Result<PublicKeyBytes, KeyError> {
        public_key_from_secret(&self.secret, self.compressed)
    }

    /// Address of this key on its own network
    pub fn address(&self) -> Result<Address, KeyError> {
        Ok(Address::from_public_key_for(self.network, self.public_key()?))
    }
}
