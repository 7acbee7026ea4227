//! Pay-to-pubkey-hash addresses
//!
//! Address format: Base58Check(version ++ hash160(pubkey))

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::KeyError;
use crate::constants::HASH160_SIZE;
use crate::crypto::{hash160, Hash160};
use crate::encoding::{check_decode, check_encode};
use crate::network::Network;

/// A validated Base58Check address
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    encoded: String,
    network: Network,
    pubkey_hash: Hash160,
}

impl Address {
    /// Mainnet address of serialized public key bytes
    pub fn from_public_key(pubkey: impl AsRef<[u8]>) -> Self {
        Self::from_public_key_for(Network::Mainnet, pubkey)
    }

    pub fn from_public_key_for(network: Network, pubkey: impl AsRef<[u8]>) -> Self {
        Self::from_pubkey_hash(network, hash160(pubkey.as_ref()))
    }

    pub fn from_pubkey_hash(network: Network, pubkey_hash: Hash160) -> Self {
        let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
        payload.push(network.address_version());
        payload.extend_from_slice(pubkey_hash.as_bytes());

        Self {
            encoded: check_encode(&payload),
            network,
            pubkey_hash,
        }
    }

    /// Parse and validate an address string
    pub fn parse(address: &str) -> Result<Self, KeyError> {
        let payload = check_decode(address)?;
        if payload.len() != 1 + HASH160_SIZE {
            debug!(length = payload.len(), "address payload has wrong length");
            return Err(KeyError::InvalidAddressLength(payload.len()));
        }

        let network = Network::from_address_version(payload[0])
            .ok_or(KeyError::UnknownAddressVersion(payload[0]))?;
        let pubkey_hash = Hash160::from_slice(&payload[1..])
            .ok_or(KeyError::InvalidAddressLength(payload.len()))?;

        Ok(Self {
            encoded: address.to_string(),
            network,
            pubkey_hash,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The hash-160 of the public key this address pays to
    pub fn pubkey_hash(&self) -> Hash160 {
        self.pubkey_hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

impl FromStr for Address {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.encoded
    }
}

/// Mainnet address of serialized public key bytes
pub fn address_from_public_key(pubkey: impl AsRef<[u8]>) -> Address {
    Address::from_public_key(pubkey)
}
