//! Network selection
//!
//! Chooses the version bytes prefixed to addresses and WIF secrets.
//! Deserializable so callers can carry it in their own configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    PUBKEY_ADDRESS_VERSION, SECRET_KEY_VERSION, TESTNET_PUBKEY_ADDRESS_VERSION,
    TESTNET_SECRET_KEY_VERSION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Version byte for pay-to-pubkey-hash addresses
    pub const fn address_version(self) -> u8 {
        match self {
            Network::Mainnet => PUBKEY_ADDRESS_VERSION,
            Network::Testnet => TESTNET_PUBKEY_ADDRESS_VERSION,
        }
    }

    /// Version byte for WIF secret keys
    pub const fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => SECRET_KEY_VERSION,
            Network::Testnet => TESTNET_SECRET_KEY_VERSION,
        }
    }

    /// Look up the network owning an address version byte
    pub fn from_address_version(version: u8) -> Option<Self> {
        match version {
            PUBKEY_ADDRESS_VERSION => Some(Network::Mainnet),
            TESTNET_PUBKEY_ADDRESS_VERSION => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Look up the network owning a WIF version byte
    pub fn from_wif_version(version: u8) -> Option<Self> {
        match version {
            SECRET_KEY_VERSION => Some(Network::Mainnet),
            TESTNET_SECRET_KEY_VERSION => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
