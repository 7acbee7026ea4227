//! Keys module - public key serialization and derivations along
//! secret key -> public key -> address, and secret key <-> WIF

mod address;
mod point;
mod secret;
mod wif;

pub use address::*;
pub use point::*;
pub use secret::*;
pub use wif::*;

use thiserror::Error;

use crate::crypto::PointError;
use crate::encoding::Base58Error;

/// Key derivation and decoding errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyError {
    #[error("Invalid secret key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid WIF payload length: {0} bytes")]
    InvalidWifLength(usize),
    #[error("Invalid WIF compression marker: 0x{0:02x}")]
    InvalidCompressionMarker(u8),
    #[error("Unknown WIF version byte: 0x{0:02x}")]
    UnknownWifVersion(u8),
    #[error("Invalid address payload length: {0} bytes")]
    InvalidAddressLength(usize),
    #[error("Unknown address version byte: 0x{0:02x}")]
    UnknownAddressVersion(u8),
    #[error(transparent)]
    Base58(#[from] Base58Error),
    #[error(transparent)]
    Point(#[from] PointError),
}
