//! keyaddr - Base58Check and secp256k1 key codec
//!
//! Converts between the binary forms of Bitcoin-style keys and their
//! transportable text encodings:
//! secret key -> public key -> address, and secret key <-> WIF.

pub mod crypto;
pub mod encoding;
pub mod keys;
pub mod network;

pub use crypto::{hash160, CurvePoint, Hash160};
pub use encoding::{check_decode, check_encode, decode, encode, Base58Error};
pub use keys::{
    address_from_public_key, point_to_public_key_bytes, public_key_bytes_to_point,
    public_key_from_secret, secret_from_wif, wif_from_secret, Address, KeyError,
    PublicKeyBytes,
};
pub use network::Network;

/// Protocol constants - fixed by the key and address formats
pub mod constants {
    /// Version byte of a mainnet pay-to-pubkey-hash address
    pub const PUBKEY_ADDRESS_VERSION: u8 = 0x00;

    /// Version byte of a testnet pay-to-pubkey-hash address
    pub const TESTNET_PUBKEY_ADDRESS_VERSION: u8 = 0x6f;

    /// Version byte of a mainnet WIF secret key
    pub const SECRET_KEY_VERSION: u8 = 0x80;

    /// Version byte of a testnet WIF secret key
    pub const TESTNET_SECRET_KEY_VERSION: u8 = 0xef;

    /// Trailing WIF byte marking a secret whose public key is compressed
    pub const COMPRESSED_MARKER: u8 = 0x01;

    /// Length of the Base58Check checksum suffix
    pub const CHECKSUM_SIZE: usize = 4;

    /// Secret key length (one secp256k1 scalar)
    pub const SECRET_KEY_SIZE: usize = 32;

    /// Field element / coordinate length
    pub const COORDINATE_SIZE: usize = 32;

    /// Hash-160 digest length
    pub const HASH160_SIZE: usize = 20;

    /// Compressed public key length (marker + X)
    pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

    /// Uncompressed public key length (marker + X + Y)
    pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

    /// Public key marker: compressed, Y even
    pub const MARKER_EVEN: u8 = 0x02;

    /// Public key marker: compressed, Y odd
    pub const MARKER_ODD: u8 = 0x03;

    /// Public key marker: uncompressed
    pub const MARKER_UNCOMPRESSED: u8 = 0x04;
}
