//! Cryptography module - SHA-256 / hash-160 digests and the secp256k1 curve provider

mod curve;
mod hash;

pub use curve::*;
pub use hash::*;
