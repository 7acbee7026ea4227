//! Encoding module - base-58 radix conversion and the Base58Check envelope

mod base58;
mod check;

pub use base58::*;
pub use check::*;
