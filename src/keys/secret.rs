//! Secret key -> public key

use tracing::trace;

use super::{point_to_public_key_bytes, KeyError, PublicKeyBytes};
use crate::constants::SECRET_KEY_SIZE;
use crate::crypto::{Curve, Secp256k1};

/// Check a secret is exactly 32 bytes and copy it out
pub(crate) fn secret_array(secret: &[u8]) -> Result<[u8; SECRET_KEY_SIZE], KeyError> {
    secret.try_into().map_err(|_| KeyError::InvalidLength {
        expected: SECRET_KEY_SIZE,
        actual: secret.len(),
    })
}

/// Derive the public key of a 32-byte big-endian secret
pub fn public_key_from_secret(secret: &[u8], compressed: bool) -> Result<PublicKeyBytes, KeyError> {
    let secret = secret_array(secret)?;
    let point = Secp256k1::scalar_mult(&secret)?;
    let pubkey = point_to_public_key_bytes(&point, compressed);
    trace!(compressed, "derived public key");
    Ok(pubkey)
}
