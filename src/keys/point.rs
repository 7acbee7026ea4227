//! Public key byte formats
//!
//! Compressed:   0x02 | 0x03 (Y parity) ++ X (32 bytes)
//! Uncompressed: 0x04 ++ X (32 bytes) ++ Y (32 bytes)

use ruint::aliases::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

use crate::constants::{
    COMPRESSED_PUBLIC_KEY_SIZE, COORDINATE_SIZE, MARKER_EVEN, MARKER_ODD, MARKER_UNCOMPRESSED,
    UNCOMPRESSED_PUBLIC_KEY_SIZE,
};
use crate::crypto::{recover_y, CurvePoint, PointError, Secp256k1};

/// Serialized public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKeyBytes {
    Compressed([u8; COMPRESSED_PUBLIC_KEY_SIZE]),
    Uncompressed([u8; UNCOMPRESSED_PUBLIC_KEY_SIZE]),
}

impl PublicKeyBytes {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKeyBytes::Compressed(bytes) => bytes,
            PublicKeyBytes::Uncompressed(bytes) => bytes,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, PublicKeyBytes::Compressed(_))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parse from hex; checks marker and length only
    pub fn from_hex(hex_str: &str) -> Result<Self, PointError> {
        let bytes = hex::decode(hex_str)?;
        Self::try_from(bytes.as_slice())
    }

    /// Decode to a curve point, recovering Y when compressed
    pub fn to_point(&self) -> Result<CurvePoint, PointError> {
        public_key_bytes_to_point(self.as_bytes())
    }
}

fn check_length(bytes: &[u8], marker: u8, expected: usize) -> Result<(), PointError> {
    if bytes.len() != expected {
        return Err(PointError::InvalidLength {
            marker,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

impl TryFrom<&[u8]> for PublicKeyBytes {
    type Error = PointError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let marker = *bytes.first().ok_or(PointError::Empty)?;
        match marker {
            MARKER_EVEN | MARKER_ODD => {
                check_length(bytes, marker, COMPRESSED_PUBLIC_KEY_SIZE)?;
                let mut arr = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
                arr.copy_from_slice(bytes);
                Ok(PublicKeyBytes::Compressed(arr))
            }
            MARKER_UNCOMPRESSED => {
                check_length(bytes, marker, UNCOMPRESSED_PUBLIC_KEY_SIZE)?;
                let mut arr = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
                arr.copy_from_slice(bytes);
                Ok(PublicKeyBytes::Uncompressed(arr))
            }
            other => Err(PointError::InvalidMarker(other)),
        }
    }
}

impl AsRef<[u8]> for PublicKeyBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for PublicKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKeyBytes({})", self.to_hex())
    }
}

impl fmt::Display for PublicKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// Hex string on the wire; serde has no derive for 33/65-byte arrays
impl Serialize for PublicKeyBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKeyBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str: String = Deserialize::deserialize(deserializer)?;
        PublicKeyBytes::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Serialize a point in compressed or uncompressed form
pub fn point_to_public_key_bytes(point: &CurvePoint, compressed: bool) -> PublicKeyBytes {
    let x = point.x_bytes();

    if compressed {
        let mut bytes = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        bytes[0] = MARKER_EVEN + u8::from(point.y_is_odd());
        bytes[1..].copy_from_slice(&x);
        PublicKeyBytes::Compressed(bytes)
    } else {
        let mut bytes = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        bytes[0] = MARKER_UNCOMPRESSED;
        bytes[1..1 + COORDINATE_SIZE].copy_from_slice(&x);
        bytes[1 + COORDINATE_SIZE..].copy_from_slice(&point.y_bytes());
        PublicKeyBytes::Uncompressed(bytes)
    }
}

/// Parse compressed or uncompressed public key bytes into a curve point
pub fn public_key_bytes_to_point(bytes: &[u8]) -> Result<CurvePoint, PointError> {
    let (&marker, rest) = bytes.split_first().ok_or(PointError::Empty)?;

    match marker {
        MARKER_UNCOMPRESSED => {
            check_length(bytes, marker, UNCOMPRESSED_PUBLIC_KEY_SIZE)?;
            let x = U256::from_be_slice(&rest[..COORDINATE_SIZE]);
            let y = U256::from_be_slice(&rest[COORDINATE_SIZE..]);

            let point = CurvePoint::new(x, y);
            if !point.is_on::<Secp256k1>() {
                debug!(pubkey = %hex::encode(bytes), "uncompressed public key is off the curve");
                return Err(PointError::NotOnCurve);
            }
            Ok(point)
        }
        MARKER_EVEN | MARKER_ODD => {
            check_length(bytes, marker, COMPRESSED_PUBLIC_KEY_SIZE)?;
            let x = U256::from_be_slice(rest);
            let y = recover_y::<Secp256k1>(x, marker == MARKER_ODD)?;
            Ok(CurvePoint::new(x, y))
        }
        other => {
            debug!(marker = other, "unrecognized public key marker");
            Err(PointError::InvalidMarker(other))
        }
    }
}
