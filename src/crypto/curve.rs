//! secp256k1 curve provider and Y-coordinate recovery
//!
//! Scalar multiplication is delegated to k256. Field arithmetic for
//! decompressing public keys is done on 256-bit integers.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use ruint::aliases::U256;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::constants::{COORDINATE_SIZE, SECRET_KEY_SIZE};

/// Point decoding errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointError {
    #[error("Empty public key")]
    Empty,
    #[error("Invalid public key marker: 0x{0:02x}")]
    InvalidMarker(u8),
    #[error("Invalid public key length for marker 0x{marker:02x}: expected {expected}, got {actual}")]
    InvalidLength {
        marker: u8,
        expected: usize,
        actual: usize,
    },
    #[error("Point is not on the curve")]
    NotOnCurve,
    #[error("Invalid secret scalar")]
    InvalidScalar,
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` over a prime field,
/// plus multiplication of its conventional base point.
pub trait Curve {
    /// Field prime
    const P: U256;
    /// Coefficient of x
    const A: U256;
    /// Constant term
    const B: U256;

    /// Multiply the base point by a big-endian secret scalar
    fn scalar_mult(secret: &[u8; SECRET_KEY_SIZE]) -> Result<CurvePoint, PointError>;
}

/// The secp256k1 curve
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    // 2^256 - 2^32 - 977
    const P: U256 = U256::from_limbs([
        0xFFFF_FFFE_FFFF_FC2F,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ]);
    const A: U256 = U256::ZERO;
    const B: U256 = U256::from_limbs([7, 0, 0, 0]);

    fn scalar_mult(secret: &[u8; SECRET_KEY_SIZE]) -> Result<CurvePoint, PointError> {
        // rejects zero and scalars >= n
        let secret_key = SecretKey::from_slice(secret).map_err(|_| PointError::InvalidScalar)?;
        let encoded = secret_key.public_key().to_encoded_point(false);

        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Ok(CurvePoint::new(
                U256::from_be_slice(x.as_slice()),
                U256::from_be_slice(y.as_slice()),
            )),
            _ => Err(PointError::InvalidScalar),
        }
    }
}

/// An affine curve point. Coordinates are not checked on construction;
/// use [`CurvePoint::is_on`] where that matters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    x: U256,
    y: U256,
}

impl CurvePoint {
    pub const fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> U256 {
        self.x
    }

    pub fn y(&self) -> U256 {
        self.y
    }

    pub fn y_is_odd(&self) -> bool {
        self.y.bit(0)
    }

    /// X as a 32-byte big-endian field, zero-padded on the left
    pub fn x_bytes(&self) -> [u8; COORDINATE_SIZE] {
        self.x.to_be_bytes()
    }

    /// Y as a 32-byte big-endian field, zero-padded on the left
    pub fn y_bytes(&self) -> [u8; COORDINATE_SIZE] {
        self.y.to_be_bytes()
    }

    /// Check both coordinates are field elements satisfying the curve equation
    pub fn is_on<C: Curve>(&self) -> bool {
        self.x < C::P && self.y < C::P && self.y.mul_mod(self.y, C::P) == curve_rhs::<C>(self.x)
    }
}

impl fmt::Debug for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CurvePoint({}, {})",
            hex::encode(self.x_bytes()),
            hex::encode(self.y_bytes())
        )
    }
}

/// `x^3 + a*x + b (mod p)`
fn curve_rhs<C: Curve>(x: U256) -> U256 {
    let x_cubed = x.mul_mod(x, C::P).mul_mod(x, C::P);
    let ax = C::A.mul_mod(x, C::P);
    x_cubed.add_mod(ax, C::P).add_mod(C::B, C::P)
}

/// Recover the Y coordinate for `x` with the requested parity.
///
/// Takes the square root as `(y^2)^((p+1)/4)`, which requires p = 3 mod 4.
/// The other root `p - y` always has the opposite parity since p is odd.
pub fn recover_y<C: Curve>(x: U256, want_odd: bool) -> Result<U256, PointError> {
    if x >= C::P {
        debug!(x = %hex::encode(x.to_be_bytes::<32>()), "x is not a field element");
        return Err(PointError::NotOnCurve);
    }

    let y_squared = curve_rhs::<C>(x);
    let exponent = (C::P + U256::from(1u64)) / U256::from(4u64);
    let y = y_squared.pow_mod(exponent, C::P);

    // no square root: x is not the abscissa of any curve point
    if y.mul_mod(y, C::P) != y_squared {
        debug!(x = %hex::encode(x.to_be_bytes::<32>()), "x has no matching y on the curve");
        return Err(PointError::NotOnCurve);
    }

    if y.is_zero() || y.bit(0) == want_odd {
        Ok(y)
    } else {
        Ok(C::P - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u256(hex_str: &str) -> U256 {
        U256::from_be_slice(&hex::decode(hex_str).unwrap())
    }

    const GX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const GY: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
    const GY_NEG: &str = "b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777";

    #[test]
    fn test_field_prime_is_3_mod_4() {
        assert_eq!(Secp256k1::P % U256::from(4u64), U256::from(3u64));
    }

    #[test]
    fn test_scalar_mult_one_is_generator() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let point = Secp256k1::scalar_mult(&secret).unwrap();
        assert_eq!(point.x(), u256(GX));
        assert_eq!(point.y(), u256(GY));
        assert!(point.is_on::<Secp256k1>());
    }

    #[test]
    fn test_scalar_mult_rejects_zero() {
        assert_eq!(
            Secp256k1::scalar_mult(&[0u8; 32]),
            Err(PointError::InvalidScalar)
        );
    }

    #[test]
    fn test_scalar_mult_rejects_order() {
        let n = hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")
            .unwrap();
        let secret: [u8; 32] = n.try_into().unwrap();
        assert_eq!(Secp256k1::scalar_mult(&secret), Err(PointError::InvalidScalar));
    }

    #[test]
    fn test_recover_y_even() {
        let y = recover_y::<Secp256k1>(u256(GX), false).unwrap();
        assert_eq!(y, u256(GY));
    }

    #[test]
    fn test_recover_y_odd() {
        let y = recover_y::<Secp256k1>(u256(GX), true).unwrap();
        assert_eq!(y, u256(GY_NEG));
        assert!(y.bit(0));
    }

    #[test]
    fn test_recover_y_rejects_x_not_on_curve() {
        // x = 5: 125 + 7 = 132 is not a quadratic residue mod p
        let result = recover_y::<Secp256k1>(U256::from(5u64), false);
        assert_eq!(result, Err(PointError::NotOnCurve));
    }

    #[test]
    fn test_recover_y_rejects_x_out_of_field() {
        let result = recover_y::<Secp256k1>(Secp256k1::P, false);
        assert_eq!(result, Err(PointError::NotOnCurve));
    }

    #[test]
    fn test_is_on_curve() {
        assert!(CurvePoint::new(u256(GX), u256(GY)).is_on::<Secp256k1>());
        assert!(!CurvePoint::new(u256(GX), u256(GX)).is_on::<Secp256k1>());
    }

    #[test]
    fn test_coordinate_bytes_left_padded() {
        let point = CurvePoint::new(U256::from(1u64), U256::from(2u64));
        let x = point.x_bytes();
        assert_eq!(x[..31], [0u8; 31]);
        assert_eq!(x[31], 1);
        assert_eq!(point.y_bytes()[31], 2);
    }
}
