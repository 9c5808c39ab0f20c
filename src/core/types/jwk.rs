//! JwkKeyPair - P-256 key pair as a JSON Web Key.
//!
//! Format: `{"kty":"EC","crv":"P-256","x":..,"y":..,"d":..}`
//!
//! `x`, `y` and `d` are minimal big-endian integers in unpadded base64url, so
//! a coordinate with leading zero bytes encodes from fewer than 32 bytes.

use core::fmt::{self, Debug};

use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, FieldBytes, PublicKey, SecretKey};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::core::encoding::{decode_uint, encode_uint, pad_be};
use crate::core::error::{KeyError, KeyResult};

/// JWK key type for elliptic curve keys.
pub const KTY_EC: &str = "EC";

/// JWK curve name for P-256.
pub const CRV_P256: &str = "P-256";

/// Size of a P-256 field element in bytes.
const FIELD_SIZE: usize = 32;

/// A P-256 key pair shaped as a JSON Web Key.
///
/// # Security
///
/// - The private scalar is zeroized on drop
/// - Debug output redacts `d`
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use seapair::derive_key_pair;
///
/// let jwk = derive_key_pair(&format!("0x{}", "11".repeat(32))).expect("seed is long enough");
/// assert_eq!(jwk.kty(), "EC");
/// assert_eq!(jwk.crv(), "P-256");
/// assert!(!jwk.x().contains(['+', '/', '=']));
/// ```
#[derive(Clone, Zeroize, Serialize, Deserialize)]
#[zeroize(drop)]
pub struct JwkKeyPair {
    kty: String,
    crv: String,
    x: String,
    y: String,
    d: String,
}

impl JwkKeyPair {
    /// Builds the JWK from big-endian integers.
    pub(crate) fn from_be_bytes(x: &[u8], y: &[u8], d: &[u8]) -> Self {
        Self {
            kty: KTY_EC.to_string(),
            crv: CRV_P256.to_string(),
            x: encode_uint(x),
            y: encode_uint(y),
            d: encode_uint(d),
        }
    }

    /// Builds the JWK for a P-256 secret key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::KeyGeneration` if the public point is the identity.
    pub fn from_secret_key(secret: &SecretKey) -> KeyResult<Self> {
        let point = secret.public_key().to_encoded_point(false);
        let x = point.x().ok_or(KeyError::KeyGeneration)?;
        let y = point.y().ok_or(KeyError::KeyGeneration)?;

        let mut d = secret.to_bytes();
        let jwk = Self::from_be_bytes(x, y, &d);
        d.as_mut_slice().zeroize();
        Ok(jwk)
    }

    /// Key type, always `"EC"`.
    #[must_use]
    pub fn kty(&self) -> &str {
        &self.kty
    }

    /// Curve name, always `"P-256"`.
    #[must_use]
    pub fn crv(&self) -> &str {
        &self.crv
    }

    /// Base64url x coordinate of the public point.
    #[must_use]
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Base64url y coordinate of the public point.
    #[must_use]
    pub fn y(&self) -> &str {
        &self.y
    }

    /// Base64url private scalar.
    #[must_use]
    pub fn d(&self) -> &str {
        &self.d
    }

    /// Reconstructs the P-256 secret key from `d`.
    ///
    /// # Errors
    ///
    /// Returns an error if `d` is not base64url or not a valid scalar.
    pub fn to_secret_key(&self) -> KeyResult<SecretKey> {
        let mut raw = decode_uint(&self.d)?;
        let padded = pad_be::<FIELD_SIZE>(&raw);
        raw.zeroize();

        let mut padded = padded?;
        let secret = SecretKey::from_bytes(FieldBytes::from_slice(&padded))
            .map_err(|_| KeyError::InvalidKey);
        padded.zeroize();
        secret
    }

    /// Reconstructs the P-256 public key from `x` and `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is malformed or the point is not on
    /// the curve.
    pub fn to_public_key(&self) -> KeyResult<PublicKey> {
        let x = pad_be::<FIELD_SIZE>(&decode_uint(&self.x)?)?;
        let y = pad_be::<FIELD_SIZE>(&decode_uint(&self.y)?)?;

        let point = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(&x),
            FieldBytes::from_slice(&y),
            false,
        );
        Option::from(PublicKey::from_encoded_point(&point)).ok_or(KeyError::InvalidKey)
    }
}

// =============================================================================
// Debug (security: don't expose the private scalar)
// =============================================================================

impl Debug for JwkKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwkKeyPair")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("d", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison of the private scalar)
// =============================================================================

impl PartialEq for JwkKeyPair {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;

        let public_eq = self.kty == other.kty
            && self.crv == other.crv
            && self.x == other.x
            && self.y == other.y;
        let secret_eq: bool = self.d.as_bytes().ct_eq(other.d.as_bytes()).into();
        public_eq & secret_eq
    }
}

impl Eq for JwkKeyPair {}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCALAR: [u8; 32] = [
        0xa8, 0x11, 0x1d, 0x21, 0x0b, 0x77, 0xa0, 0xc4, 0x8d, 0x5a, 0x43, 0x57, 0x52, 0x49, 0xaa,
        0xfc, 0x4f, 0x1b, 0x9f, 0xcc, 0xfe, 0x27, 0x7b, 0xd5, 0x30, 0x8b, 0x41, 0xd7, 0xba, 0xfb,
        0x92, 0x9f,
    ];

    fn test_jwk() -> KeyResult<JwkKeyPair> {
        let secret = SecretKey::from_bytes(FieldBytes::from_slice(&TEST_SCALAR))
            .map_err(|_| KeyError::InvalidKey)?;
        JwkKeyPair::from_secret_key(&secret)
    }

    #[test]
    fn test_from_secret_key() -> KeyResult<()> {
        let jwk = test_jwk()?;
        assert_eq!(jwk.kty(), "EC");
        assert_eq!(jwk.crv(), "P-256");
        assert_eq!(jwk.d(), "qBEdIQt3oMSNWkNXUkmq_E8bn8z-J3vVMItB17r7kp8");
        assert_eq!(jwk.x(), "Zfw5HNaidqAdbwCFIiMQ5_gjeWU6vi6csS5Jde3fJpk");
        assert_eq!(jwk.y(), "BXqPOD4cBWUDiZGBZtErJImgEPPKQnrOVKbUeNxB6bA");
        Ok(())
    }

    #[test]
    fn test_key_reconstruction() -> KeyResult<()> {
        let jwk = test_jwk()?;
        let secret = jwk.to_secret_key()?;
        assert_eq!(secret.to_bytes().as_slice(), &TEST_SCALAR);
        assert_eq!(jwk.to_public_key()?, secret.public_key());
        Ok(())
    }

    #[test]
    fn test_public_key_rejects_off_curve_point() -> KeyResult<()> {
        let mut jwk = test_jwk()?;
        jwk.y = encode_uint(&[1]);
        assert!(matches!(jwk.to_public_key(), Err(KeyError::InvalidKey)));
        Ok(())
    }

    #[test]
    fn test_serialize_field_names() -> KeyResult<()> {
        let jwk = test_jwk()?;
        let json = serde_json::to_value(&jwk).map_err(|_| KeyError::InvalidFormat)?;
        assert_eq!(json["kty"], "EC");
        assert_eq!(json["crv"], "P-256");
        assert_eq!(json["x"], jwk.x());
        assert_eq!(json["y"], jwk.y());
        assert_eq!(json["d"], jwk.d());
        Ok(())
    }

    #[test]
    fn test_debug_redacts_scalar() -> KeyResult<()> {
        let jwk = test_jwk()?;
        let debug_str = format!("{jwk:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains(jwk.d()));
        Ok(())
    }

    #[test]
    fn test_equality() -> KeyResult<()> {
        let a = test_jwk()?;
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.d = encode_uint(&[1]);
        assert_ne!(a, c);
        Ok(())
    }
}
