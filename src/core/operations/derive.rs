//! Deterministic P-256 key derivation from a seed string.
//!
//! The seed is the only entropy source. It instantiates an HMAC-DRBG
//! (SHA-256) with the curve order as nonce; 32-byte candidates are drawn until
//! one is at most `n - 2`, and the private scalar is that candidate plus one.
//! The same seed therefore always yields the same key pair.

use p256::{FieldBytes, SecretKey};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::core::encoding::seed_entropy;
use crate::core::error::{KeyError, KeyResult};
use crate::core::operations::drbg::HmacDrbg;
use crate::core::types::{JwkKeyPair, SeaKeyPair};

/// Size of a P-256 scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Order `n` of the P-256 base point, big-endian.
pub const P256_ORDER: [u8; SCALAR_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

/// `n - 2`: the largest candidate accepted before the final increment.
const P256_ORDER_MINUS_TWO: [u8; SCALAR_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x4f,
];

/// Derives the P-256 secret key for a seed.
///
/// # Errors
///
/// Returns `KeyError::InsufficientEntropy` if the seed carries fewer than
/// 192 bits, and `KeyError::KeyGeneration` if the curve library rejects the
/// scalar.
pub fn derive_secret_key(seed: &str) -> KeyResult<SecretKey> {
    let mut entropy = seed_entropy(seed);
    let drbg = HmacDrbg::new(&entropy, &P256_ORDER, &[]);
    entropy.zeroize();

    let mut drbg = drbg.map_err(|err| {
        warn!(%err, "rejected seed for key generation");
        err
    })?;

    let mut candidate = [0u8; SCALAR_SIZE];
    loop {
        drbg.fill_bytes(&mut candidate)?;
        if candidate <= P256_ORDER_MINUS_TWO {
            break;
        }
        debug!("DRBG candidate out of range, drawing again");
    }
    increment_be(&mut candidate);

    let secret = SecretKey::from_bytes(FieldBytes::from_slice(&candidate))
        .map_err(|_| KeyError::KeyGeneration);
    candidate.zeroize();
    secret
}

/// Derives a JWK-shaped P-256 key pair from a seed.
///
/// Identical seeds yield identical `x`, `y` and `d`. The seed is not checked
/// for format; anything with at least 192 bits of entropy bytes is accepted.
///
/// # Errors
///
/// See [`derive_secret_key`].
///
/// # Example
///
/// ```rust
/// use seapair::derive_key_pair;
///
/// let seed = format!("0x{}", "11".repeat(32));
/// let a = derive_key_pair(&seed).expect("seed is long enough");
/// let b = derive_key_pair(&seed).expect("seed is long enough");
/// assert_eq!(a, b);
/// ```
pub fn derive_key_pair(seed: &str) -> KeyResult<JwkKeyPair> {
    let secret = derive_secret_key(seed)?;
    let jwk = JwkKeyPair::from_secret_key(&secret)?;
    debug!(x = jwk.x(), "derived P-256 key pair");
    Ok(jwk)
}

/// Derives an SEA authentication key pair from a seed.
///
/// The one derived pair fills both the signing and the encryption roles:
/// `pub == epub == x.y` and `priv == epriv == d`.
///
/// # Errors
///
/// See [`derive_secret_key`].
pub fn derive_sea_pair(seed: &str) -> KeyResult<SeaKeyPair> {
    derive_key_pair(seed).map(SeaKeyPair::from)
}

/// Adds one to a big-endian integer that is known not to overflow.
fn increment_be(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().rev() {
        let (sum, carry) = byte.overflowing_add(1);
        *byte = sum;
        if !carry {
            break;
        }
    }
}
