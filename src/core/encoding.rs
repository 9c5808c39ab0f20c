//! Byte and string encodings shared by the key pair formats.
//!
//! Integers (the private scalar and the public point coordinates) are written
//! as their minimal unsigned big-endian byte string, then base64url without
//! padding. SEA public keys join the two encoded coordinates with a dot:
//! `{x}.{y}`.

use base64::prelude::*;

use crate::core::error::KeyError;

/// Separator between the two coordinates of an SEA public key.
pub const SEA_SEPARATOR: char = '.';

/// Converts a seed string into DRBG entropy bytes.
///
/// Each UTF-16 code unit contributes its low byte when it fits in one byte,
/// and both bytes (high first) otherwise. ASCII seeds therefore map to their
/// plain bytes; a `0x`-prefixed hex seed is taken as text, not decoded.
#[must_use]
pub fn seed_entropy(seed: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(seed.len());
    for unit in seed.encode_utf16() {
        let [hi, lo] = unit.to_be_bytes();
        if hi != 0 {
            out.push(hi);
        }
        out.push(lo);
    }
    out
}

/// Strips leading zero bytes from a big-endian integer, keeping at least one.
#[must_use]
pub fn minimal_be(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None if bytes.is_empty() => bytes,
        None => &bytes[bytes.len() - 1..],
    }
}

/// Encodes a big-endian unsigned integer as minimal-length base64url.
#[must_use]
pub fn encode_uint(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(minimal_be(bytes))
}

/// Decodes a base64url coordinate or scalar back to its bytes.
///
/// # Errors
///
/// Returns `KeyError::Base64Decode` if the input is not unpadded base64url.
pub fn decode_uint(encoded: &str) -> Result<Vec<u8>, KeyError> {
    Ok(BASE64_URL_SAFE_NO_PAD.decode(encoded)?)
}

/// Left-pads a big-endian integer to a fixed width.
///
/// # Errors
///
/// Returns `KeyError::InvalidKey` if the integer does not fit in `N` bytes.
pub fn pad_be<const N: usize>(bytes: &[u8]) -> Result<[u8; N], KeyError> {
    let bytes = minimal_be(bytes);
    if bytes.len() > N {
        return Err(KeyError::InvalidKey);
    }

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// Joins two encoded coordinates into an SEA public key.
#[must_use]
pub fn join_public(x: &str, y: &str) -> String {
    format!("{x}{SEA_SEPARATOR}{y}")
}

/// Splits an SEA public key into its encoded `(x, y)` coordinates.
///
/// # Errors
///
/// Returns `KeyError::InvalidFormat` unless the input is exactly two
/// non-empty parts separated by a single dot.
pub fn split_public(public: &str) -> Result<(&str, &str), KeyError> {
    let (x, y) = public
        .split_once(SEA_SEPARATOR)
        .ok_or(KeyError::InvalidFormat)?;

    if x.is_empty() || y.is_empty() || y.contains(SEA_SEPARATOR) {
        return Err(KeyError::InvalidFormat);
    }

    Ok((x, y))
}
