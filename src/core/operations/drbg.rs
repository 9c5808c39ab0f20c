//! HMAC-DRBG (SHA-256) seeded from caller-supplied entropy.
//!
//! This is the NIST SP 800-90A HMAC-DRBG without reseeding or prediction
//! resistance. Given the same entropy, nonce and personalization string it
//! produces the same byte stream, which is what makes seeded key generation
//! reproducible.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::core::error::{KeyError, KeyResult};

type HmacSha256 = Hmac<Sha256>;

/// Output size of the underlying hash (SHA-256), in bytes.
const OUT_LEN: usize = 32;

/// Minimum entropy accepted at instantiation (the SHA-256 HMAC strength).
pub const MIN_ENTROPY_BITS: usize = 192;

/// Deterministic random bit generator keyed by HMAC-SHA256.
///
/// Internal state is zeroized on drop.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct HmacDrbg {
    k: [u8; OUT_LEN],
    v: [u8; OUT_LEN],
}

impl HmacDrbg {
    /// Instantiates the generator.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InsufficientEntropy` if `entropy` is shorter than
    /// [`MIN_ENTROPY_BITS`].
    pub fn new(entropy: &[u8], nonce: &[u8], personalization: &[u8]) -> KeyResult<Self> {
        if entropy.len() * 8 < MIN_ENTROPY_BITS {
            return Err(KeyError::InsufficientEntropy {
                minimum_bits: MIN_ENTROPY_BITS,
                provided_bits: entropy.len() * 8,
            });
        }

        let mut drbg = Self {
            k: [0x00; OUT_LEN],
            v: [0x01; OUT_LEN],
        };
        drbg.update(Some(&[entropy, nonce, personalization][..]))?;
        Ok(drbg)
    }

    /// Fills `out` with the next bytes of the stream.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::CryptoError` if HMAC keying fails.
    pub fn fill_bytes(&mut self, out: &mut [u8]) -> KeyResult<()> {
        for chunk in out.chunks_mut(OUT_LEN) {
            self.v = self.hmac(&self.v, None, &[])?;
            chunk.copy_from_slice(&self.v[..chunk.len()]);
        }
        self.update(None)
    }

    /// The HMAC_DRBG update function. Provided data is absorbed as a single
    /// concatenated string; `None` runs only the first half.
    fn update(&mut self, provided: Option<&[&[u8]]>) -> KeyResult<()> {
        self.k = self.hmac(&self.v, Some(0x00), provided.unwrap_or(&[]))?;
        self.v = self.hmac(&self.v, None, &[])?;

        let Some(data) = provided else {
            return Ok(());
        };

        self.k = self.hmac(&self.v, Some(0x01), data)?;
        self.v = self.hmac(&self.v, None, &[])?;
        Ok(())
    }

    /// HMAC(K, V || separator || data).
    fn hmac(
        &self,
        v: &[u8; OUT_LEN],
        separator: Option<u8>,
        data: &[&[u8]],
    ) -> KeyResult<[u8; OUT_LEN]> {
        let mut mac =
            <HmacSha256 as Mac>::new_from_slice(&self.k).map_err(|_| KeyError::CryptoError)?;
        mac.update(v);
        if let Some(separator) = separator {
            mac.update(&[separator]);
        }
        for part in data {
            mac.update(part);
        }

        let mut out = [0u8; OUT_LEN];
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(out)
    }
}
