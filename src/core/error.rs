//! Error types for key derivation and encoding.
//!
//! [`KeyError`] covers everything the derivation pipeline can report. The
//! collaborator-facing operations (login, avatar generation) wrap it in their
//! own generic error types so the external error value passes through
//! untouched.

use thiserror::Error;

/// Errors that can occur while deriving or encoding key pairs.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The seed does not carry enough entropy for the DRBG to be instantiated.
    ///
    /// This is the generation failure callers see for empty or short seeds.
    #[error("Not enough entropy: minimum is {minimum_bits} bits, got {provided_bits}")]
    InsufficientEntropy {
        /// Required entropy, in bits.
        minimum_bits: usize,
        /// Entropy supplied by the seed, in bits.
        provided_bits: usize,
    },

    /// The curve library refused the generated private scalar.
    #[error("Key generation failed")]
    KeyGeneration,

    /// The key material is invalid (wrong size, not on the curve, etc.).
    #[error("Invalid key material")]
    InvalidKey,

    /// The SEA public key string is not of the form `<x>.<y>`.
    #[error("Invalid SEA public key format")]
    InvalidFormat,

    /// Base64url decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Generic cryptographic error.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for key operations.
pub type KeyResult<T> = Result<T, KeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KeyError::InsufficientEntropy {
            minimum_bits: 192,
            provided_bits: 64,
        };
        assert_eq!(
            err.to_string(),
            "Not enough entropy: minimum is 192 bits, got 64"
        );

        let err = KeyError::KeyGeneration;
        assert_eq!(err.to_string(), "Key generation failed");

        let err = KeyError::InvalidKey;
        assert_eq!(err.to_string(), "Invalid key material");

        let err = KeyError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid SEA public key format");

        let err = KeyError::CryptoError;
        assert_eq!(err.to_string(), "Cryptographic operation failed");
    }

    #[test]
    fn test_error_debug() {
        let err = KeyError::KeyGeneration;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("KeyGeneration"));
    }
}
