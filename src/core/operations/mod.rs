//! Key derivation and the operations built on it.
//!
//! - [`drbg`] - HMAC-DRBG seeded from the caller's entropy
//! - [`derive`] - Seed to P-256 key pair, JWK and SEA encodings
//! - [`auth`] - Session login with a derived SEA pair (`auth` feature)
//! - [`avatar`] - Avatar keys and image placement (`avatar` feature)

pub mod derive;
pub mod drbg;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "avatar")]
pub mod avatar;
