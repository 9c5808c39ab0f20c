//! Deterministic P-256 key pairs for graph database SEA authentication.
//!
//! A seed string (for example a hex private key, `"0x..."`) is the sole
//! entropy source for an HMAC-DRBG that produces a P-256 private scalar. The
//! resulting key pair is exposed in two shapes:
//!
//! - a JSON Web Key, [`JwkKeyPair`]
//! - an SEA key pair, [`SeaKeyPair`], where `pub`/`epub` are `"<x>.<y>"` and
//!   `priv`/`epriv` are `d`
//!
//! The same seed always yields the same keys.
//!
//! # Quick Start
//!
//! ```rust
//! use seapair::{derive_key_pair, derive_sea_pair};
//!
//! let seed = format!("0x{}", "11".repeat(32));
//!
//! let jwk = derive_key_pair(&seed).expect("seed has enough entropy");
//! let sea = derive_sea_pair(&seed).expect("seed has enough entropy");
//!
//! assert_eq!(sea.public_key(), format!("{}.{}", jwk.x(), jwk.y()));
//! assert_eq!(sea.public_key(), sea.epub());
//! assert_eq!(sea.private_key(), sea.epriv());
//! ```
//!
//! # Shared signing and encryption pair
//!
//! SEA normally uses separate pairs for signing (`pub`/`priv`) and
//! encryption (`epub`/`epriv`). Pairs from this crate use the one derived
//! pair for both roles.
//!
//! # Seeds
//!
//! Seeds must carry at least 192 bits once converted to entropy bytes (one
//! byte per character for ASCII). Shorter seeds, including the empty string,
//! fail with [`KeyError::InsufficientEntropy`]. Nothing else about the seed is
//! checked; supplying real entropy is the caller's job.
//!
//! # Features
//!
//! | Feature | Default | Provides |
//! |---------|---------|----------|
//! | `auth` | yes | [`authenticate`] over a [`GraphSession`] |
//! | `avatar` | yes | [`avatar_key`], [`generate_avatar`], [`mount_avatar`] |
//! | `prelude` | no | [`prelude`] re-exports and builders |
//!
//! # Security
//!
//! - Private scalars are zeroized on drop
//! - Debug output redacts private key material
//! - Constant-time comparison for records holding private keys
//! - No unsafe code

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::error::{KeyError, KeyResult};
pub use core::operations::derive::{derive_key_pair, derive_sea_pair, derive_secret_key};
pub use core::operations::drbg::MIN_ENTROPY_BITS;
pub use core::types::{JwkKeyPair, SeaKeyPair, SessionIdentity};

#[cfg(feature = "auth")]
pub use core::operations::auth::{
    authenticate, AuthAck, AuthCallback, AuthError, GraphSession, GraphUser, SessionAuthError,
};

#[cfg(feature = "avatar")]
pub use core::operations::avatar::{
    avatar_key, generate_avatar, mount_avatar, Avatar, AvatarError, AvatarGenerator, AvatarHost,
    AvatarImage, AvatarOptions, AvatarRequest, DrawStyle,
};
