//! Ergonomic layer for key derivation.
//!
//! The prelude module re-exports the everyday types and functions and
//! provides builders for option structs.
//!
//! # Usage
//!
//! ```rust
//! use seapair::prelude::*;
//!
//! let pair = derive_sea_pair(&format!("0x{}", "11".repeat(32))).expect("seed is long enough");
//! assert_eq!(pair.public_key(), pair.epub());
//! ```

mod builders;

// Re-export core types for convenience
pub use crate::core::error::{KeyError, KeyResult};
pub use crate::core::operations::derive::{derive_key_pair, derive_sea_pair};
pub use crate::core::types::{JwkKeyPair, SeaKeyPair, SessionIdentity};

#[cfg(feature = "auth")]
pub use crate::core::operations::auth::{authenticate, AuthError, GraphSession, GraphUser};

#[cfg(feature = "avatar")]
pub use crate::core::operations::avatar::{
    avatar_key, generate_avatar, mount_avatar, AvatarGenerator, AvatarHost, AvatarOptions,
    DrawStyle,
};

#[cfg(feature = "avatar")]
pub use builders::AvatarOptionsBuilder;
