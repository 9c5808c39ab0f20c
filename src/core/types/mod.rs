//! Key pair record types.
//!
//! - [`JwkKeyPair`] - P-256 key pair as a JSON Web Key (`kty`, `crv`, `x`, `y`, `d`)
//! - [`SeaKeyPair`] - SEA authentication pair (`pub`, `priv`, `epub`, `epriv`)
//! - [`SessionIdentity`] - Public identifiers of a session (`pub`, `epub`)

mod identity;
mod jwk;
mod sea;

pub use identity::SessionIdentity;
pub use jwk::{JwkKeyPair, CRV_P256, KTY_EC};
pub use sea::SeaKeyPair;
