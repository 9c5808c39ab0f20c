//! SessionIdentity - public identifiers of an authenticated session.

use serde::{Deserialize, Serialize};

/// The public half of an SEA key pair, as reported by a logged-in session
/// and published to its shared store.
///
/// Serializes as `{"pub": .., "epub": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(rename = "pub")]
    pub_key: String,
    epub: String,
}

impl SessionIdentity {
    /// Creates an identity from a signing and an encryption public key.
    #[must_use]
    pub fn new(pub_key: impl Into<String>, epub: impl Into<String>) -> Self {
        Self {
            pub_key: pub_key.into(),
            epub: epub.into(),
        }
    }

    /// Signing public key.
    #[must_use]
    pub fn pub_key(&self) -> &str {
        &self.pub_key
    }

    /// Encryption public key.
    #[must_use]
    pub fn epub(&self) -> &str {
        &self.epub
    }
}
