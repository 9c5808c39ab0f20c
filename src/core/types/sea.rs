//! SeaKeyPair - authentication key pair in SEA format.
//!
//! Format: `{"pub":"<x>.<y>","priv":d,"epub":"<x>.<y>","epriv":d}`
//!
//! SEA normally carries two independent pairs, one for signing (`pub`/`priv`)
//! and one for encryption (`epub`/`epriv`). Pairs built here reuse the single
//! derived P-256 pair for both roles, so `pub == epub` and `priv == epriv`.
//! Downstream consumers rely on that, so it must stay this way unless a
//! second pair is derived from the same seed as a new, separate format.

use core::fmt::{self, Debug};

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::core::encoding::{join_public, split_public};
use crate::core::error::KeyResult;
use crate::core::types::{JwkKeyPair, SessionIdentity};

/// A key pair in the graph database's SEA authentication format.
///
/// # Security
///
/// - `priv`/`epriv` are zeroized on drop
/// - Debug output redacts them
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize, Serialize, Deserialize)]
#[zeroize(drop)]
pub struct SeaKeyPair {
    #[serde(rename = "pub")]
    public: String,
    #[serde(rename = "priv")]
    private: String,
    epub: String,
    epriv: String,
}

impl SeaKeyPair {
    /// Repackages a JWK key pair: `pub = epub = x.y`, `priv = epriv = d`.
    #[must_use]
    pub fn from_jwk(jwk: &JwkKeyPair) -> Self {
        let public = join_public(jwk.x(), jwk.y());
        Self {
            epub: public.clone(),
            public,
            private: jwk.d().to_string(),
            epriv: jwk.d().to_string(),
        }
    }

    /// Signing public key, `<x>.<y>`.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public
    }

    /// Signing private key (base64url scalar).
    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private
    }

    /// Encryption public key. Same value as [`Self::public_key`].
    #[must_use]
    pub fn epub(&self) -> &str {
        &self.epub
    }

    /// Encryption private key. Same value as [`Self::private_key`].
    #[must_use]
    pub fn epriv(&self) -> &str {
        &self.epriv
    }

    /// Splits the public key into its base64url `(x, y)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidFormat` if `pub` is not `<x>.<y>`.
    pub fn public_coordinates(&self) -> KeyResult<(&str, &str)> {
        split_public(&self.public)
    }

    /// The public identifiers of this pair.
    #[must_use]
    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity::new(self.public.clone(), self.epub.clone())
    }
}

impl From<&JwkKeyPair> for SeaKeyPair {
    fn from(jwk: &JwkKeyPair) -> Self {
        Self::from_jwk(jwk)
    }
}

impl From<JwkKeyPair> for SeaKeyPair {
    fn from(jwk: JwkKeyPair) -> Self {
        Self::from_jwk(&jwk)
    }
}

impl Debug for SeaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeaKeyPair")
            .field("pub", &self.public)
            .field("priv", &"[REDACTED]")
            .field("epub", &self.epub)
            .field("epriv", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for SeaKeyPair {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;

        let public_eq = self.public == other.public && self.epub == other.epub;
        let private_eq: bool = self.private.as_bytes().ct_eq(other.private.as_bytes()).into();
        let epriv_eq: bool = self.epriv.as_bytes().ct_eq(other.epriv.as_bytes()).into();
        public_eq & private_eq & epriv_eq
    }
}

impl Eq for SeaKeyPair {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::KeyError;

    const JWK_JSON: &str = r#"{
        "kty": "EC",
        "crv": "P-256",
        "x": "Zfw5HNaidqAdbwCFIiMQ5_gjeWU6vi6csS5Jde3fJpk",
        "y": "BXqPOD4cBWUDiZGBZtErJImgEPPKQnrOVKbUeNxB6bA",
        "d": "qBEdIQt3oMSNWkNXUkmq_E8bn8z-J3vVMItB17r7kp8"
    }"#;

    fn test_jwk() -> KeyResult<JwkKeyPair> {
        serde_json::from_str(JWK_JSON).map_err(|_| KeyError::InvalidFormat)
    }

    #[test]
    fn test_from_jwk() -> KeyResult<()> {
        let jwk = test_jwk()?;
        let pair = SeaKeyPair::from(&jwk);

        assert_eq!(pair.public_key(), format!("{}.{}", jwk.x(), jwk.y()));
        assert_eq!(pair.public_key(), pair.epub());
        assert_eq!(pair.private_key(), jwk.d());
        assert_eq!(pair.private_key(), pair.epriv());
        Ok(())
    }

    #[test]
    fn test_public_coordinates() -> KeyResult<()> {
        let jwk = test_jwk()?;
        let pair = SeaKeyPair::from(&jwk);
        assert_eq!(pair.public_coordinates()?, (jwk.x(), jwk.y()));
        Ok(())
    }

    #[test]
    fn test_identity() -> KeyResult<()> {
        let pair = SeaKeyPair::from(test_jwk()?);
        let identity = pair.identity();
        assert_eq!(identity.pub_key(), pair.public_key());
        assert_eq!(identity.epub(), pair.epub());
        Ok(())
    }

    #[test]
    fn test_serialize_field_names() -> KeyResult<()> {
        let pair = SeaKeyPair::from(test_jwk()?);
        let json = serde_json::to_value(&pair).map_err(|_| KeyError::InvalidFormat)?;
        assert_eq!(json["pub"], pair.public_key());
        assert_eq!(json["priv"], pair.private_key());
        assert_eq!(json["epub"], pair.epub());
        assert_eq!(json["epriv"], pair.epriv());
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
        Ok(())
    }

    #[test]
    fn test_deserialize() -> KeyResult<()> {
        let pair = SeaKeyPair::from(test_jwk()?);
        let json = serde_json::to_string(&pair).map_err(|_| KeyError::InvalidFormat)?;
        let parsed: SeaKeyPair = serde_json::from_str(&json).map_err(|_| KeyError::InvalidFormat)?;
        assert_eq!(parsed, pair);
        Ok(())
    }

    #[test]
    fn test_debug_redacts_private() -> KeyResult<()> {
        let pair = SeaKeyPair::from(test_jwk()?);
        let debug_str = format!("{pair:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(debug_str.contains(pair.public_key()));
        assert!(!debug_str.contains(pair.private_key()));
        Ok(())
    }
}
