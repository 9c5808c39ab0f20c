//! Core types and operations.
//!
//! - [`error`] - Error types for key operations
//! - [`encoding`] - base64url integers and SEA public key strings
//! - [`types`] - Key pair records (JWK, SEA, session identity)
//! - [`operations`] - Derivation, login and avatar operations

pub mod encoding;
pub mod error;
pub mod operations;
pub mod types;

// Re-export commonly used items
pub use error::{KeyError, KeyResult};
