//! Test vector types for seed derivation tests.
//!
//! Expected values were produced by the reference HMAC-DRBG key generation
//! the SEA key format was originally defined against.

// Some fields are only read for failing or passing vectors
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for seed derivation.
#[derive(Debug, Deserialize)]
pub struct DeriveTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Seed string, used verbatim
    pub seed: String,
    /// Hex-encoded 32-byte private scalar (null for fail tests)
    #[serde(rename = "secret-key")]
    pub secret_key: Option<String>,
    /// Expected JWK `x` (null for fail tests)
    pub x: Option<String>,
    /// Expected JWK `y` (null for fail tests)
    pub y: Option<String>,
    /// Expected JWK `d` (null for fail tests)
    pub d: Option<String>,
    /// Expected SEA `pub` (null for fail tests)
    #[serde(rename = "sea-pub")]
    pub sea_pub: Option<String>,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
