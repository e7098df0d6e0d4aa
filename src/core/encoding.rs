//! Base64 for Kubernetes secret data.
//!
//! Standard alphabet, padded, never line-wrapped.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{ClusterError, Result};

/// Encode a plaintext value for a secret `data` entry.
pub fn encode(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Decode a `data` entry read back from the cluster.
///
/// Surrounding whitespace (such as a trailing newline from the cluster
/// client) is ignored.
///
/// # Errors
///
/// Returns `ClusterError::Decode` if the input is not valid base64 or does
/// not decode to UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ClusterError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClusterError::Decode(e.to_string()).into())
}
