//! Encrypted value extraction.
//!
//! The sealed manifest is scanned line by line: the first line containing
//! `"<key>: "` wins and everything after the first `": "` on it is the value.
//! This is not a YAML parser. A key that is a suffix of another key (`token`
//! vs `api-token`) or a quoted/multi-line value will not be handled.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, SealError};

/// Pull the encrypted value for `key` out of manifest text.
///
/// # Errors
///
/// Returns `SealError::ValueNotFound` if no line matches.
pub fn extract_value(manifest: &str, key: &str) -> Result<String> {
    let needle = format!("{}: ", key);

    manifest
        .lines()
        .filter(|line| line.contains(&needle))
        .find_map(|line| line.split_once(": ").map(|(_, value)| value.trim().to_string()))
        .ok_or_else(|| SealError::ValueNotFound(key.to_string()).into())
}

/// Read the sealed manifest at `path` and extract the value for `key`.
pub fn extract_from_file(path: &Path, key: &str) -> Result<String> {
    let manifest = std::fs::read_to_string(path)?;
    let value = extract_value(&manifest, key)?;
    debug!(key, value_len = value.len(), "encrypted value extracted");
    Ok(value)
}
