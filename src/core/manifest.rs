//! Secret manifest rendering.
//!
//! Manifests are fixed templates, never built through a YAML serializer.

use std::fs;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::{constants, encoding};
use crate::error::{Error, Result};

/// Render the plain `Secret` that kubeseal will encrypt.
pub fn render_unsealed(config: &Config, secret_name: &str) -> Zeroizing<String> {
    let encoded = Zeroizing::new(encoding::encode(&config.value));
    Zeroizing::new(format!(
        "apiVersion: v1
kind: Secret
metadata:
  name: {name}
  namespace: {namespace}
type: Opaque
data:
  {key}: {value}
",
        name = secret_name,
        namespace = config.namespace,
        key = config.key,
        value = encoded.trim(),
    ))
}

/// Render a `SealedSecret` carrying one encrypted entry.
pub fn render_sealed(secret_name: &str, namespace: &str, key: &str, encrypted: &str) -> String {
    format!(
        "apiVersion: {api}
kind: SealedSecret
metadata:
  name: {name}
  namespace: {namespace}
spec:
  encryptedData:
    {key}: {encrypted}
",
        api = constants::SEALED_SECRET_API_VERSION,
        name = secret_name,
        namespace = namespace,
        key = key,
        encrypted = encrypted,
    )
}

/// Write the unsealed manifest to `path`.
///
/// The file is created with mode 0600 on Unix.
///
/// # Errors
///
/// Returns `Error::ManifestWrite` if the file cannot be written.
pub fn write_unsealed(path: &Path, config: &Config, secret_name: &str) -> Result<()> {
    let manifest = render_unsealed(config, secret_name);

    write_private(path, manifest.as_bytes()).map_err(|source| Error::ManifestWrite {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "unsealed manifest written");
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}
