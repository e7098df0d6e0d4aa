//! Per-run scratch directory.
//!
//! Holds `unsealed.yml` and `sealed.yml`. The directory is removed when the
//! [`ScratchDir`] is dropped, whichever way the run ends.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::core::constants;
use crate::error::{Error, Result};

/// Temporary directory owned by one run.
#[derive(Debug)]
pub struct ScratchDir {
    dir: Option<TempDir>,
}

impl ScratchDir {
    /// Create a fresh directory under the system temp dir.
    ///
    /// # Errors
    ///
    /// Returns `Error::TempDir` if the directory cannot be created.
    pub fn create() -> Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Create a fresh directory under `parent`.
    pub fn create_in(parent: impl AsRef<Path>) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(constants::SCRATCH_PREFIX)
            .tempdir_in(parent)
            .map_err(Error::TempDir)?;
        debug!(path = %dir.path().display(), "scratch directory created");
        Ok(Self { dir: Some(dir) })
    }

    pub fn path(&self) -> &Path {
        match &self.dir {
            Some(dir) => dir.path(),
            None => Path::new(""),
        }
    }

    /// Path of the unsealed manifest.
    pub fn unsealed_path(&self) -> PathBuf {
        self.path().join(constants::UNSEALED_FILE)
    }

    /// Path of the sealed manifest.
    pub fn sealed_path(&self) -> PathBuf {
        self.path().join(constants::SEALED_FILE)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            match dir.close() {
                Ok(()) => debug!(path = %path.display(), "scratch directory removed"),
                Err(e) => warn!(path = %path.display(), error = %e, "failed to remove scratch directory"),
            }
        }
    }
}
