//! Binary discovery.
//!
//! Looks a collaborator up on `PATH` first, then in the usual install
//! directories. Nothing is cached; every call searches again.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result};

/// External programs the pipeline drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    Kubectl,
    Kubeseal,
}

impl Binary {
    /// Executable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kubectl => "kubectl",
            Self::Kubeseal => "kubeseal",
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where to look for binaries.
#[derive(Debug, Clone)]
pub struct Locator {
    /// Search path; `None` means the process `PATH`.
    path: Option<OsString>,
    fallback_dirs: Vec<PathBuf>,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            path: None,
            fallback_dirs: constants::FALLBACK_BIN_DIRS
                .iter()
                .map(PathBuf::from)
                .collect(),
        }
    }
}

impl Locator {
    /// Locator with an explicit search path and fallback list.
    pub fn new(path: Option<OsString>, fallback_dirs: Vec<PathBuf>) -> Self {
        Self {
            path,
            fallback_dirs,
        }
    }

    /// Find `binary`.
    ///
    /// # Errors
    ///
    /// Returns `Error::BinaryNotFound` if neither the search path nor any
    /// fallback directory has it.
    pub fn locate(&self, binary: Binary) -> Result<PathBuf> {
        let name = binary.name();

        let found = match &self.path {
            Some(path) => which::which_in(name, Some(path), current_dir()),
            None => which::which(name),
        };

        if let Ok(path) = found {
            debug!(binary = name, path = %path.display(), "found on PATH");
            return Ok(path);
        }

        for dir in &self.fallback_dirs {
            let candidate = dir.join(name);
            if candidate.exists() {
                debug!(binary = name, path = %candidate.display(), "found in fallback dir");
                return Ok(candidate);
            }
        }

        Err(Error::BinaryNotFound(name.to_string()))
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf())
}
