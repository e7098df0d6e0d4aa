//! Error types for kubeseal-encrypt.
//!
//! Every failure in the sealing pipeline maps to one variant here. Errors are
//! grouped by the stage that produces them so `main` can attach hints.

use thiserror::Error;

/// Top-level error for all operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Seal(#[from] SealError),

    #[error("{0} not found in PATH or standard install locations")]
    BinaryNotFound(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create scratch directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Errors reported by the cluster client.
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("namespace {namespace} not found or not accessible\n{output}")]
    NamespaceNotFound { namespace: String, output: String },

    #[error("sealed-secrets controller {name} not found in namespace {namespace}\n{output}")]
    ControllerNotFound {
        name: String,
        namespace: String,
        output: String,
    },

    #[error("failed to apply test sealed secret\n{0}")]
    Apply(String),

    #[error("timed out after {attempts} attempts waiting for secret {name} to match")]
    ValidationTimeout { name: String, attempts: u32 },

    #[error("failed to decode secret value: {0}")]
    Decode(String),
}

/// Errors from sealing and reading back the sealed manifest.
#[derive(Error, Debug)]
pub enum SealError {
    #[error("kubeseal failed\n{0}")]
    Failed(String),

    #[error("encrypted value for key {0} not found in sealed secret")]
    ValueNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
