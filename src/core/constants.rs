//! Constants used throughout kubeseal-encrypt.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Unsealed manifest file name inside the scratch directory.
pub const UNSEALED_FILE: &str = "unsealed.yml";

/// Sealed manifest file name inside the scratch directory.
pub const SEALED_FILE: &str = "sealed.yml";

/// Prefix for per-run scratch directories.
pub const SCRATCH_PREFIX: &str = "kubeseal-";

/// Prefix for generated throwaway secret names (`test-1a2b3c4d`).
pub const TEST_NAME_PREFIX: &str = "test-";

/// Environment variable overriding the controller namespace.
pub const ENV_CONTROLLER_NAMESPACE: &str = "SEALED_SECRETS_CONTROLLER_NAMESPACE";

/// Environment variable overriding the controller name.
pub const ENV_CONTROLLER_NAME: &str = "SEALED_SECRETS_CONTROLLER_NAME";

/// Default sealed-secrets controller namespace.
pub const DEFAULT_CONTROLLER_NAMESPACE: &str = "kube-system";

/// Default sealed-secrets controller deployment name.
pub const DEFAULT_CONTROLLER_NAME: &str = "sealed-secrets-controller";

/// Log filter environment variable.
pub const LOG_ENV: &str = "KUBESEAL_ENCRYPT_LOG";

/// Install locations probed when a binary is not on PATH, in order.
pub const FALLBACK_BIN_DIRS: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin", "/usr/bin", "/bin"];

/// How many times the live secret is read back before giving up.
pub const POLL_ATTEMPTS: u32 = 10;

/// Pause between read-back attempts.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// API version of the SealedSecret custom resource.
pub const SEALED_SECRET_API_VERSION: &str = "bitnami.com/v1alpha1";
