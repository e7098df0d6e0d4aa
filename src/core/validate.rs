//! Live round-trip validation.
//!
//! Applies a `SealedSecret` built from the extracted value, waits for the
//! controller to unseal it, and compares the decoded value with the
//! plaintext. The test objects are deleted afterwards no matter what.
//!
//! ```text
//! Applying -> Polling -> Verified | TimedOut -> Cleanup
//! ```

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::kubectl::Kubectl;
use crate::core::{constants, encoding, manifest};
use crate::error::{ClusterError, Result};

/// How often and how long to read the live secret back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            attempts: constants::POLL_ATTEMPTS,
            interval: constants::POLL_INTERVAL,
        }
    }
}

/// Validation phases, logged as they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Applying,
    Polling,
    Verified,
    TimedOut,
    Cleanup,
}

/// What a test secret looks like.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    pub secret_name: &'a str,
    pub namespace: &'a str,
    pub key: &'a str,
    /// Ciphertext extracted from the sealed manifest.
    pub encrypted: &'a str,
    /// Plaintext the controller should produce.
    pub expected: &'a str,
}

/// Round-trips a sealed value through the cluster.
pub struct Validator<'a> {
    kubectl: &'a Kubectl<'a>,
    policy: PollPolicy,
}

impl<'a> Validator<'a> {
    pub fn new(kubectl: &'a Kubectl<'a>, policy: PollPolicy) -> Self {
        Self { kubectl, policy }
    }

    /// Apply, poll, and clean up.
    ///
    /// Returns the number of read-back attempts it took to verify.
    ///
    /// # Errors
    ///
    /// - `ClusterError::Apply` if the sealed secret is rejected
    /// - `ClusterError::Decode` if the live value is not valid base64
    /// - `ClusterError::ValidationTimeout` if no attempt matched
    pub fn validate(&self, probe: &Probe<'_>) -> Result<u32> {
        let _cleanup = Cleanup {
            kubectl: self.kubectl,
            name: probe.secret_name,
            namespace: probe.namespace,
        };

        debug!(phase = ?Phase::Applying, name = probe.secret_name);
        let sealed = manifest::render_sealed(
            probe.secret_name,
            probe.namespace,
            probe.key,
            probe.encrypted,
        );
        self.kubectl.apply(&sealed)?;

        debug!(phase = ?Phase::Polling, attempts = self.policy.attempts);
        for attempt in 1..=self.policy.attempts {
            if let Some(raw) =
                self.kubectl
                    .secret_data(probe.secret_name, probe.namespace, probe.key)?
            {
                let decoded = Zeroizing::new(encoding::decode(&raw)?);
                if decoded.as_str() == probe.expected {
                    info!(phase = ?Phase::Verified, attempt, "secret validated");
                    return Ok(attempt);
                }
                debug!(attempt, "live value does not match yet");
            } else {
                debug!(attempt, "secret not created yet");
            }

            if attempt < self.policy.attempts {
                thread::sleep(self.policy.interval);
            }
        }

        warn!(phase = ?Phase::TimedOut, name = probe.secret_name);
        Err(ClusterError::ValidationTimeout {
            name: probe.secret_name.to_string(),
            attempts: self.policy.attempts,
        }
        .into())
    }
}

/// Deletes the test objects when dropped.
struct Cleanup<'a> {
    kubectl: &'a Kubectl<'a>,
    name: &'a str,
    namespace: &'a str,
}

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        debug!(phase = ?Phase::Cleanup, name = self.name);
        for kind in ["sealedsecret", "secret"] {
            match self.kubectl.delete(kind, self.name, self.namespace) {
                Ok(true) => debug!(kind, name = self.name, "deleted"),
                Ok(false) => warn!(kind, name = self.name, "delete reported failure"),
                Err(e) => warn!(kind, name = self.name, error = %e, "delete failed"),
            }
        }
    }
}
