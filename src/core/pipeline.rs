//! The sealing pipeline.
//!
//! ```text
//! validate config -> preflight -> scratch dir -> confirm -> unsealed.yml
//!   -> kubeseal -> extract -> [live validation] -> outcome
//! ```
//!
//! Every step aborts the run on error. The scratch directory and any test
//! objects in the cluster are released on all exit paths.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::{Config, Scope};
use crate::core::confirm::Confirm;
use crate::core::kubeseal::{self, SealRequest};
use crate::core::kubectl::Kubectl;
use crate::core::locate::{Binary, Locator};
use crate::core::process::CommandRunner;
use crate::core::scratch::ScratchDir;
use crate::core::validate::{PollPolicy, Probe, Validator};
use crate::core::{constants, extract, manifest};
use crate::error::{Error, Result};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealOutcome {
    pub key: String,
    pub namespace: String,
    pub secret_name: String,
    pub controller_namespace: String,
    pub controller_name: String,
    pub scope: Scope,
    pub encrypted_value: String,
    /// Whether the value was round-tripped through the cluster.
    pub validated: bool,
}

/// Drives one sealing run.
pub struct Encryptor<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    locator: Locator,
    policy: PollPolicy,
    validation: bool,
    scratch_parent: Option<PathBuf>,
}

impl<'a> Encryptor<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            locator: Locator::default(),
            policy: PollPolicy::default(),
            validation: true,
            scratch_parent: None,
        }
    }

    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable the live validation step.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validation = enabled;
        self
    }

    /// Create scratch directories under `parent` instead of the system temp dir.
    pub fn with_scratch_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(parent.into());
        self
    }

    /// Whether this run will apply test objects to the cluster.
    ///
    /// Validation deletes the secret it creates, so it only runs against a
    /// generated throwaway name.
    pub fn will_validate(&self) -> bool {
        self.validation && self.config.secret_name.is_none()
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// Any stage's error, unchanged. See [`crate::error::Error`].
    pub fn execute(&self, confirm: &mut dyn Confirm) -> Result<SealOutcome> {
        let config = self.config;
        config.validate()?;

        let kubectl = Kubectl::new(self.runner, self.locator.locate(Binary::Kubectl)?);
        kubectl.check_namespace(&config.namespace)?;
        kubectl.check_controller(&config.controller_name, &config.controller_namespace)?;

        let scratch = match &self.scratch_parent {
            Some(parent) => ScratchDir::create_in(parent)?,
            None => ScratchDir::create()?,
        };

        if !confirm.confirm("Continue?")? {
            return Err(Error::Cancelled);
        }

        let secret_name = config
            .secret_name
            .clone()
            .unwrap_or_else(generate_test_name);
        debug!(secret_name = %secret_name, "using secret name");

        let unsealed = scratch.unsealed_path();
        manifest::write_unsealed(&unsealed, config, &secret_name)?;
        let sealed = scratch.sealed_path();

        let kubeseal_path = self.locator.locate(Binary::Kubeseal)?;
        kubeseal::seal(
            self.runner,
            &kubeseal_path,
            &SealRequest {
                unsealed: &unsealed,
                sealed: &sealed,
                controller_namespace: &config.controller_namespace,
                controller_name: &config.controller_name,
                scope: config.scope,
                flag_style: config.flag_style,
            },
        )?;

        let encrypted_value = extract::extract_from_file(&sealed, &config.key)?;

        let validated = if self.will_validate() {
            let attempts = Validator::new(&kubectl, self.policy).validate(&Probe {
                secret_name: &secret_name,
                namespace: &config.namespace,
                key: &config.key,
                encrypted: &encrypted_value,
                expected: config.value.as_str(),
            })?;
            debug!(attempts, "validated");
            true
        } else {
            debug!("validation skipped");
            false
        };

        info!(key = %config.key, namespace = %config.namespace, validated, "sealed");

        Ok(SealOutcome {
            key: config.key.clone(),
            namespace: config.namespace.clone(),
            secret_name,
            controller_namespace: config.controller_namespace.clone(),
            controller_name: config.controller_name.clone(),
            scope: config.scope,
            encrypted_value,
            validated,
        })
    }
}

/// Throwaway secret name: `test-` plus eight hex characters.
pub fn generate_test_name() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}{}", constants::TEST_NAME_PREFIX, &id[..8])
}
