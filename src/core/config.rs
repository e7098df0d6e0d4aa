//! Run configuration.
//!
//! A [`Config`] is built once from CLI flags and the environment, validated,
//! and then only read for the rest of the run.

use std::fmt;

use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{Result, ValidationError};

/// Sealing scope passed to kubeseal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Ciphertext is bound to the secret name and namespace.
    #[default]
    Strict,
    /// Ciphertext may be used under any name in the namespace.
    NamespaceWide,
    /// Ciphertext may be used anywhere in the cluster.
    ClusterWide,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::NamespaceWide => "namespace-wide",
            Self::ClusterWide => "cluster-wide",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which file flags kubeseal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagStyle {
    /// `--secret-file` / `--sealed-secret-file`
    #[default]
    Modern,
    /// `-f` / `-o`, for older kubeseal releases
    Legacy,
}

/// Inputs for a single sealing run.
#[derive(Clone)]
pub struct Config {
    /// Data key inside the secret.
    pub key: String,
    /// Plaintext value. Wiped from memory on drop.
    pub value: Zeroizing<String>,
    /// Namespace the secret is sealed for.
    pub namespace: String,
    /// Explicit secret name. `None` means a throwaway name is generated.
    pub secret_name: Option<String>,
    /// Namespace of the sealed-secrets controller.
    pub controller_namespace: String,
    /// Deployment name of the sealed-secrets controller.
    pub controller_name: String,
    pub scope: Scope,
    pub flag_style: FlagStyle,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .field("namespace", &self.namespace)
            .field("secret_name", &self.secret_name)
            .field("controller_namespace", &self.controller_namespace)
            .field("controller_name", &self.controller_name)
            .field("scope", &self.scope)
            .field("flag_style", &self.flag_style)
            .finish()
    }
}

impl Config {
    /// Create a config with the controller at its literal defaults.
    pub fn new(key: impl Into<String>, value: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Zeroizing::new(value.into()),
            namespace: namespace.into(),
            secret_name: None,
            controller_namespace: constants::DEFAULT_CONTROLLER_NAMESPACE.to_string(),
            controller_name: constants::DEFAULT_CONTROLLER_NAME.to_string(),
            scope: Scope::default(),
            flag_style: FlagStyle::default(),
        }
    }

    /// Resolve the controller coordinates: explicit value, then environment,
    /// then the literal default.
    pub fn with_controller<F>(
        mut self,
        namespace: Option<&str>,
        name: Option<&str>,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.controller_namespace = resolve(
            namespace,
            constants::ENV_CONTROLLER_NAMESPACE,
            constants::DEFAULT_CONTROLLER_NAMESPACE,
            &lookup,
        );
        self.controller_name = resolve(
            name,
            constants::ENV_CONTROLLER_NAME,
            constants::DEFAULT_CONTROLLER_NAME,
            &lookup,
        );
        debug!(
            controller_namespace = %self.controller_namespace,
            controller_name = %self.controller_name,
            "controller resolved"
        );
        self
    }

    /// Set an explicit secret name. Empty names count as unset.
    pub fn with_secret_name(mut self, name: Option<String>) -> Self {
        self.secret_name = name.filter(|n| !n.is_empty());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_flag_style(mut self, style: FlagStyle) -> Self {
        self.flag_style = style;
        self
    }

    /// Check that every required field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let required: [(&'static str, &str); 5] = [
            ("key", self.key.as_str()),
            ("value", self.value.as_str()),
            ("namespace", self.namespace.as_str()),
            ("controller namespace", self.controller_namespace.as_str()),
            ("controller name", self.controller_name.as_str()),
        ];

        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field).into());
            }
        }

        if matches!(self.secret_name.as_deref(), Some("")) {
            return Err(ValidationError::MissingField("secret name").into());
        }

        Ok(())
    }
}

/// Resolve one setting: explicit > environment > default.
///
/// An explicit value is taken as given, even when empty, so validation can
/// reject it. An empty environment variable counts as unset.
pub fn resolve<F>(explicit: Option<&str>, var: &str, default: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = explicit {
        return value.to_string();
    }
    if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
        return value;
    }
    default.to_string()
}

/// Environment lookup backed by the process environment.
pub fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}
