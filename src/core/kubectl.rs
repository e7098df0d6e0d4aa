//! Cluster client invocation.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::core::process::CommandRunner;
use crate::error::{ClusterError, Result};

/// Thin wrapper over the `kubectl` binary.
pub struct Kubectl<'a> {
    runner: &'a dyn CommandRunner,
    program: PathBuf,
}

impl<'a> Kubectl<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Confirm `namespace` exists and is readable.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::NamespaceNotFound` with kubectl's output.
    pub fn check_namespace(&self, namespace: &str) -> Result<()> {
        self.runner
            .run(&self.program, &["get", "namespace", namespace], None)?
            .ok_or_else(|output| {
                ClusterError::NamespaceNotFound {
                    namespace: namespace.to_string(),
                    output,
                }
                .into()
            })?;
        debug!(namespace, "namespace found");
        Ok(())
    }

    /// Confirm the controller deployment exists.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::ControllerNotFound` with kubectl's output.
    pub fn check_controller(&self, name: &str, namespace: &str) -> Result<()> {
        self.runner
            .run(
                &self.program,
                &["get", "deployment", name, "-n", namespace],
                None,
            )?
            .ok_or_else(|output| {
                ClusterError::ControllerNotFound {
                    name: name.to_string(),
                    namespace: namespace.to_string(),
                    output,
                }
                .into()
            })?;
        debug!(name, namespace, "controller found");
        Ok(())
    }

    /// `kubectl apply -f -` with `manifest` on stdin.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::Apply` with kubectl's output.
    pub fn apply(&self, manifest: &str) -> Result<()> {
        self.runner
            .run(&self.program, &["apply", "-f", "-"], Some(manifest.as_bytes()))?
            .ok_or_else(|output| ClusterError::Apply(output).into())?;
        Ok(())
    }

    /// Read the raw (base64) value of `key` from secret `name`.
    ///
    /// Returns `None` while the secret or the key does not exist yet.
    pub fn secret_data(&self, name: &str, namespace: &str, key: &str) -> Result<Option<String>> {
        let jsonpath = jsonpath_for(key);
        let output = self.runner.run(
            &self.program,
            &["get", "secret", name, "-n", namespace, "-o", jsonpath.as_str()],
            None,
        )?;

        if !output.success {
            trace!(name, output = %output.combined.trim(), "secret not readable yet");
            return Ok(None);
        }

        let value = output.stdout.trim();
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(value.to_string()))
        }
    }

    /// Delete one object. Returns whether kubectl reported success.
    pub fn delete(&self, kind: &str, name: &str, namespace: &str) -> Result<bool> {
        let output = self
            .runner
            .run(&self.program, &["delete", kind, name, "-n", namespace], None)?;
        Ok(output.success)
    }
}

/// jsonpath expression selecting `.data.<key>`, with dots in the key escaped.
pub fn jsonpath_for(key: &str) -> String {
    format!("jsonpath={{.data.{}}}", key.replace('.', "\\."))
}
