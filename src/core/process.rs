//! External command execution.
//!
//! `kubectl` and `kubeseal` are collaborators reached through the
//! [`CommandRunner`] trait: run a program, capture combined output, and let
//! the caller map a non-zero exit to its own typed error.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::error::{Error, Result};

/// Result of a finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Stdout followed by stderr, lossily decoded.
    pub combined: String,
    /// Stdout only. Used where the value itself is read from the output.
    pub stdout: String,
}

impl CommandOutput {
    /// Convert a failed run into the caller's error, passing the combined output.
    pub fn ok_or_else<F>(self, err: F) -> Result<Self>
    where
        F: FnOnce(String) -> Error,
    {
        if self.success {
            Ok(self)
        } else {
            Err(err(self.combined))
        }
    }
}

/// Runs external programs.
pub trait CommandRunner {
    /// Run `program` with `args`, optionally feeding `stdin`.
    ///
    /// A non-zero exit is not an error at this level; only a failure to
    /// start or wait on the process is.
    fn run(&self, program: &Path, args: &[&str], stdin: Option<&[u8]>) -> Result<CommandOutput>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str], stdin: Option<&[u8]>) -> Result<CommandOutput> {
        trace!(program = %program.display(), ?args, "running");

        let spawn_err = |source| Error::Spawn {
            program: program.display().to_string(),
            source,
        };

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(spawn_err)?;

        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            pipe.write_all(input).map_err(spawn_err)?;
            // pipe dropped here so the child sees EOF
        }

        let output = child.wait_with_output().map_err(spawn_err)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{}{}", stdout, stderr);

        trace!(
            program = %program.display(),
            status = ?output.status.code(),
            output_len = combined.len(),
            "finished"
        );

        Ok(CommandOutput {
            success: output.status.success(),
            combined,
            stdout,
        })
    }
}
