//! Sealing client invocation.

use std::path::Path;

use tracing::{debug, info};

use crate::core::config::{FlagStyle, Scope};
use crate::core::process::CommandRunner;
use crate::error::{Result, SealError};

/// Everything kubeseal needs for one run.
#[derive(Debug, Clone, Copy)]
pub struct SealRequest<'a> {
    pub unsealed: &'a Path,
    pub sealed: &'a Path,
    pub controller_namespace: &'a str,
    pub controller_name: &'a str,
    pub scope: Scope,
    pub flag_style: FlagStyle,
}

impl SealRequest<'_> {
    /// Command-line arguments for kubeseal.
    pub fn args(&self) -> Vec<String> {
        let (input_flag, output_flag) = match self.flag_style {
            FlagStyle::Modern => ("--secret-file", "--sealed-secret-file"),
            FlagStyle::Legacy => ("-f", "-o"),
        };

        vec![
            "--format".to_string(),
            "yaml".to_string(),
            "--scope".to_string(),
            self.scope.as_str().to_string(),
            "--controller-namespace".to_string(),
            self.controller_namespace.to_string(),
            "--controller-name".to_string(),
            self.controller_name.to_string(),
            input_flag.to_string(),
            self.unsealed.display().to_string(),
            output_flag.to_string(),
            self.sealed.display().to_string(),
        ]
    }
}

/// Run kubeseal, producing the sealed manifest at `request.sealed`.
///
/// # Errors
///
/// Returns `SealError::Failed` with kubeseal's combined output on a
/// non-zero exit.
pub fn seal(runner: &dyn CommandRunner, kubeseal: &Path, request: &SealRequest<'_>) -> Result<()> {
    let args = request.args();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    info!(
        controller = %format!("{}/{}", request.controller_namespace, request.controller_name),
        scope = %request.scope,
        "sealing secret"
    );

    runner
        .run(kubeseal, &args, None)?
        .ok_or_else(|output| SealError::Failed(output).into())?;

    debug!(path = %request.sealed.display(), "sealed manifest written");
    Ok(())
}
