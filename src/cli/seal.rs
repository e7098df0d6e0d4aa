//! Seal command.
//!
//! Builds the run configuration from flags and the environment, drives the
//! pipeline, and prints the sealed value.

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::TerminalConfirm;
use crate::cli::SealArgs;
use crate::core::config::{self, Config, FlagStyle};
use crate::core::confirm::{AssumeYes, Confirm};
use crate::core::pipeline::{Encryptor, SealOutcome};
use crate::core::process::SystemRunner;
use crate::error::Result;

/// Build a [`Config`] from parsed flags.
pub fn config_from_args(args: &SealArgs) -> Config {
    let flag_style = if args.legacy_flags {
        FlagStyle::Legacy
    } else {
        FlagStyle::Modern
    };

    Config::new(
        args.key.clone().unwrap_or_default(),
        args.value.clone().unwrap_or_default(),
        args.namespace.clone().unwrap_or_default(),
    )
    .with_secret_name(args.secret_name.clone())
    .with_controller(
        args.controller_namespace.as_deref(),
        args.controller_name.as_deref(),
        config::process_env,
    )
    .with_scope(args.scope.into())
    .with_flag_style(flag_style)
}

/// Run a sealing pass.
pub fn execute(args: SealArgs) -> Result<()> {
    let config = config_from_args(&args);
    config.validate()?;

    let runner = SystemRunner;
    let encryptor = Encryptor::new(&config, &runner).with_validation(!args.no_validate);

    if !encryptor.will_validate() && !args.json {
        if config.secret_name.is_some() && !args.no_validate {
            output::warn("live validation skipped for an explicit --secret-name");
        } else {
            output::dimmed("live validation disabled");
        }
    }

    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm::new(&config, !args.json))
    };

    let outcome = encryptor.execute(confirm.as_mut())?;
    info!(secret_name = %outcome.secret_name, "run finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}

fn print_outcome(outcome: &SealOutcome) {
    if outcome.validated {
        output::success("secret validation successful");
    }

    output::header("Sealed Secret Generated Successfully");
    output::kv(
        "controller",
        format!("{}/{}", outcome.controller_namespace, outcome.controller_name),
    );
    output::kv("namespace", &outcome.namespace);
    output::kv("scope", outcome.scope);

    output::header("Encrypted Value");
    output::sealed_value(&outcome.encrypted_value);
    println!();
}
