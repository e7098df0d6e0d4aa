//! kubeseal-encrypt - seal one Kubernetes secret value.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kubeseal_encrypt::cli::output;
use kubeseal_encrypt::cli::{execute, Cli};
use kubeseal_encrypt::core::constants;
use kubeseal_encrypt::error::{ClusterError, Error, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kubeseal_encrypt=debug")
        } else {
            EnvFilter::new("kubeseal_encrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::BinaryNotFound(name) if name == "kubeseal" => {
                Some("install kubeseal: https://github.com/bitnami-labs/sealed-secrets#kubeseal")
            }
            Error::BinaryNotFound(_) => Some("install kubectl and make sure it is on PATH"),
            Error::Validation(ValidationError::MissingField(_)) => {
                Some("run: kubeseal-encrypt --help")
            }
            Error::Cluster(ClusterError::ControllerNotFound { .. }) => {
                Some("set --controller-namespace/--controller-name or SEALED_SECRETS_CONTROLLER_NAMESPACE/SEALED_SECRETS_CONTROLLER_NAME")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
