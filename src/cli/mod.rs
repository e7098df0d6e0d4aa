//! Command-line interface.

pub mod completions;
pub mod output;
pub mod prompt;
pub mod seal;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Scope;
use crate::core::constants;

/// kubeseal-encrypt - seal one Kubernetes secret value.
#[derive(Parser)]
#[command(
    name = "kubeseal-encrypt",
    about = "Seal a single Kubernetes secret value and verify it against the cluster",
    version,
    args_conflicts_with_subcommands = true,
    after_help = "Example: kubeseal-encrypt --key password --value hunter2 --namespace payments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub seal: SealArgs,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands. With none given, the seal flags are used.
#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags for a sealing run.
#[derive(Args, Debug, Default)]
pub struct SealArgs {
    /// Secret data key (e.g. password)
    #[arg(long)]
    pub key: Option<String>,

    /// Secret value, raw (base64-encoded for you)
    #[arg(long)]
    pub value: Option<String>,

    /// Target namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Secret name; validation is skipped when set
    #[arg(long)]
    pub secret_name: Option<String>,

    /// Sealed secrets controller namespace [default: kube-system]
    #[arg(
        long,
        visible_alias = "controller-ns",
        env = constants::ENV_CONTROLLER_NAMESPACE
    )]
    pub controller_namespace: Option<String>,

    /// Sealed secrets controller deployment name [default: sealed-secrets-controller]
    #[arg(long, env = constants::ENV_CONTROLLER_NAME)]
    pub controller_name: Option<String>,

    /// Sealing scope
    #[arg(long, value_enum, default_value_t = ScopeArg::Strict)]
    pub scope: ScopeArg,

    /// Use the -f/-o file flags of older kubeseal releases
    #[arg(long)]
    pub legacy_flags: bool,

    /// Skip applying a test secret to the cluster
    #[arg(long)]
    pub no_validate: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Sealing scopes accepted on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScopeArg {
    #[default]
    Strict,
    NamespaceWide,
    ClusterWide,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Strict => Scope::Strict,
            ScopeArg::NamespaceWide => Scope::NamespaceWide,
            ScopeArg::ClusterWide => Scope::ClusterWide,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Some(Command::Completions { shell }) => completions::execute(shell),
        None => seal::execute(cli.seal),
    }
}
