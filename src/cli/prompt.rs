//! Interactive confirmation.

use std::io::{self, IsTerminal};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::confirm::{Confirm, LineConfirm};
use crate::error::Result;

/// Asks on the terminal, or reads a line from piped stdin.
pub struct TerminalConfirm {
    namespace: String,
    controller_namespace: String,
    show_summary: bool,
}

impl TerminalConfirm {
    pub fn new(config: &Config, show_summary: bool) -> Self {
        Self {
            namespace: config.namespace.clone(),
            controller_namespace: config.controller_namespace.clone(),
            show_summary,
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if self.show_summary {
            output::header("Generating Sealed Secret");
            output::kv("target namespace", &self.namespace);
            output::kv("controller namespace", &self.controller_namespace);
        }

        if io::stdin().is_terminal() {
            let accepted = dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            Ok(accepted)
        } else {
            eprint!("{} [Y/N]: ", prompt);
            LineConfirm::new(io::stdin().lock()).confirm(prompt)
        }
    }
}
