//! Run confirmation.
//!
//! The pipeline asks a [`Confirm`] before touching anything. Tests and
//! `--yes` plug in non-interactive implementations.

use std::io::BufRead;

use tracing::debug;

use crate::error::Result;

/// Answer expected for "yes", compared case-insensitively.
const YES: &str = "y";

/// Decides whether the run may continue.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Always continues.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Reads one line from any reader and accepts `y`/`Y`.
///
/// End of input counts as "no".
#[derive(Debug)]
pub struct LineConfirm<R> {
    reader: R,
}

impl<R: BufRead> LineConfirm<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Confirm for LineConfirm<R> {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        let accepted = line.trim().eq_ignore_ascii_case(YES);
        debug!(accepted, "confirmation read");
        Ok(accepted)
    }
}
