//! Command helper methods for Test.

use super::{Test, TEST_VALUE, TEST_VALUE_B64};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a kubeseal-encrypt command wired to the fake tools.
    ///
    /// Returns a Command configured with:
    /// - PATH holding the fake bin dir ahead of the system shell utilities
    /// - TMPDIR set to the test's temp dir
    /// - controller env vars, log filter and color cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("kubeseal-encrypt")
            .expect("failed to find kubeseal-encrypt binary");
        cmd.env("PATH", format!("{}:/usr/bin:/bin", self.bin.path().display()));
        cmd.env("TMPDIR", self.tmp.path());
        cmd.env("FAKE_LOG", &self.log);
        cmd.env("FAKE_SECRET_DATA", TEST_VALUE_B64);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("SEALED_SECRETS_CONTROLLER_NAMESPACE");
        cmd.env_remove("SEALED_SECRETS_CONTROLLER_NAME");
        cmd.env_remove("KUBESEAL_ENCRYPT_LOG");
        cmd
    }

    /// The seal command for `TEST_VALUE` under `test-key` in `test-ns`,
    /// plus `extra` args. Returned unrun so env or stdin can be adjusted.
    pub fn seal_cmd(&self, extra: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "--key",
            "test-key",
            "--value",
            TEST_VALUE,
            "--namespace",
            "test-ns",
        ]);
        cmd.args(extra);
        cmd
    }

    /// Run [`Test::seal_cmd`] non-interactively.
    pub fn seal(&self, extra: &[&str]) -> Output {
        let mut args = vec!["--yes"];
        args.extend_from_slice(extra);
        self.seal_cmd(&args)
            .output()
            .expect("failed to run kubeseal-encrypt")
    }

    /// Contents of the unsealed manifest the fake kubeseal last received.
    pub fn last_unsealed(&self) -> String {
        let mut path = self.log.clone().into_os_string();
        path.push(".unsealed");
        std::fs::read_to_string(path).expect("kubeseal was never called")
    }
}
