//! Tests for error reporting and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--controller-namespace"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kubeseal-encrypt"));
}

#[test]
fn test_unknown_scope_rejected() {
    let t = Test::new();

    t.seal_cmd(&["--yes", "--scope", "galaxy-wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
    assert!(t.calls().is_empty());
}

#[test]
fn test_missing_required_flags() {
    let t = Test::new();

    let output = t.cmd().args(["--key", "k", "--yes"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "value is required");
    assert!(t.calls().is_empty());
}

#[test]
fn test_missing_namespace() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes"])
        .env("FAKE_NO_NAMESPACE", "1")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "namespace test-ns not found");
    assert_stderr_contains(&output, "NotFound");
    assert!(t.tmp_is_empty());
}

#[test]
fn test_missing_controller() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes"])
        .env("FAKE_NO_CONTROLLER", "1")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "sealed-secrets controller sealed-secrets-controller not found");
    assert_stderr_contains(&output, "SEALED_SECRETS_CONTROLLER_NAMESPACE");
}

#[test]
fn test_kubeseal_failure_shows_output() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes"])
        .env("FAKE_KUBESEAL_FAIL", "1")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "kubeseal failed");
    assert_stderr_contains(&output, "cannot fetch certificate");
    assert!(t.tmp_is_empty());
}

#[test]
fn test_missing_kubeseal() {
    if Test::installed_system_wide("kubeseal") {
        eprintln!("SKIPPED: kubeseal installed system-wide");
        return;
    }
    let t = Test::without("kubeseal");

    let output = t.seal(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "kubeseal not found");
    assert_stderr_contains(&output, "install kubeseal");
    assert!(t.tmp_is_empty());
}

#[test]
fn test_missing_kubectl() {
    if Test::installed_system_wide("kubectl") {
        eprintln!("SKIPPED: kubectl installed system-wide");
        return;
    }
    let t = Test::without("kubectl");

    let output = t.seal(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "kubectl not found");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "kubeseal-encrypt");
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("complete") && out.contains("kubeseal-encrypt"));
}

#[test]
fn test_completions_powershell() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["completions", "power-shell"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Register-ArgumentCompleter");
}

#[test]
fn test_empty_controller_namespace_flag() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes", "--controller-ns", ""])
        .env("SEALED_SECRETS_CONTROLLER_NAMESPACE", "env-ns")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "controller namespace is required");
    assert!(t.calls().is_empty());
}
