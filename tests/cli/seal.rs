//! Tests for the default seal command.

use crate::support::*;

#[test]
fn test_seal_prints_encrypted_value() {
    let t = Test::new();

    let output = t.seal(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, FAKE_CIPHERTEXT);
    assert_stdout_contains(&output, "kube-system/sealed-secrets-controller");
    assert_stdout_contains(&output, "secret validation successful");
}

#[test]
fn test_seal_writes_expected_manifest() {
    let t = Test::new();

    let output = t.seal(&["--secret-name", "test-secret"]);
    assert_success(&output);

    let expected = "apiVersion: v1
kind: Secret
metadata:
  name: test-secret
  namespace: test-ns
type: Opaque
data:
  test-key: dGVzdC12YWx1ZQ==";
    assert_eq!(t.last_unsealed().trim(), expected);
}

#[test]
fn test_seal_passes_controller_and_scope() {
    let t = Test::new();

    let output = t.seal(&[
        "--controller-ns",
        "sealed",
        "--controller-name",
        "my-controller",
        "--scope",
        "namespace-wide",
    ]);
    assert_success(&output);

    assert!(t.called("kubectl get namespace test-ns"));
    assert!(t.called("kubectl get deployment my-controller -n sealed"));
    let kubeseal = t
        .calls()
        .into_iter()
        .find(|c| c.starts_with("kubeseal"))
        .expect("kubeseal not called");
    assert!(kubeseal.contains("--format yaml"));
    assert!(kubeseal.contains("--scope namespace-wide"));
    assert!(kubeseal.contains("--controller-namespace sealed"));
    assert!(kubeseal.contains("--controller-name my-controller"));
    assert!(kubeseal.contains("--secret-file"));
    assert!(kubeseal.contains("--sealed-secret-file"));
}

#[test]
fn test_controller_from_environment() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes", "--no-validate"])
        .env("SEALED_SECRETS_CONTROLLER_NAMESPACE", "env-ns")
        .env("SEALED_SECRETS_CONTROLLER_NAME", "env-controller")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.called("kubectl get deployment env-controller -n env-ns"));
}

#[test]
fn test_flag_beats_environment() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes", "--controller-namespace", "flag-ns"])
        .env("SEALED_SECRETS_CONTROLLER_NAMESPACE", "env-ns")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.called("kubectl get deployment sealed-secrets-controller -n flag-ns"));
}

#[test]
fn test_legacy_flags() {
    let t = Test::new();

    let output = t.seal(&["--legacy-flags"]);
    assert_success(&output);

    let kubeseal = t
        .calls()
        .into_iter()
        .find(|c| c.starts_with("kubeseal"))
        .expect("kubeseal not called");
    assert!(kubeseal.contains(" -f "));
    assert!(kubeseal.contains(" -o "));
    assert!(!kubeseal.contains("--secret-file"));
}

#[test]
fn test_json_output() {
    let t = Test::new();

    let output = t.seal(&["--json"]);
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["key"], "test-key");
    assert_eq!(json["namespace"], "test-ns");
    assert_eq!(json["scope"], "strict");
    assert_eq!(json["encrypted_value"], FAKE_CIPHERTEXT);
    assert_eq!(json["validated"], true);
    assert!(json["secret_name"].as_str().unwrap().starts_with("test-"));
}

#[test]
fn test_scratch_dir_removed_after_success() {
    let t = Test::new();

    let output = t.seal(&[]);
    assert_success(&output);
    assert!(t.tmp_is_empty());
}
