//! Tests for the live validation step.

use crate::support::*;

#[test]
fn test_validation_applies_and_cleans_up() {
    let t = Test::new();

    let output = t.seal(&[]);
    assert_success(&output);

    let calls = t.calls();
    let apply = calls.iter().position(|c| c == "kubectl apply -f -").unwrap();
    let get = calls
        .iter()
        .position(|c| c.starts_with("kubectl get secret test-"))
        .unwrap();
    let delete_sealed = calls
        .iter()
        .position(|c| c.starts_with("kubectl delete sealedsecret test-"))
        .unwrap();
    let delete_secret = calls
        .iter()
        .position(|c| c.starts_with("kubectl delete secret test-"))
        .unwrap();

    assert!(apply < get);
    assert!(get < delete_sealed);
    assert!(delete_sealed < delete_secret);
}

#[test]
fn test_validation_reads_the_data_key() {
    let t = Test::new();

    let output = t.seal(&[]);
    assert_success(&output);
    assert!(t
        .calls()
        .iter()
        .any(|c| c.starts_with("kubectl get secret test-")
            && c.ends_with("-n test-ns -o jsonpath={.data.test-key}")));
}

#[test]
fn test_apply_failure_reports_and_cleans_up() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes"])
        .env("FAKE_APPLY_FAIL", "1")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to apply test sealed secret");
    assert_stderr_contains(&output, "admission webhook denied");
    assert!(t.called("kubectl delete sealedsecret"));
    assert!(t.called("kubectl delete secret"));
    assert!(t.tmp_is_empty());
}

#[test]
fn test_undecodable_live_value() {
    let t = Test::new();

    let output = t
        .seal_cmd(&["--yes"])
        .env("FAKE_SECRET_DATA", "%%%")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decode secret value");
    assert!(t.called("kubectl delete secret"));
}

#[test]
fn test_no_validate_skips_cluster_writes() {
    let t = Test::new();

    let output = t.seal(&["--no-validate"]);
    assert_success(&output);
    assert_stdout_contains(&output, FAKE_CIPHERTEXT);
    assert!(!t.called("kubectl apply"));
    assert!(!t.called("kubectl delete"));
}

#[test]
fn test_explicit_secret_name_is_never_deleted() {
    let t = Test::new();

    let output = t.seal(&["--secret-name", "db-credentials"]);
    assert_success(&output);
    assert_stdout_contains(&output, "validation skipped");
    assert!(!t.called("kubectl apply"));
    assert!(!t.called("kubectl delete"));
}
