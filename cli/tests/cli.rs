//! Drives the `lws-validate` binary through stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn lws_validate() -> Command {
    let mut cmd = Command::cargo_bin("lws-validate").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_empty_outputs_succeeds() {
    lws_validate()
        .write_stdin(r#"{"outputs": []}"#)
        .assert()
        .success()
        .stdout("Checking 0 outputs...\nValidation Successful\n");
}

#[test]
fn test_valid_output_succeeds() {
    let key = "a".repeat(64);
    lws_validate()
        .write_stdin(format!(r#"{{"outputs": [{{"tx_pub_key": "{key}"}}]}}"#))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Output 0 tx_pub_key valid: {key}"
        )))
        .stdout(predicate::str::ends_with("Validation Successful\n"));
}

#[test]
fn test_invalid_output_fails_with_dump() {
    lws_validate()
        .write_stdin(r#"{"outputs": [{"tx_pub_key": "xyz"}]}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Output 0 has invalid tx_pub_key: 'xyz' len=3",
        ))
        .stdout(predicate::str::contains("Hex repr: 78797a"))
        .stdout(predicate::str::contains("Validation Successful").not());
}

#[test]
fn test_missing_tx_pub_key_fails() {
    lws_validate()
        .write_stdin(r#"{"outputs": [{}]}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Output 0 missing tx_pub_key"));
}

#[test]
fn test_transactions_report_counts() {
    lws_validate()
        .write_stdin(r#"{"transactions": [{"spent_outputs": [1,2,3]}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Transaction 0 has spent_outputs (3 items)",
        ));
}

#[test]
fn test_missing_spent_outputs_fails() {
    lws_validate()
        .write_stdin(r#"{"transactions": [{}]}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Transaction 0 missing spent_outputs",
        ));
}

#[test]
fn test_malformed_json_fails() {
    lws_validate()
        .write_stdin(r#"{"outputs": ["#)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Validation Error: "));
}

#[test]
fn test_no_known_key_succeeds() {
    lws_validate()
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("Validation Successful\n");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    lws_validate()
        .arg("-vv")
        .write_stdin(r#"{"transactions": []}"#)
        .assert()
        .success()
        .stdout("Checking 0 transactions...\nValidation Successful\n");
}

#[test]
fn test_repeat_runs_match() {
    let input = r#"{"outputs": [{"tx_pub_key": "0g"}]}"#;
    let first = lws_validate().write_stdin(input).output().unwrap();
    let second = lws_validate().write_stdin(input).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_extra_arguments_are_ignored() {
    lws_validate()
        .arg("input.json")
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("Validation Successful\n");
}

#[test]
fn test_unknown_flags_are_ignored() {
    lws_validate()
        .args(["--strict", "-x"])
        .write_stdin(r#"{"outputs": [{"tx_pub_key": "xyz"}]}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Hex repr: 78797a"));
}

#[test]
fn test_array_document_succeeds() {
    lws_validate()
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("Validation Successful\n");
}
