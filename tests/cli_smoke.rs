#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly, reports usage
//! errors, and refuses to run without a credential. None of them reach
//! the network: every case here fails before the request is built.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn translate() -> Command {
    let mut cmd = Command::cargo_bin("translate").unwrap();
    // Isolate from any key configured on the host running the tests.
    cmd.env_remove("GOOGLEAPIKEY");
    cmd
}

#[test]
fn test_help_displays_usage() {
    translate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google Translate"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--from"));
}

#[test]
fn test_version_displays_version() {
    translate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    translate()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_key_fails_before_any_request() {
    translate()
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"))
        .stderr(predicate::str::contains("GOOGLEAPIKEY"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_key_flag_falls_through_to_missing() {
    translate()
        .args(["--key", "", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"));
}
