//! Binary-level tests for the `alertctl` executable.

use assert_cmd::Command;
use predicates::prelude::*;

fn alertctl() -> Command {
    let mut cmd = Command::cargo_bin("alertctl").expect("binary builds");
    for var in [
        "ALERTCTL_CLOUD",
        "ALERTCTL_TOKEN",
        "ALERTCTL_TARGET_TOKEN",
        "ALERTCTL_CONFIG",
        "ALERTCTL_API_URL",
        "ALERTCTL_QUERY_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_every_subcommand() {
    alertctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("enable"))
                .and(predicate::str::contains("disable"))
                .and(predicate::str::contains("copy"))
                .and(predicate::str::contains("domain")),
        );
}

#[test]
fn missing_cloud_is_reported_with_a_hint() {
    alertctl()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no cloud configured"));
}

#[test]
fn unknown_cloud_is_rejected() {
    alertctl()
        .args(["--cloud", "mars", "--token", "abc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cloud us"));
}

#[test]
fn conflicting_filters_are_rejected_by_the_parser() {
    alertctl()
        .args(["--cloud", "us", "--token", "abc", "list", "--active", "--favorite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unreachable_api_is_a_runtime_error() {
    alertctl()
        .args([
            "--cloud",
            "us",
            "--token",
            "abc",
            "--api-url",
            "http://127.0.0.1:9",
            "--query-url",
            "http://127.0.0.1:9",
            "list",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
