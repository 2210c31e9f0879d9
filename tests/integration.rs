// Integration tests for the baseline-score CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a Command for the baseline-score binary with an isolated HOME.
fn baseline_score(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("baseline-score").expect("binary should exist");
    cmd.env("HOME", home.path()).current_dir(home.path());
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    baseline_score(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("baseline-score"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    baseline_score(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline modernization"));
}

#[test]
fn analyze_requires_repo_url() {
    let home = TempDir::new().expect("temp dir should be created");
    baseline_score(&home)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn leaderboard_requires_at_least_one_url() {
    let home = TempDir::new().expect("temp dir should be created");
    baseline_score(&home)
        .arg("leaderboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let home = TempDir::new().expect("temp dir should be created");
    baseline_score(&home)
        .args(["-q", "-v", "analyze", "https://github.com/octo/web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn non_github_url_exits_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    baseline_score(&home)
        .args(["analyze", "https://gitlab.com/octo/web"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid repository url"));
}
