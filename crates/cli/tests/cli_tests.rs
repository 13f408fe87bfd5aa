//! Binary-level smoke tests; no database required.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("cellarmatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("candidates"))
        .stdout(predicate::str::contains("merge"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn missing_database_url_is_a_clean_error() {
    let mut cmd = Command::cargo_bin("cellarmatch").unwrap();
    cmd.env_remove("DATABASE_URL")
        .args(["stats", "--table", "wines"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn unknown_table_is_rejected_before_connecting() {
    let mut cmd = Command::cargo_bin("cellarmatch").unwrap();
    cmd.env("DATABASE_URL", "postgres://unused")
        .args(["normalize", "--table", "merchants"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("merchants"));
}
