use crate::cli::support::sticky;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    sticky(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: sticky"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("widget"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    sticky(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sticky"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let dir = tempdir().unwrap();
    sticky(dir.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    let dir = tempdir().unwrap();
    sticky(dir.path())
        .args(["--format=json", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("{\"error\":"));
}
