use crate::cli::support::sticky;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_empty() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No notes found\n");
}

#[test]
fn test_list_newest_first() {
    let dir = tempdir().unwrap();
    for text in ["first", "second", "third"] {
        sticky(dir.path()).args(["add", text]).assert().success();
    }

    let output = sticky(dir.path()).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let third = stdout.find("#3").unwrap();
    let second = stdout.find("#2").unwrap();
    let first = stdout.find("#1").unwrap();
    assert!(third < second && second < first);
    assert!(stdout.ends_with("Total notes: 3\n"));
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    sticky(dir.path()).args(["add", "a"]).assert().success();
    sticky(dir.path()).args(["add", "b"]).assert().success();

    let output = sticky(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["count"], 2);
    assert_eq!(json["notes"][0]["id"], 2);
    assert_eq!(json["notes"][0]["text"], "b");
    assert_eq!(json["notes"][1]["id"], 1);
}

#[test]
fn test_list_malformed_file_is_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("notes.json"), "[{").unwrap();

    sticky(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}
