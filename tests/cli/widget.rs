use crate::cli::support::{read_notes, sticky};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Widget command tests (stdin-driven)
// ============================================================================

#[test]
fn test_widget_adds_and_quits() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .arg("widget")
        .write_stdin("Buy milk\nCall back\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== My Notes =="))
        .stdout(predicate::str::contains("Note saved"))
        .stdout(predicate::str::contains("Total notes: 2"));

    let notes = read_notes(&dir.path().join("notes.json"));
    assert_eq!(notes.as_array().unwrap().len(), 2);
}

#[test]
fn test_widget_is_default_command() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total notes: 0"));
}

#[test]
fn test_widget_compact_variant() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["widget", "--variant", "compact"])
        .write_stdin(":m\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Notes ==  [-]"))
        .stdout(predicate::str::contains("== Notes ==  [[]]"));
}

#[test]
fn test_widget_bad_variant() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["widget", "--variant", "fancy"])
        .assert()
        .code(2);
}
