use crate::cli::support::{read_notes, sticky};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Delete command tests
// ============================================================================

#[test]
fn test_delete_middle_note() {
    let dir = tempdir().unwrap();
    for text in ["one", "two", "three"] {
        sticky(dir.path()).args(["add", text]).assert().success();
    }

    sticky(dir.path())
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout("Deleted #2\n");

    let notes = read_notes(&dir.path().join("notes.json"));
    let ids: Vec<i64> = notes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_delete_accepts_hash_prefix() {
    let dir = tempdir().unwrap();
    sticky(dir.path()).args(["add", "x"]).assert().success();

    sticky(dir.path()).args(["delete", "#1"]).assert().success();
}

#[test]
fn test_delete_missing_note() {
    let dir = tempdir().unwrap();
    sticky(dir.path()).args(["add", "keep"]).assert().success();
    let before = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();

    sticky(dir.path())
        .args(["delete", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: #9"));

    let after = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_delete_missing_note_json_error() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["--format", "json", "delete", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"note_not_found\""));
}

#[test]
fn test_new_process_numbers_from_file_contents() {
    let dir = tempdir().unwrap();
    sticky(dir.path()).args(["add", "a"]).assert().success();
    sticky(dir.path()).args(["add", "b"]).assert().success();
    sticky(dir.path()).args(["delete", "2"]).assert().success();

    // A fresh process only sees the file, so max+1 applies again
    sticky(dir.path())
        .args(["add", "c"])
        .assert()
        .success()
        .stdout("#2\n");
}

#[test]
fn test_delete_negative_id_from_hand_edited_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    std::fs::write(
        &path,
        r#"[
  {"text": "minus", "timestamp": "2024-01-01 00:00:00", "id": -1},
  {"text": "two", "timestamp": "2024-01-01 00:00:01", "id": 2}
]"#,
    )
    .unwrap();

    sticky(dir.path())
        .args(["delete", "-1"])
        .assert()
        .success()
        .stdout("Deleted #-1\n");

    let notes = read_notes(&path);
    assert_eq!(notes.as_array().unwrap().len(), 1);
    assert_eq!(notes[0]["text"], "two");
}

#[test]
fn test_bad_id_with_json_format_gives_error_envelope() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["--format", "json", "delete", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""))
        .stderr(predicate::str::contains("invalid note id: abc"));
}
