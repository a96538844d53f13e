use crate::cli::support::{read_notes, sticky};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Add command tests
// ============================================================================

#[test]
fn test_add_first_note() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout("#1\n");

    let notes = read_notes(&dir.path().join("notes.json"));
    assert_eq!(notes[0]["id"], 1);
    assert_eq!(notes[0]["text"], "Buy milk");
    let timestamp = notes[0]["timestamp"].as_str().unwrap();
    assert_eq!(timestamp.len(), "2024-01-01 00:00:00".len());
}

#[test]
fn test_add_numbers_sequentially() {
    let dir = tempdir().unwrap();

    for (text, expected) in [("one", "#1\n"), ("two", "#2\n"), ("three", "#3\n")] {
        sticky(dir.path())
            .args(["add", text])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_add_from_stdin() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .arg("add")
        .write_stdin("  from a pipe\n")
        .assert()
        .success()
        .stdout("#1\n");

    let notes = read_notes(&dir.path().join("notes.json"));
    assert_eq!(notes[0]["text"], "from a pipe");
}

#[test]
fn test_add_blank_text_does_nothing() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout("");

    assert!(!dir.path().join("notes.json").exists());
}

#[test]
fn test_add_json_format() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["--format", "json", "add", "Заметка"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"))
        .stdout(predicate::str::contains("\"text\": \"Заметка\""));
}

#[test]
fn test_add_keeps_unicode_unescaped_on_disk() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["add", "Купить молоко 🥛"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert!(raw.contains("Купить молоко 🥛"));
    assert!(raw.starts_with("[\n  {\n    \"text\""));
}

#[test]
fn test_add_to_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("elsewhere").join("mine.json");

    sticky(dir.path())
        .arg("--file")
        .arg(&path)
        .args(["add", "over here"])
        .assert()
        .success();

    assert!(path.exists());
    assert!(!dir.path().join("notes.json").exists());
}

#[test]
fn test_add_after_legacy_notes() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("notes.json"),
        r#"[{"text": "old one", "timestamp": "2023-01-01 10:00:00"},
            {"text": "old two", "timestamp": "2023-01-02 10:00:00"}]"#,
    )
    .unwrap();

    sticky(dir.path())
        .args(["add", "new"])
        .assert()
        .success()
        .stdout("#3\n");

    let notes = read_notes(&dir.path().join("notes.json"));
    let ids: Vec<i64> = notes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_add_over_malformed_file_starts_fresh() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("notes.json"), "not json at all").unwrap();

    sticky(dir.path())
        .args(["add", "fresh"])
        .assert()
        .success()
        .stdout("#1\n");
}
