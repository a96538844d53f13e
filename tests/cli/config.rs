use crate::cli::support::sticky;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_defaults() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes_file = \"notes.json\""))
        .stdout(predicate::str::contains("id_scheme = \"monotonic\""));
}

#[test]
fn test_config_file_sets_notes_file_and_variant() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join(".config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "notes_file = \"stash.json\"\nvariant = \"compact\"\n",
    )
    .unwrap();

    sticky(dir.path()).args(["add", "hi"]).assert().success();
    assert!(dir.path().join("stash.json").exists());

    sticky(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Notes =="));
}

#[test]
fn test_file_flag_overrides_config() {
    let dir = tempdir().unwrap();

    sticky(dir.path())
        .args(["--format", "json", "--file", "other.json", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"notes_file\": \"other.json\""));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join(".config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "id_scheme = \"random\"\n").unwrap();

    sticky(dir.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
