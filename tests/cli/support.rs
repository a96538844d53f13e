use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for sticky running in `dir`, isolated from user config
pub fn sticky(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sticky");
    cmd.current_dir(dir)
        .env("STICKY_CONFIG_DIR", dir.join(".config"))
        .env_remove("STICKY_FILE")
        .env_remove("STICKY_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Read the notes file as JSON
pub fn read_notes(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("notes file should exist");
    serde_json::from_str(&raw).expect("notes file should be valid JSON")
}
