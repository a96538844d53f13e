//! Notes file reading and writing

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, StickyError};
use crate::note::{Note, StoredNote};

/// Read the notes file. `Ok(None)` when the file does not exist.
pub(crate) fn read_notes(path: &Path) -> Result<Option<Vec<StoredNote>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StickyError::io_operation("read", path, e)),
    };

    let notes: Vec<StoredNote> = serde_json::from_str(&content)?;
    Ok(Some(notes))
}

/// Render notes the way they are stored: a 2-space indented JSON array,
/// non-ASCII text written as-is.
pub(crate) fn render_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

/// Replace the notes file with a full snapshot.
///
/// Writes a sibling temporary file first and renames it over the target.
pub(crate) fn write_notes(path: &Path, notes: &[Note]) -> Result<()> {
    let content = render_notes(notes)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| StickyError::io_operation("create directory", parent, e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, content).map_err(|e| StickyError::io_operation("write", &tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StickyError::io_operation("replace", path, e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "notes.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
