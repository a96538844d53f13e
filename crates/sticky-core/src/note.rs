//! Note model
//!
//! A note is a trimmed, non-empty piece of text with a numeric id and the
//! local time it was created at.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp pattern used in the notes file (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single sticky note.
///
/// Field order matches the on-disk layout: `text`, `timestamp`, `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub timestamp: String,
    pub id: i64,
}

impl Note {
    /// Build a note created at `when`. The text is stored as given.
    pub fn new(id: i64, text: impl Into<String>, when: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            timestamp: format_timestamp(&when),
            id,
        }
    }

    /// Display label, e.g. `#3`
    pub fn label(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A note as read from disk. Older files carry no `id`.
///
/// An `id` that is not an integer (a string, a fraction, a number out of
/// range) reads as missing, so only that note is renumbered.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StoredNote {
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let id = value.as_ref().and_then(serde_json::Value::as_i64);
    if let (Some(raw), None) = (&value, id) {
        tracing::warn!(id = %raw, "ignoring unusable note id");
    }
    Ok(id)
}

/// Format a creation time the way the notes file stores it.
pub fn format_timestamp(when: &NaiveDateTime) -> String {
    when.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, second precision is all the file keeps.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Trim user input; `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
