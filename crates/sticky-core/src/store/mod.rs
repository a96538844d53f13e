//! Note store
//!
//! The store owns the ordered note collection (oldest first) and its JSON
//! file. Every successful mutation rewrites the whole file; a mutation whose
//! write fails is undone in memory before the error is returned.

mod ids;
mod io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDateTime;

use crate::error::{Result, StickyError};
use crate::note::{self, Note};
use crate::trace_time;
use ids::IdAllocator;
pub use ids::IdScheme;

/// The sticky note store
#[derive(Debug)]
pub struct NoteStore {
    /// Notes file location
    path: PathBuf,
    /// Notes in insertion order
    notes: Vec<Note>,
    ids: IdAllocator,
}

impl NoteStore {
    /// Load the store from `path`.
    ///
    /// Never fails: a missing file gives an empty store, and an unreadable
    /// or malformed one is logged and also treated as empty.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, scheme: IdScheme) -> Self {
        let path = path.as_ref().to_path_buf();

        let notes = match io::read_notes(&path) {
            Ok(Some(stored)) => ids::assign_ids(stored),
            Ok(None) => {
                tracing::debug!("notes file missing, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable notes file");
                Vec::new()
            }
        };

        tracing::debug!(count = notes.len(), "loaded notes");
        let ids = IdAllocator::new(scheme, &notes);
        Self { path, notes, ids }
    }

    /// Path of the notes file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Notes in insertion order, oldest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by id
    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Like [`NoteStore::get`], but a missing note is [`StickyError::NoteNotFound`].
    pub fn require(&self, id: i64) -> Result<&Note> {
        self.get(id).ok_or(StickyError::NoteNotFound { id })
    }

    pub fn id_scheme(&self) -> IdScheme {
        self.ids.scheme()
    }

    /// Id the next added note will receive. Fails once ids run out.
    pub fn next_id(&self) -> Result<i64> {
        self.ids.peek(&self.notes)
    }

    /// Add a note created now. See [`NoteStore::add_at`].
    pub fn add(&mut self, text: &str) -> Result<Option<Note>> {
        self.add_at(text, note::now())
    }

    /// Add a note with an explicit creation time.
    ///
    /// Text is trimmed first; whitespace-only input is ignored and returns
    /// `Ok(None)` without touching the file. When the highest id is already
    /// `i64::MAX` nothing is added and [`StickyError::IdsExhausted`] is returned.
    pub fn add_at(&mut self, text: &str, when: NaiveDateTime) -> Result<Option<Note>> {
        let Some(text) = note::normalize_text(text) else {
            tracing::debug!("ignoring empty note text");
            return Ok(None);
        };

        let ids_before = self.ids;
        let id = self.ids.allocate(&self.notes)?;
        let note = Note::new(id, text, when);
        self.notes.push(note.clone());

        if let Err(e) = self.save() {
            self.notes.pop();
            self.ids = ids_before;
            return Err(e);
        }

        tracing::debug!(id = note.id, "added note");
        Ok(Some(note))
    }

    /// Remove every note with `id`, returning how many were removed.
    ///
    /// Removing nothing is not an error and does not rewrite the file.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        if self.get(id).is_none() {
            tracing::debug!(id, "no note to delete");
            return Ok(0);
        }

        let snapshot = self.notes.clone();
        self.notes.retain(|n| n.id != id);
        let removed = snapshot.len() - self.notes.len();

        if let Err(e) = self.save() {
            self.notes = snapshot;
            return Err(e);
        }

        tracing::debug!(id, removed, "deleted note");
        Ok(removed)
    }

    /// Write the full collection to the notes file.
    #[tracing::instrument(skip(self), fields(path = %self.path.display(), count = self.notes.len()))]
    pub fn save(&self) -> Result<()> {
        let start = Instant::now();
        io::write_notes(&self.path, &self.notes)?;
        trace_time!(start, "save_notes");
        Ok(())
    }
}
