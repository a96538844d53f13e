//! Display synchronization
//!
//! [`render`] projects the store's notes into what a display surface shows:
//! newest first, with a count. [`Synchronizer`] routes add/delete requests
//! from the input and display surfaces to the store, re-renders after each
//! one and reports the outcome through a [`Notifier`].

use std::fmt;

use serde::Serialize;

use crate::error::StickyError;
use crate::note::Note;
use crate::store::NoteStore;

/// One note as the display surface sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView<'a> {
    pub id: i64,
    pub timestamp: &'a str,
    pub text: &'a str,
}

impl NoteView<'_> {
    /// Display label, e.g. `#3`
    pub fn label(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A render pass: notes newest-first plus the total count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering<'a> {
    pub count: usize,
    pub notes: Vec<NoteView<'a>>,
}

impl Rendering<'_> {
    /// Count line shown under the list
    pub fn summary(&self) -> String {
        format!("Total notes: {}", self.count)
    }
}

/// Project notes (stored oldest first) into display order.
pub fn render(notes: &[Note]) -> Rendering<'_> {
    Rendering {
        count: notes.len(),
        notes: notes
            .iter()
            .rev()
            .map(|n| NoteView {
                id: n.id,
                timestamp: &n.timestamp,
                text: &n.text,
            })
            .collect(),
    }
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Failure,
}

/// A short, transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn failure(error: &StickyError) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: format!("Error: {error}"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Something that can show a rendered note list
pub trait DisplaySurface {
    fn show(&mut self, rendering: &Rendering<'_>);
}

/// Something that can show a transient notice
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Whether the surface reflects the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Stale,
    InSync,
}

/// Result of a routed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A note was added
    Added(Note),
    /// This many notes were removed
    Deleted(usize),
    /// Nothing to do (empty input, unknown id)
    Unchanged,
    /// The store rejected the change; it was rolled back
    Failed,
}

/// Keeps a display surface in step with a note store.
pub struct Synchronizer<S> {
    store: NoteStore,
    surface: S,
    state: SyncState,
}

impl<S> Synchronizer<S>
where
    S: DisplaySurface + Notifier,
{
    /// Wrap a loaded store. Call [`Synchronizer::refresh`] for the first draw.
    pub fn new(store: NoteStore, surface: S) -> Self {
        Self {
            store,
            surface,
            state: SyncState::Stale,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Render the current collection onto the surface.
    pub fn refresh(&mut self) {
        let rendering = render(self.store.notes());
        self.surface.show(&rendering);
        self.state = SyncState::InSync;
    }

    /// Add a note from the input surface, then re-render and notify.
    pub fn request_add(&mut self, text: &str) -> Outcome {
        self.state = SyncState::Stale;
        let outcome = match self.store.add(text) {
            Ok(Some(note)) => {
                self.surface.notify(Notice::success("Note saved"));
                Outcome::Added(note)
            }
            Ok(None) => Outcome::Unchanged,
            Err(e) => self.failed("add", e),
        };
        self.refresh();
        outcome
    }

    /// Delete a note on behalf of the display surface, then re-render.
    pub fn request_delete(&mut self, id: i64) -> Outcome {
        self.state = SyncState::Stale;
        let outcome = match self.store.delete(id) {
            Ok(0) => {
                self.surface
                    .notify(Notice::info(format!("Note #{id} not found")));
                Outcome::Unchanged
            }
            Ok(removed) => {
                self.surface.notify(Notice::success("Note deleted"));
                Outcome::Deleted(removed)
            }
            Err(e) => self.failed("delete", e),
        };
        self.refresh();
        outcome
    }

    fn failed(&mut self, operation: &str, error: StickyError) -> Outcome {
        tracing::error!(operation, error = %error, "note change failed");
        self.surface.notify(Notice::failure(&error));
        Outcome::Failed
    }

    /// Give back the store and surface
    pub fn into_parts(self) -> (NoteStore, S) {
        (self.store, self.surface)
    }
}
