//! Note id assignment
//!
//! Ids are integers, normally small and positive. New ids come from an
//! [`IdAllocator`]; notes read from older files without an `id` are numbered
//! by position.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StickyError};
use crate::note::{Note, StoredNote};

/// How the store picks the id for a new note
///
/// The high-water mark behind [`IdScheme::Monotonic`] lives only as long as
/// the store does. The file keeps no counter, so a store loaded later starts
/// again from the highest id on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdScheme {
    /// One past the highest id ever seen by this store, deleted ids included
    #[default]
    Monotonic,
    /// One past the highest id currently present
    MaxPlusOne,
}

impl FromStr for IdScheme {
    type Err = StickyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monotonic" => Ok(IdScheme::Monotonic),
            "max-plus-one" => Ok(IdScheme::MaxPlusOne),
            other => Err(StickyError::invalid_value("id scheme", other)),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdScheme::Monotonic => write!(f, "monotonic"),
            IdScheme::MaxPlusOne => write!(f, "max-plus-one"),
        }
    }
}

/// Hands out ids for new notes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdAllocator {
    scheme: IdScheme,
    high_water: Option<i64>,
}

impl IdAllocator {
    pub fn new(scheme: IdScheme, notes: &[Note]) -> Self {
        Self {
            scheme,
            high_water: max_id(notes),
        }
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    /// Id the next note would get, without reserving it
    pub fn peek(&self, notes: &[Note]) -> Result<i64> {
        let highest = match self.scheme {
            IdScheme::MaxPlusOne => max_id(notes),
            IdScheme::Monotonic => max_id(notes).max(self.high_water),
        };
        match highest {
            None => Ok(1),
            Some(last) => last
                .checked_add(1)
                .ok_or(StickyError::IdsExhausted { last }),
        }
    }

    /// Reserve and return the next id
    pub fn allocate(&mut self, notes: &[Note]) -> Result<i64> {
        let id = self.peek(notes)?;
        self.high_water = self.high_water.max(Some(id));
        Ok(id)
    }
}

fn max_id(notes: &[Note]) -> Option<i64> {
    notes.iter().map(|n| n.id).max()
}

/// Turn notes read from disk into store notes.
///
/// A note without an id gets `position + 1`. If that number is already
/// taken by a note that carried an explicit id, the back-filled note is
/// moved past the current maximum instead. Explicit ids are kept as-is.
pub(crate) fn assign_ids(stored: Vec<StoredNote>) -> Vec<Note> {
    let explicit: HashSet<i64> = stored.iter().filter_map(|n| n.id).collect();

    let mut notes: Vec<(Note, bool)> = stored
        .into_iter()
        .enumerate()
        .map(|(position, n)| {
            let backfilled = n.id.is_none();
            let note = Note {
                text: n.text,
                timestamp: n.timestamp,
                id: n.id.unwrap_or(position as i64 + 1),
            };
            (note, backfilled)
        })
        .collect();

    let mut taken: HashSet<i64> = notes.iter().map(|(n, _)| n.id).collect();
    let mut max = taken.iter().copied().max().unwrap_or(0);
    for (note, backfilled) in notes.iter_mut() {
        if *backfilled && explicit.contains(&note.id) {
            let reassigned = match max.checked_add(1) {
                Some(next) => {
                    max = next;
                    next
                }
                None => lowest_free(&taken),
            };
            tracing::warn!(
                position_id = note.id,
                reassigned_id = reassigned,
                "back-filled note id collides with an existing id"
            );
            taken.insert(reassigned);
            note.id = reassigned;
        }
    }

    notes.into_iter().map(|(note, _)| note).collect()
}

/// Smallest positive id not in `taken`. Only reached once `i64::MAX` is used.
fn lowest_free(taken: &HashSet<i64>) -> i64 {
    (1..).find(|id| !taken.contains(id)).unwrap_or(i64::MAX)
}
