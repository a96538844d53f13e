//! `sticky add` command - add a note
//!
//! Text comes from the arguments, or from stdin when there are none.
//! Whitespace-only text is ignored quietly.

use std::io::{self, Read};

use sticky_core::error::Result;
use sticky_core::store::NoteStore;

use crate::cli::{Cli, OutputFormat};

/// Execute the add command
pub fn execute(cli: &Cli, store: &mut NoteStore, words: &[String]) -> Result<()> {
    let text = if words.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        words.join(" ")
    };

    let Some(note) = store.add(&text)? else {
        tracing::debug!("nothing to add");
        return Ok(());
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&note)?),
        OutputFormat::Human => println!("{}", note.label()),
    }

    Ok(())
}
