//! `sticky list` command - print notes newest first

use std::io::{self, Write};

use sticky_core::display::{render, Rendering};
use sticky_core::error::Result;
use sticky_core::store::NoteStore;

use crate::cli::{Cli, OutputFormat};

/// Execute the list command
pub fn execute(cli: &Cli, store: &NoteStore) -> Result<()> {
    let rendering = render(store.notes());

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendering)?),
        OutputFormat::Human => {
            let stdout = io::stdout();
            write_human(&mut stdout.lock(), &rendering, cli.quiet)?;
        }
    }

    Ok(())
}

/// Write a rendering as indented text blocks followed by the count
pub fn write_human(out: &mut impl Write, rendering: &Rendering<'_>, quiet: bool) -> io::Result<()> {
    if rendering.notes.is_empty() {
        if !quiet {
            writeln!(out, "No notes found")?;
        }
        return Ok(());
    }

    for note in &rendering.notes {
        writeln!(out, "{}  {}", note.label(), note.timestamp)?;
        for line in note.text.lines() {
            writeln!(out, "    {}", line)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", rendering.summary())
}
