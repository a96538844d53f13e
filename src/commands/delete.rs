//! `sticky delete` command - remove a note by id

use sticky_core::error::Result;
use sticky_core::store::NoteStore;

use crate::cli::{Cli, OutputFormat};

/// Execute the delete command
pub fn execute(cli: &Cli, store: &mut NoteStore, id: i64) -> Result<()> {
    store.require(id)?;
    let removed = store.delete(id)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deleted": id,
                "removed": removed,
                "count": store.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted #{}", id);
            }
        }
    }

    Ok(())
}
