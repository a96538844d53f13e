//! Command dispatch logic for sticky

use std::path::PathBuf;
use std::time::Instant;

use sticky_core::config::WidgetConfig;
use sticky_core::error::Result;
use sticky_core::store::NoteStore;
use sticky_core::trace_time;

use crate::cli::{AddArgs, Cli, Commands, WidgetArgs};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let config = WidgetConfig::load()?;
    trace_time!(start, "load_config");

    match &cli.command {
        None => commands::widget::execute(cli, &config, &WidgetArgs::default()),
        Some(Commands::Widget(args)) => commands::widget::execute(cli, &config, args),
        Some(Commands::Add(AddArgs { text })) => {
            let mut store = open_store(cli, &config);
            commands::add::execute(cli, &mut store, text)
        }
        Some(Commands::List) => {
            let store = open_store(cli, &config);
            commands::list::execute(cli, &store)
        }
        Some(Commands::Delete { id }) => {
            let mut store = open_store(cli, &config);
            commands::delete::execute(cli, &mut store, *id)
        }
        Some(Commands::Config) => commands::config::execute(cli, &config),
    }
}

/// Notes file to use: `--file` / `STICKY_FILE` first, then the config
pub fn notes_path(cli: &Cli, config: &WidgetConfig) -> PathBuf {
    cli.file
        .clone()
        .unwrap_or_else(|| config.notes_file.clone())
}

pub fn open_store(cli: &Cli, config: &WidgetConfig) -> NoteStore {
    let path = notes_path(cli, config);
    tracing::debug!(path = %path.display(), scheme = %config.id_scheme, "open_store");
    NoteStore::load(path, config.id_scheme)
}
