//! `sticky config` command - show the effective configuration

use sticky_core::config::WidgetConfig;
use sticky_core::error::Result;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::notes_path;

/// Execute the config command
pub fn execute(cli: &Cli, config: &WidgetConfig) -> Result<()> {
    let effective = WidgetConfig {
        notes_file: notes_path(cli, config),
        ..config.clone()
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&effective)?),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("# {}", WidgetConfig::config_path()?.display());
            }
            print!("{}", effective.to_toml()?);
        }
    }

    Ok(())
}
