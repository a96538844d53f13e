//! CLI argument parsing for sticky
//!
//! Global flags: --file, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use sticky_core::presentation::Variant;

/// Sticky - a small sticky-notes widget backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "sticky")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Notes file (overrides the configured one)
    #[arg(long, global = true, env = "STICKY_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, sticky_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note (reads stdin when no text is given)
    Add(AddArgs),

    /// List notes, newest first
    List,

    /// Delete a note by id
    Delete {
        /// Note id, with or without the leading '#'
        #[arg(value_parser = parse_note_id, allow_negative_numbers = true)]
        id: i64,
    },

    /// Run the interactive widget in the terminal
    Widget(WidgetArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Note text; words are joined with spaces
    pub text: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WidgetArgs {
    /// Widget flavour (overrides the configured one)
    #[arg(long, value_parser = parse_variant)]
    pub variant: Option<Variant>,
}

/// Accept `3` or `#3`
pub fn parse_note_id(s: &str) -> Result<i64, String> {
    s.trim()
        .trim_start_matches('#')
        .parse::<i64>()
        .map_err(|_| format!("invalid note id: {s}"))
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse::<Variant>().map_err(|e| e.to_string())
}
