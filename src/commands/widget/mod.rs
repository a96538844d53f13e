//! `sticky widget` command - interactive sticky notes in the terminal
//!
//! The terminal plays all three roles around the note store: it is the
//! input surface (lines typed by the user), the display surface (the note
//! list, redrawn after every change) and the notifier (short-lived notices
//! above the list).

mod input;
mod surface;

use std::io::{self, BufRead, IsTerminal, Write};

use sticky_core::config::WidgetConfig;
use sticky_core::display::{Notice, Synchronizer};
use sticky_core::error::Result;

use crate::cli::{Cli, WidgetArgs};
use crate::commands::dispatch::open_store;
use input::{Input, InputReader};
pub use surface::TerminalSurface;

/// Execute the widget command
pub fn execute(cli: &Cli, config: &WidgetConfig, args: &WidgetArgs) -> Result<()> {
    let variant = args.variant.unwrap_or(config.variant);
    let store = open_store(cli, config);
    tracing::info!(%variant, path = %store.path().display(), "starting widget");

    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let surface = TerminalSurface::new(
        stdout.lock(),
        variant.layout(),
        config.notice_duration(),
        styled,
    )
    .with_fade(config.fade_duration(), config.fade_steps);

    let mut sync = Synchronizer::new(store, surface);
    let stdin = io::stdin();
    run_session(stdin.lock(), &mut sync)
}

/// Drive the widget until `:q` or end of input.
///
/// Input bytes that are not UTF-8 are replaced with U+FFFD rather than
/// ending the session.
pub fn run_session<R, W>(mut input: R, sync: &mut Synchronizer<TerminalSurface<W>>) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    sync.refresh();
    let mut reader = InputReader::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        let Some(input) = reader.feed(line) else {
            continue;
        };
        if !handle(sync, input) {
            sync.surface_mut().cancel_fade();
            return Ok(());
        }
    }

    if let Some(input) = reader.finish() {
        handle(sync, input);
    }
    sync.surface_mut().cancel_fade();
    Ok(())
}

/// Apply one input. Returns false when the user asked to quit.
fn handle<W: Write>(sync: &mut Synchronizer<TerminalSurface<W>>, input: Input) -> bool {
    match input {
        Input::Note(text) => {
            if sync.surface().mode().is_collapsed() {
                notify(sync, Notice::info("Expand the widget (:m) to add notes"));
            } else {
                sync.request_add(&text);
            }
        }
        Input::Delete(id) => {
            if sync.surface().mode().is_collapsed() {
                notify(sync, Notice::info("Expand the widget (:m) to delete notes"));
            } else {
                sync.request_delete(id);
            }
        }
        Input::ToggleMinimize => sync.surface_mut().toggle(),
        Input::Help => {
            let surface = sync.surface_mut();
            surface.show_help();
            surface.redraw();
        }
        Input::Quit => return false,
        Input::Nothing => sync.surface_mut().redraw(),
        Input::Invalid(message) => notify(sync, Notice::info(message)),
    }
    true
}

fn notify<W: Write>(sync: &mut Synchronizer<TerminalSurface<W>>, notice: Notice) {
    use sticky_core::display::Notifier;

    let surface = sync.surface_mut();
    surface.notify(notice);
    surface.redraw();
}
