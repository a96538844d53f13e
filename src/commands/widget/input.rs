//! Widget input parsing
//!
//! A plain line is note text. A line ending in `\` continues on the next
//! line. Lines starting with `:` are widget commands.

use crate::cli::parse_note_id;

/// One thing the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text for a new note
    Note(String),
    Delete(i64),
    ToggleMinimize,
    Help,
    Quit,
    /// Blank line; just redraw
    Nothing,
    /// Unrecognised command, with a message for the user
    Invalid(String),
}

/// Turns raw lines into [`Input`]s, joining continued lines.
#[derive(Debug, Default)]
pub struct InputReader {
    pending: Option<String>,
}

impl InputReader {
    /// Feed one line (without its terminator). `None` while a note is
    /// still being continued.
    pub fn feed(&mut self, line: &str) -> Option<Input> {
        if let Some(mut buf) = self.pending.take() {
            return match line.strip_suffix('\\') {
                Some(head) => {
                    buf.push('\n');
                    buf.push_str(head);
                    self.pending = Some(buf);
                    None
                }
                None => {
                    buf.push('\n');
                    buf.push_str(line);
                    Some(Input::Note(buf))
                }
            };
        }

        if let Some(command) = line.trim().strip_prefix(':') {
            return Some(parse_command(command));
        }

        if let Some(head) = line.strip_suffix('\\') {
            self.pending = Some(head.to_string());
            return None;
        }

        if line.trim().is_empty() {
            Some(Input::Nothing)
        } else {
            Some(Input::Note(line.to_string()))
        }
    }

    /// Input ended; hand back any half-written note
    pub fn finish(&mut self) -> Option<Input> {
        self.pending.take().map(Input::Note)
    }
}

fn parse_command(command: &str) -> Input {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();

    match (name, arg) {
        ("d" | "delete" | "del", Some(id)) => match parse_note_id(id) {
            Ok(id) => Input::Delete(id),
            Err(message) => Input::Invalid(message),
        },
        ("d" | "delete" | "del", None) => Input::Invalid("usage: :d <id>".to_string()),
        ("m" | "min" | "minimize", _) => Input::ToggleMinimize,
        ("h" | "help" | "?", _) => Input::Help,
        ("q" | "quit" | "exit", _) => Input::Quit,
        (other, _) => Input::Invalid(format!("unknown command: :{other}")),
    }
}
