//! Terminal display surface for the widget

use std::io::{self, Write};
use std::time::{Duration, Instant};

use sticky_core::display::{DisplaySurface, Notice, NoticeLevel, Notifier, Rendering};
use sticky_core::presentation::{Fade, Layout, NoticeBoard, PresentationMode};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Owned copy of the last rendering, so the surface can redraw on its own
#[derive(Debug, Default)]
struct Frame {
    count: usize,
    /// (label, timestamp, text)
    notes: Vec<(String, String, String)>,
}

/// Draws the widget as plain text blocks on a writer.
pub struct TerminalSurface<W: Write> {
    out: W,
    layout: Layout,
    mode: PresentationMode,
    notices: NoticeBoard,
    fade: Option<Fade>,
    styled: bool,
    frame: Frame,
}

impl<W: Write> TerminalSurface<W> {
    /// `styled` enables ANSI intensity for the title and notices.
    pub fn new(out: W, layout: Layout, notice_ttl: Duration, styled: bool) -> Self {
        Self {
            out,
            layout,
            mode: PresentationMode::default(),
            notices: NoticeBoard::new(notice_ttl),
            fade: None,
            styled,
            frame: Frame::default(),
        }
    }

    /// Fade the title in over `duration` if the layout asks for it
    pub fn with_fade(mut self, duration: Duration, steps: u32) -> Self {
        if self.layout.fade_in && self.styled {
            self.fade = Some(Fade::new(
                0.0,
                self.layout.opacity,
                duration,
                steps,
                Instant::now(),
            ));
        }
        self
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Flip between collapsed and expanded and redraw
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggle();
        tracing::debug!(mode = ?self.mode, height = self.layout.height(self.mode), "toggle");
        self.redraw();
    }

    /// Redraw from the last rendering, dropping expired notices
    pub fn redraw(&mut self) {
        if let Err(e) = self.draw(Instant::now()) {
            tracing::warn!(error = %e, "failed to draw widget");
        }
    }

    pub fn show_help(&mut self) {
        let help = "\
Type a note and press Enter to save it (end a line with \\ to continue).
  :d <id>   delete a note
  :m        collapse / expand
  :h        this help
  :q        quit";
        if let Err(e) = writeln!(self.out, "{}", help).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to draw help");
        }
    }

    /// Stop the fade-in, e.g. when the widget is closing
    pub fn cancel_fade(&mut self) {
        if let Some(fade) = self.fade.as_mut() {
            fade.cancel();
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, now: Instant) -> io::Result<()> {
        self.notices.prune(now);

        let title = self.title(now);
        writeln!(
            self.out,
            "{}  [{}]",
            title,
            self.layout.toggle_label(self.mode)
        )?;

        let notices: Vec<String> = self
            .notices
            .active()
            .map(|notice| self.notice_line(notice))
            .collect();
        for line in notices {
            writeln!(self.out, "{}", line)?;
        }

        if !self.mode.is_collapsed() {
            if self.frame.notes.is_empty() {
                writeln!(self.out, "  (no notes yet)")?;
            }
            for (label, timestamp, text) in &self.frame.notes {
                writeln!(self.out, "{}  {}", label, timestamp)?;
                for line in text.lines() {
                    writeln!(self.out, "    {}", line)?;
                }
            }
            writeln!(self.out, "Total notes: {}", self.frame.count)?;
            write!(self.out, "New note> ")?;
        } else {
            write!(self.out, "> ")?;
        }

        self.out.flush()
    }

    fn title(&self, now: Instant) -> String {
        let text = format!("== {} ==", self.layout.title);
        if !self.styled {
            return text;
        }
        let weight = match self.fade {
            Some(fade) if fade.opacity_at(now) < 0.5 => DIM,
            _ => BOLD,
        };
        format!("{weight}{text}{RESET}")
    }

    fn notice_line(&self, notice: &Notice) -> String {
        let marker = match notice.level {
            NoticeLevel::Success => "[ok]",
            NoticeLevel::Info => "[i]",
            NoticeLevel::Failure => "[!]",
        };
        if self.styled {
            format!("{BOLD}{marker} {notice}{RESET}")
        } else {
            format!("{marker} {notice}")
        }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn show(&mut self, rendering: &Rendering<'_>) {
        self.frame = Frame {
            count: rendering.count,
            notes: rendering
                .notes
                .iter()
                .map(|n| (n.label(), n.timestamp.to_string(), n.text.to_string()))
                .collect(),
        };
        self.redraw();
    }
}

impl<W: Write> Notifier for TerminalSurface<W> {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice, Instant::now());
    }
}
