//! Presentation state for widget frontends
//!
//! Everything here is owned by whichever surface is active: the
//! collapsed/expanded mode, the per-variant layout, drag offsets for a
//! single gesture, the fade-in and the queue of transient notices. None of
//! it touches the note store.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::display::Notice;
use crate::error::StickyError;

/// Collapsed shows only the title bar; expanded shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Expanded,
    Collapsed,
}

impl PresentationMode {
    pub fn toggle(self) -> Self {
        match self {
            PresentationMode::Expanded => PresentationMode::Collapsed,
            PresentationMode::Collapsed => PresentationMode::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == PresentationMode::Collapsed
    }
}

/// Widget flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Framed window with worded buttons
    #[default]
    Simple,
    /// Borderless window with symbol buttons and a fade-in
    Compact,
}

impl Variant {
    pub fn layout(self) -> Layout {
        match self {
            Variant::Simple => Layout {
                title: "My Notes",
                width: 400,
                expanded_height: 800,
                collapsed_height: 150,
                collapse_label: "Collapse",
                expand_label: "Expand",
                opacity: 0.95,
                fade_in: false,
            },
            Variant::Compact => Layout {
                title: "Notes",
                width: 350,
                expanded_height: 700,
                collapsed_height: 80,
                collapse_label: "-",
                expand_label: "[]",
                opacity: 0.95,
                fade_in: true,
            },
        }
    }
}

impl FromStr for Variant {
    type Err = StickyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Variant::Simple),
            "compact" => Ok(Variant::Compact),
            other => Err(StickyError::invalid_value("variant", other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Simple => write!(f, "simple"),
            Variant::Compact => write!(f, "compact"),
        }
    }
}

/// Fixed geometry and labels for a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub title: &'static str,
    pub width: u32,
    pub expanded_height: u32,
    pub collapsed_height: u32,
    /// Toggle label while expanded
    pub collapse_label: &'static str,
    /// Toggle label while collapsed
    pub expand_label: &'static str,
    /// Resting window opacity
    pub opacity: f32,
    pub fade_in: bool,
}

impl Layout {
    pub fn height(&self, mode: PresentationMode) -> u32 {
        match mode {
            PresentationMode::Expanded => self.expanded_height,
            PresentationMode::Collapsed => self.collapsed_height,
        }
    }

    pub fn toggle_label(&self, mode: PresentationMode) -> &'static str {
        match mode {
            PresentationMode::Expanded => self.collapse_label,
            PresentationMode::Collapsed => self.expand_label,
        }
    }
}

/// Screen or widget-relative position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drag-to-move state for one gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    /// Press on the title bar; `pointer` is relative to the widget.
    pub fn start(&mut self, pointer: Point) {
        self.anchor = Some(pointer);
    }

    /// Pointer moved. Returns where the window should go, if dragging.
    pub fn motion(&self, pointer: Point, window_origin: Point) -> Option<Point> {
        self.anchor.map(|anchor| Point {
            x: window_origin.x + (pointer.x - anchor.x),
            y: window_origin.y + (pointer.y - anchor.y),
        })
    }

    pub fn stop(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Stepped opacity transition sampled by the surface's own redraws.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: Duration,
    steps: u32,
    started: Instant,
    cancelled: bool,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: Duration, steps: u32, started: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            steps: steps.max(1),
            started,
            cancelled: false,
        }
    }

    /// Opacity at `now`, snapped to the nearest completed step
    pub fn opacity_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let step = (progress * self.steps as f32).floor() / self.steps as f32;
        self.from + (self.to - self.from) * step
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.cancelled || now.saturating_duration_since(self.started) >= self.duration
    }

    /// Jump straight to the end value
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Notices waiting to be drawn, each shown for a fixed window.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    entries: VecDeque<(Instant, Notice)>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.entries.push_back((now, notice));
    }

    /// Drop notices whose window has elapsed
    pub fn prune(&mut self, now: Instant) {
        while let Some((posted, _)) = self.entries.front() {
            if now.saturating_duration_since(*posted) >= self.ttl {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|(_, notice)| notice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
