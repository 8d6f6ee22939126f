//! Animated displays.
//!
//! Each animation owns its [`SegmentGrid`] and its timers. The host drives
//! them through the [`Animation`] trait: `start` once, then `poll` whenever
//! a deadline passes. Nothing here reads the clock itself; the current time
//! arrives in a [`TickContext`].

mod bouncer;
mod clock;
mod marquee;
mod spinner;
mod typewriter;

pub use bouncer::{BALL, Bouncer};
pub use clock::{Clock, format_time};
pub use marquee::Marquee;
pub use spinner::{FRAMES, Spinner};
pub use typewriter::Typewriter;

use std::fmt;

use chrono::NaiveTime;
use ratatui::style::Color;

use crate::editor::{Extent, KeyIntent};
use crate::error::{Error, Result};
use crate::grid::SegmentGrid;

/// Time as seen by one poll of the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    /// Monotonic milliseconds since the host started.
    pub now_ms: u64,
    /// Local wall-clock time, used by the clock.
    pub local_time: NaiveTime,
}

impl TickContext {
    pub const fn new(now_ms: u64, local_time: NaiveTime) -> Self {
        Self { now_ms, local_time }
    }

    /// A context at `now_ms` with midnight as the wall-clock time.
    pub const fn at(now_ms: u64) -> Self {
        Self::new(now_ms, NaiveTime::MIN)
    }
}

/// A display that updates itself on timers.
pub trait Animation: fmt::Debug {
    fn kind(&self) -> DemoKind;

    fn grid(&self) -> &SegmentGrid;

    fn grid_mut(&mut self) -> &mut SegmentGrid;

    /// Paint the first frame and start the timers.
    fn start(&mut self, ctx: &TickContext);

    /// Run whatever timers are due. Returns true if the grid changed.
    fn poll(&mut self, ctx: &TickContext) -> bool;

    /// Earliest time `poll` has work to do, if any timer is running.
    fn next_deadline(&self) -> Option<u64>;

    /// Handle a key while focused. Returns true if the grid changed.
    fn handle_key(&mut self, _intent: KeyIntent, _now_ms: u64) -> bool {
        false
    }

    /// The host's focus moved onto or away from this display.
    fn set_focused(&mut self, _focused: bool, _now_ms: u64) {}

    /// One-line description for the status bar.
    fn status(&self) -> String {
        format!(
            "{} {}x{}",
            self.kind(),
            self.grid().rows(),
            self.grid().cols()
        )
    }
}

/// The available animations.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Clock,
    Marquee,
    Spinner,
    Bouncer,
    Typewriter,
}

impl DemoKind {
    pub const ALL: [Self; 5] = [
        Self::Clock,
        Self::Marquee,
        Self::Spinner,
        Self::Bouncer,
        Self::Typewriter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Marquee => "marquee",
            Self::Spinner => "spinner",
            Self::Bouncer => "bouncer",
            Self::Typewriter => "typewriter",
        }
    }

    /// Grid size used when no dimensions are configured.
    pub const fn default_extent(self) -> Extent {
        match self {
            Self::Clock => Extent { rows: 1, cols: 8 },
            Self::Marquee => Extent { rows: 1, cols: 12 },
            Self::Spinner => Extent { rows: 1, cols: 1 },
            Self::Bouncer => Extent { rows: 8, cols: 20 },
            Self::Typewriter => Extent { rows: 3, cols: 10 },
        }
    }

    /// Whether `--rows` / `--cols` apply to this animation.
    pub const fn is_resizable(self) -> bool {
        matches!(self, Self::Marquee | Self::Bouncer | Self::Typewriter)
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a demo name, ignoring case.
pub fn parse_demo(name: &str) -> Result<DemoKind> {
    let wanted = name.trim();
    DemoKind::ALL
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownDemo(name.to_string()))
}

/// Everything needed to construct one animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    pub kind: DemoKind,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub foreground: Color,
    pub background: Color,
    pub text: Option<String>,
}

impl DemoOptions {
    pub const fn new(kind: DemoKind) -> Self {
        Self {
            kind,
            rows: None,
            cols: None,
            foreground: Color::Red,
            background: Color::Reset,
            text: None,
        }
    }

    /// Effective grid size; fixed-size animations ignore configured dimensions.
    pub fn extent(&self) -> Extent {
        let default = self.kind.default_extent();
        if !self.kind.is_resizable() {
            return default;
        }
        let rows = if self.kind == DemoKind::Marquee {
            1
        } else {
            self.rows.unwrap_or(default.rows)
        };
        Extent::new(rows, self.cols.unwrap_or(default.cols))
    }
}

/// Construct the animation described by `options`.
pub fn build(options: &DemoOptions) -> Box<dyn Animation> {
    let extent = options.extent();
    let grid = SegmentGrid::new(
        extent.rows,
        extent.cols,
        options.foreground,
        options.background,
    );
    match options.kind {
        DemoKind::Clock => Box::new(Clock::new(grid)),
        DemoKind::Marquee => Box::new(Marquee::new(
            grid,
            options.text.as_deref().unwrap_or(marquee::DEFAULT_TEXT),
        )),
        DemoKind::Spinner => Box::new(Spinner::new(grid)),
        DemoKind::Bouncer => Box::new(Bouncer::new(grid)),
        DemoKind::Typewriter => {
            let mut typewriter = Typewriter::new(grid);
            if let Some(text) = &options.text {
                typewriter.type_text(text, 0);
            }
            Box::new(typewriter)
        }
    }
}
