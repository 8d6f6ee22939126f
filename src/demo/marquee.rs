use super::{Animation, DemoKind, TickContext};
use crate::grid::{RenderSink, SegmentGrid};
use crate::timer::Ticker;

const TICK_MS: u64 = 500;

pub const DEFAULT_TEXT: &str = "     HELLO WORLD";

/// Text rotating leftwards through a single row.
#[derive(Debug)]
pub struct Marquee {
    grid: SegmentGrid,
    ticker: Ticker,
    text: Vec<char>,
    pos: usize,
}

impl Marquee {
    pub fn new(grid: SegmentGrid, text: &str) -> Self {
        Self {
            grid,
            ticker: Ticker::new(TICK_MS),
            text: text.chars().collect(),
            pos: 0,
        }
    }

    /// Rotation index of the next frame.
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The text rotated left by `pos` and cut to the display width.
    pub fn frame(&self) -> String {
        let (head, tail) = self.text.split_at(self.pos.min(self.text.len()));
        tail.iter()
            .chain(head)
            .take(self.grid.cols())
            .collect()
    }

    fn step(&mut self) {
        let color = self.grid.foreground();
        let frame = self.frame();
        self.grid.draw_line(1, &frame, color);
        self.pos += 1;
        if self.pos >= self.text.len() {
            self.pos = 0;
        }
    }
}

impl Animation for Marquee {
    fn kind(&self) -> DemoKind {
        DemoKind::Marquee
    }

    fn grid(&self) -> &SegmentGrid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut SegmentGrid {
        &mut self.grid
    }

    fn start(&mut self, ctx: &TickContext) {
        self.step();
        self.ticker.start(ctx.now_ms);
    }

    fn poll(&mut self, ctx: &TickContext) -> bool {
        if !self.ticker.take_due(ctx.now_ms) {
            return false;
        }
        self.step();
        true
    }

    fn next_deadline(&self) -> Option<u64> {
        self.ticker.next_at()
    }
}
