use chrono::Timelike;

use super::{Animation, DemoKind, TickContext};
use crate::grid::{RenderSink, SegmentGrid};
use crate::timer::Ticker;

const TICK_MS: u64 = 100;

/// Format a time as `H.MM.SS`, hours padded with a space to two cells.
pub fn format_time(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:>2}.{minutes:02}.{seconds:02}")
}

/// Local wall-clock time, refreshed every 100 ms.
#[derive(Debug)]
pub struct Clock {
    grid: SegmentGrid,
    ticker: Ticker,
    shown: String,
}

impl Clock {
    pub const fn new(grid: SegmentGrid) -> Self {
        Self {
            grid,
            ticker: Ticker::new(TICK_MS),
            shown: String::new(),
        }
    }

    /// Paint the time if it differs from what is on screen.
    fn paint(&mut self, ctx: &TickContext) -> bool {
        let time = ctx.local_time;
        let text = format_time(time.hour(), time.minute(), time.second());
        if text == self.shown {
            return false;
        }
        let color = self.grid.foreground();
        self.grid.draw_line(1, &text, color);
        self.shown = text;
        true
    }
}

impl Animation for Clock {
    fn kind(&self) -> DemoKind {
        DemoKind::Clock
    }

    fn grid(&self) -> &SegmentGrid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut SegmentGrid {
        &mut self.grid
    }

    fn start(&mut self, ctx: &TickContext) {
        self.shown.clear();
        self.paint(ctx);
        self.ticker.start(ctx.now_ms);
    }

    fn poll(&mut self, ctx: &TickContext) -> bool {
        self.ticker.take_due(ctx.now_ms) && self.paint(ctx)
    }

    fn next_deadline(&self) -> Option<u64> {
        self.ticker.next_at()
    }
}
