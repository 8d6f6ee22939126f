use super::{Animation, DemoKind, TickContext};
use crate::glyph::{Segment, SegmentSet};
use crate::grid::SegmentGrid;
use crate::timer::Ticker;

const TICK_MS: u64 = 125;

/// Three-stroke frames that chase around the outside of one display.
pub const FRAMES: [SegmentSet; 8] = {
    use Segment::{A1, A2, B, C, D1, D2, E, F, G1, G2, H, I, J, K, L, M};
    [
        SegmentSet::of(&[A1, A2, I]),
        SegmentSet::of(&[A2, B, J]),
        SegmentSet::of(&[B, C, G2]),
        SegmentSet::of(&[C, D2, M]),
        SegmentSet::of(&[D1, D2, L]),
        SegmentSet::of(&[D1, E, K]),
        SegmentSet::of(&[E, F, G1]),
        SegmentSet::of(&[A1, F, H]),
    ]
};

#[derive(Debug)]
pub struct Spinner {
    grid: SegmentGrid,
    ticker: Ticker,
    index: usize,
}

impl Spinner {
    pub const fn new(grid: SegmentGrid) -> Self {
        Self {
            grid,
            ticker: Ticker::new(TICK_MS),
            index: 0,
        }
    }

    /// Index of the frame on screen.
    pub const fn frame_index(&self) -> usize {
        self.index
    }

    fn step(&mut self) {
        self.index = (self.index + 1) % FRAMES.len();
        let color = self.grid.foreground();
        self.grid.draw_segments(1, 1, FRAMES[self.index], color);
    }
}

impl Animation for Spinner {
    fn kind(&self) -> DemoKind {
        DemoKind::Spinner
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
