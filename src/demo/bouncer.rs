use super::{Animation, DemoKind, TickContext};
use crate::glyph::{Segment, SegmentSet};
use crate::grid::{RenderSink, SegmentGrid};
use crate::timer::Ticker;

const TICK_MS: u64 = 300;

/// The ball: every inner stroke lit.
pub const BALL: SegmentSet = {
    use Segment::{G1, G2, H, I, J, K, L, M};
    SegmentSet::of(&[G1, G2, H, I, J, K, L, M])
};

/// Where the ball starts, before clamping into the frame.
const START: usize = 3;

/// One axis of ball movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Axis {
    pos: usize,
    forward: bool,
    lo: usize,
    hi: usize,
}

impl Axis {
    /// Interior of a frame `len` cells long, or `None` when there is none.
    fn inside(len: usize) -> Option<Self> {
        if len < 3 {
            return None;
        }
        let (lo, hi) = (2, len - 1);
        Some(Self {
            pos: START.clamp(lo, hi),
            forward: true,
            lo,
            hi,
        })
    }

    /// Reflect at the edges, then step.
    const fn advance(&mut self) {
        if self.lo >= self.hi {
            return;
        }
        self.forward = if self.forward {
            self.pos < self.hi
        } else {
            self.pos <= self.lo
        };
        if self.forward {
            self.pos += 1;
        } else {
            self.pos -= 1;
        }
    }
}

/// A ball bouncing diagonally inside a box frame.
#[derive(Debug)]
pub struct Bouncer {
    grid: SegmentGrid,
    ticker: Ticker,
    ball: Option<(Axis, Axis)>,
}

impl Bouncer {
    pub fn new(grid: SegmentGrid) -> Self {
        let ball = Axis::inside(grid.rows()).zip(Axis::inside(grid.cols()));
        Self {
            grid,
            ticker: Ticker::new(TICK_MS),
            ball,
        }
    }

    /// Current ball cell, if the grid is big enough to hold one.
    pub fn ball_position(&self) -> Option<(usize, usize)> {
        self.ball.map(|(row, col)| (row.pos, col.pos))
    }

    fn draw_frame(&mut self) {
        let color = self.grid.foreground();
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        for col in 2..cols {
            self.grid.draw_cell(1, col, '═', color);
            self.grid.draw_cell(rows, col, '═', color);
        }
        for row in 2..rows {
            self.grid.draw_cell(row, 1, '║', color);
            self.grid.draw_cell(row, cols, '║', color);
        }
        self.grid.draw_cell(1, 1, '╔', color);
        self.grid.draw_cell(1, cols, '╗', color);
        self.grid.draw_cell(rows, 1, '╚', color);
        self.grid.draw_cell(rows, cols, '╝', color);
    }

    fn draw_ball(&mut self) {
        if let Some((row, col)) = self.ball_position() {
            let color = self.grid.foreground();
            self.grid.draw_segments(row, col, BALL, color);
        }
    }

    fn step(&mut self) -> bool {
        let Some((row, col)) = self.ball_position() else {
            return false;
        };
        self.grid.clear_cell(row, col);
        if let Some((rows, cols)) = &mut self.ball {
            rows.advance();
            cols.advance();
        }
        self.draw_ball();
        true
    }
}

impl Animation for Bouncer {
    fn kind(&self) -> DemoKind {
        DemoKind::Bouncer
    }

    fn grid(&self) -> &SegmentGrid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut SegmentGrid {
        &mut self.grid
    }

    fn start(&mut self, ctx: &TickContext) {
        self.grid.clear();
        self.draw_frame();
        self.draw_ball();
        self.ticker.start(ctx.now_ms);
    }

    fn poll(&mut self, ctx: &TickContext) -> bool {
        self.ticker.take_due(ctx.now_ms) && self.step()
    }

    fn next_deadline(&self) -> Option<u64> {
        self.ticker.next_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::segments_for;
    use ratatui::style::Color;

    fn bouncer(rows: usize, cols: usize) -> Bouncer {
        let mut bouncer = Bouncer::new(SegmentGrid::new(rows, cols, Color::Red, Color::Reset));
        bouncer.start(&TickContext::at(0));
        bouncer
    }

    fn tick(bouncer: &mut Bouncer, n: u64) {
        for step in 1..=n {
            bouncer.poll(&TickContext::at(step * TICK_MS));
        }
    }

    #[test]
    fn test_frame_uses_box_glyphs() {
        let bouncer = bouncer(4, 5);
        let grid = bouncer.grid();
        assert_eq!(grid.cell(1, 1).unwrap().segments, segments_for('╔'));
        assert_eq!(grid.cell(1, 5).unwrap().segments, segments_for('╗'));
        assert_eq!(grid.cell(4, 1).unwrap().segments, segments_for('╚'));
        assert_eq!(grid.cell(4, 5).unwrap().segments, segments_for('╝'));
        assert_eq!(grid.cell(1, 3).unwrap().segments, segments_for('═'));
        assert_eq!(grid.cell(2, 1).unwrap().segments, segments_for('║'));
    }

    #[test]
    fn test_ball_moves_diagonally_and_clears_old_cell() {
        let mut bouncer = bouncer(8, 20);
        assert_eq!(bouncer.ball_position(), Some((3, 3)));
        tick(&mut bouncer, 1);
        assert_eq!(bouncer.ball_position(), Some((4, 4)));
        let grid = bouncer.grid();
        assert!(grid.cell(3, 3).unwrap().segments.is_empty());
        assert_eq!(grid.cell(4, 4).unwrap().segments, BALL);
    }

    #[test]
    fn test_ball_reflects_off_frame() {
        let mut bouncer = bouncer(5, 20);
        // Interior rows are 2..=4: 3 -> 4 -> 3 -> 2 -> 3.
        let mut rows = Vec::new();
        for step in 1..=4 {
            bouncer.poll(&TickContext::at(step * TICK_MS));
            rows.push(bouncer.ball_position().unwrap().0);
        }
        assert_eq!(rows, vec![4, 3, 2, 3]);
    }

    #[test]
    fn test_ball_stays_inside_frame() {
        let mut bouncer = bouncer(6, 7);
        for step in 1..=200 {
            bouncer.poll(&TickContext::at(step * TICK_MS));
            let (row, col) = bouncer.ball_position().unwrap();
            assert!((2..=5).contains(&row));
            assert!((2..=6).contains(&col));
        }
    }

    #[test]
    fn test_single_cell_interior_holds_ball_still() {
        let mut bouncer = bouncer(3, 3);
        assert_eq!(bouncer.ball_position(), Some((2, 2)));
        tick(&mut bouncer, 3);
        assert_eq!(bouncer.ball_position(), Some((2, 2)));
        assert_eq!(bouncer.grid().cell(2, 2).unwrap().segments, BALL);
    }

    #[test]
    fn test_tiny_grid_has_no_ball() {
        let mut bouncer = bouncer(2, 10);
        assert_eq!(bouncer.ball_position(), None);
        assert!(!bouncer.poll(&TickContext::at(TICK_MS)));
    }
}
