//! Terminal rendering of a segment grid.
//!
//! Each display is drawn as 5×5 terminal cells, one character per stroke:
//!
//! ```text
//!  ─ ─        A1  A2
//! │╲│╱│     F  H I J  B
//!  ─ ─        G1  G2
//! │╱│╲│     E  K L M  C
//!  ─ ─·       D1  D2 DP
//! ```
//!
//! Displays sit one column apart; rows touch.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::glyph::Segment;
use crate::grid::SegmentGrid;

/// Terminal columns used per display, gap included.
pub const CELL_WIDTH: u16 = 6;
/// Terminal rows used per display.
pub const CELL_HEIGHT: u16 = 5;

/// Where each segment is drawn inside a display, and with which character.
const STROKES: [(Segment, u16, u16, char); 17] = [
    (Segment::A1, 1, 0, '─'),
    (Segment::A2, 3, 0, '─'),
    (Segment::B, 4, 1, '│'),
    (Segment::C, 4, 3, '│'),
    (Segment::D1, 1, 4, '─'),
    (Segment::D2, 3, 4, '─'),
    (Segment::E, 0, 3, '│'),
    (Segment::F, 0, 1, '│'),
    (Segment::G1, 1, 2, '─'),
    (Segment::G2, 3, 2, '─'),
    (Segment::H, 1, 1, '╲'),
    (Segment::I, 2, 1, '│'),
    (Segment::J, 3, 1, '╱'),
    (Segment::K, 1, 3, '╱'),
    (Segment::L, 2, 3, '│'),
    (Segment::M, 3, 3, '╲'),
    (Segment::Dp, 4, 4, '·'),
];

/// Cells between paired horizontal strokes, lit when either half is.
const JOINTS: [(Segment, Segment, u16, u16); 3] = [
    (Segment::A1, Segment::A2, 2, 0),
    (Segment::G1, Segment::G2, 2, 2),
    (Segment::D1, Segment::D2, 2, 4),
];

/// Terminal size needed to draw a `rows` × `cols` grid.
pub fn grid_size(rows: usize, cols: usize) -> (u16, u16) {
    let cols = u16::try_from(cols).unwrap_or(u16::MAX);
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    (
        cols.saturating_mul(CELL_WIDTH).saturating_sub(1),
        rows.saturating_mul(CELL_HEIGHT),
    )
}

impl Widget for &SegmentGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let unlit = self.background();
        for (row, col, cell) in self.iter() {
            let (Ok(row), Ok(col)) = (u16::try_from(row - 1), u16::try_from(col - 1)) else {
                continue;
            };
            let x0 = area.x.saturating_add(col.saturating_mul(CELL_WIDTH));
            let y0 = area.y.saturating_add(row.saturating_mul(CELL_HEIGHT));
            if x0 >= area.right() || y0 >= area.bottom() {
                continue;
            }

            let mut put = |dx: u16, dy: u16, symbol: char, lit: bool| {
                let color = if lit { cell.color } else { unlit };
                if !lit && color == Color::Reset {
                    return;
                }
                let (x, y) = (x0.saturating_add(dx), y0.saturating_add(dy));
                if x < area.right() && y < area.bottom() {
                    buf[(x, y)]
                        .set_char(symbol)
                        .set_style(Style::default().fg(color));
                }
            };
            for (segment, dx, dy, symbol) in STROKES {
                put(dx, dy, symbol, cell.segments.contains(segment.flag()));
            }
            for (left, right, dx, dy) in JOINTS {
                let lit = cell.segments.intersects(left.flag() | right.flag());
                put(dx, dy, '─', lit);
            }
        }
    }
}
