//! The segment grid: rows × cols of sixteen-segment displays.
//!
//! [`SegmentGrid`] is the drawing surface every animation owns. It only
//! records which segments are lit and in which color; the terminal widget
//! and the SVG exporter turn that into pixels.

use ratatui::style::Color;

use crate::glyph::{Segment, SegmentSet, segments_for};

/// Paint requests understood by a display.
///
/// Rows and columns are 1-based. Cells outside the display are ignored.
pub trait RenderSink {
    /// Show `glyph` in a single cell, replacing whatever was lit there.
    fn draw_cell(&mut self, row: usize, col: usize, glyph: char, color: Color);

    /// Turn every segment of a cell off.
    fn clear_cell(&mut self, row: usize, col: usize);

    /// Paint a whole row from column 1, truncating `text` to the width and
    /// clearing the cells past its end.
    fn draw_line(&mut self, row: usize, text: &str, color: Color);
}

/// One display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub segments: SegmentSet,
    pub color: Color,
}

impl Cell {
    const BLANK: Self = Self {
        segments: SegmentSet::EMPTY,
        color: Color::Reset,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentGrid {
    rows: usize,
    cols: usize,
    foreground: Color,
    background: Color,
    cells: Vec<Cell>,
}

impl SegmentGrid {
    /// Create a blank grid. Zero dimensions are clamped to 1.
    pub fn new(rows: usize, cols: usize, foreground: Color, background: Color) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            foreground,
            background,
            cells: vec![Cell::BLANK; rows * cols],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Color used for lit segments by default.
    pub const fn foreground(&self) -> Color {
        self.foreground
    }

    /// Color of unlit segments. [`Color::Reset`] leaves them undrawn.
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Change the foreground and recolor everything currently lit with it.
    pub fn set_foreground(&mut self, color: Color) {
        let previous = self.foreground;
        for cell in &mut self.cells {
            if !cell.segments.is_empty() && cell.color == previous {
                cell.color = color;
            }
        }
        self.foreground = color;
    }

    pub const fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// The cell at a 1-based position.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Light exactly `segments` in a cell.
    pub fn draw_segments(&mut self, row: usize, col: usize, segments: SegmentSet, color: Color) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = if segments.is_empty() {
                Cell::BLANK
            } else {
                Cell { segments, color }
            };
        }
    }

    /// Light one more segment in a cell, keeping the others.
    pub fn set_segment(&mut self, row: usize, col: usize, segment: Segment, color: Color) {
        if let Some(idx) = self.index(row, col) {
            let cell = &mut self.cells[idx];
            cell.segments.insert(segment.flag());
            cell.color = color;
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Iterate `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / cols + 1, idx % cols + 1, cell))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row == 0 || col == 0 || row > self.rows || col > self.cols {
            return None;
        }
        Some((row - 1) * self.cols + (col - 1))
    }
}

impl RenderSink for SegmentGrid {
    fn draw_cell(&mut self, row: usize, col: usize, glyph: char, color: Color) {
        self.draw_segments(row, col, segments_for(glyph), color);
    }

    fn clear_cell(&mut self, row: usize, col: usize) {
        self.draw_segments(row, col, SegmentSet::EMPTY, Color::Reset);
    }

    fn draw_line(&mut self, row: usize, text: &str, color: Color) {
        if row == 0 || row > self.rows {
            return;
        }
        let mut chars = text.chars();
        for col in 1..=self.cols {
            match chars.next() {
                Some(ch) => self.draw_cell(row, col, ch, color),
                None => self.clear_cell(row, col),
            }
        }
    }
}
