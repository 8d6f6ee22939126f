//! Viewport and cursor management for the typewriter.
//!
//! [`ViewportCursor`] tracks which part of the [`TextBuffer`] is mapped onto
//! the fixed display grid and where the cursor sits inside that window. It
//! turns [`KeyIntent`]s into buffer edits and reports the smallest
//! [`Redraw`] that brings the display up to date.

use tracing::trace;

use super::buffer::{EditMode, TextBuffer, is_cell_char};
use super::key::{Direction, KeyIntent};

/// Fixed display dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub rows: usize,
    pub cols: usize,
}

impl Extent {
    /// Create an extent, clamping zero dimensions to 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }
}

/// A 1-based position, either on the display or in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Zero-based scroll offset of the window into the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub row: usize,
    pub col: usize,
}

/// What must be repainted after a transition.
///
/// Display rows are 1-based. After any redraw other than `None` the cursor
/// glyph is painted again at the current cursor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing visible changed
    None,
    /// The cursor moved inside the window; repaint the cell it left
    Cursor { from: CellPos },
    /// One display row changed
    Line(usize),
    /// Scroll or structural change
    Viewport,
}

impl Redraw {
    /// Combine two redraws into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, other) | (other, Self::None) => other,
            (Self::Viewport, _) | (_, Self::Viewport) => Self::Viewport,
            (Self::Line(a), Self::Line(b)) => {
                if a == b {
                    Self::Line(a)
                } else {
                    Self::Viewport
                }
            }
            (Self::Line(row), Self::Cursor { from }) | (Self::Cursor { from }, Self::Line(row)) => {
                if from.row == row {
                    Self::Line(row)
                } else {
                    Self::Viewport
                }
            }
            (Self::Cursor { from: a }, Self::Cursor { from: b }) => {
                if a.row == b.row {
                    Self::Line(a.row)
                } else {
                    Self::Viewport
                }
            }
        }
    }
}

/// The typewriter's window over the buffer plus its cursor.
///
/// # Example
///
/// ```
/// use segmatrix::editor::{Extent, KeyIntent, TextBuffer, ViewportCursor};
///
/// let mut buffer = TextBuffer::new();
/// let mut view = ViewportCursor::new(Extent::new(3, 10));
/// for ch in "HELLO".chars() {
///     view.handle(&mut buffer, KeyIntent::Char(ch));
/// }
/// assert_eq!(buffer.line(1).as_deref(), Some("HELLO"));
/// assert_eq!(view.cursor().col, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportCursor {
    extent: Extent,
    cursor: CellPos,
    offset: Offset,
    mode: EditMode,
}

impl ViewportCursor {
    /// Start at the top-left corner in insert mode.
    pub const fn new(extent: Extent) -> Self {
        Self {
            extent,
            cursor: CellPos::new(1, 1),
            offset: Offset { row: 0, col: 0 },
            mode: EditMode::Insert,
        }
    }

    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Cursor position inside the window.
    pub const fn cursor(&self) -> CellPos {
        self.cursor
    }

    pub const fn offset(&self) -> Offset {
        self.offset
    }

    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_insert_mode(&self) -> bool {
        self.mode == EditMode::Insert
    }

    /// Cursor position in buffer coordinates.
    pub const fn absolute(&self) -> CellPos {
        CellPos::new(
            self.cursor.row + self.offset.row,
            self.cursor.col + self.offset.col,
        )
    }

    /// Apply one key intent to the buffer and window.
    pub fn handle(&mut self, buffer: &mut TextBuffer, intent: KeyIntent) -> Redraw {
        let redraw = match intent {
            KeyIntent::Char(ch) => self.type_char(buffer, ch),
            KeyIntent::Backspace => self.backspace(buffer),
            KeyIntent::Delete => self.delete(buffer),
            KeyIntent::Enter => self.enter(buffer),
            KeyIntent::Move(direction) => self.move_cursor(buffer, direction),
            KeyIntent::Home => self.home(),
            KeyIntent::End => self.end(buffer),
            KeyIntent::PageUp => self.page_up(),
            KeyIntent::PageDown => self.page_down(buffer),
            KeyIntent::ToggleInsert => {
                self.mode = self.mode.toggled();
                Redraw::None
            }
        };
        trace!(
            ?intent,
            ?redraw,
            cursor = ?self.cursor,
            offset = ?self.offset,
            "intent applied"
        );
        redraw
    }

    /// Move one cell, scrolling when the cursor would leave the window.
    ///
    /// Down and right always scroll; up and left only while the offset is
    /// positive. Moving down makes sure the new row exists in the buffer.
    pub fn move_cursor(&mut self, buffer: &mut TextBuffer, direction: Direction) -> Redraw {
        let from = self.cursor;
        match direction {
            Direction::Up => {
                if self.cursor.row > 1 {
                    self.cursor.row -= 1;
                    Redraw::Cursor { from }
                } else if self.offset.row > 0 {
                    self.offset.row -= 1;
                    Redraw::Viewport
                } else {
                    Redraw::None
                }
            }
            Direction::Down => {
                let redraw = if self.cursor.row < self.extent.rows {
                    self.cursor.row += 1;
                    Redraw::Cursor { from }
                } else {
                    self.offset.row += 1;
                    Redraw::Viewport
                };
                buffer.ensure_line(self.absolute().row);
                redraw
            }
            Direction::Left => {
                if self.cursor.col > 1 {
                    self.cursor.col -= 1;
                    Redraw::Cursor { from }
                } else if self.offset.col > 0 {
                    self.offset.col -= 1;
                    Redraw::Viewport
                } else {
                    Redraw::None
                }
            }
            Direction::Right => {
                if self.cursor.col < self.extent.cols {
                    self.cursor.col += 1;
                    Redraw::Cursor { from }
                } else {
                    self.offset.col += 1;
                    Redraw::Viewport
                }
            }
        }
    }

    fn type_char(&mut self, buffer: &mut TextBuffer, ch: char) -> Redraw {
        if !is_cell_char(ch) {
            return Redraw::None;
        }
        let at = self.absolute();
        buffer.insert_char(at.row, at.col, ch, self.mode);
        Redraw::Line(self.cursor.row).merge(self.move_cursor(buffer, Direction::Right))
    }

    fn backspace(&mut self, buffer: &mut TextBuffer) -> Redraw {
        let at = self.absolute();
        if at.col == 1 {
            if at.row <= 1 {
                return Redraw::None;
            }
            let joined_at = buffer.line_length(at.row - 1) + 1;
            if !buffer.join_with_previous(at.row) {
                return Redraw::None;
            }
            if self.cursor.row > 1 {
                self.cursor.row -= 1;
            } else {
                self.offset.row = self.offset.row.saturating_sub(1);
            }
            self.place_col(joined_at);
            return Redraw::Viewport;
        }

        let target = at.col - 1;
        let edited = if target <= buffer.line_length(at.row) {
            buffer.delete_char_at(at.row, target);
            Redraw::Line(self.cursor.row)
        } else {
            // Left of the cursor is padding; only the cursor moves.
            Redraw::None
        };
        edited.merge(self.move_cursor(buffer, Direction::Left))
    }

    fn delete(&mut self, buffer: &mut TextBuffer) -> Redraw {
        let at = self.absolute();
        if at.col <= buffer.line_length(at.row) {
            buffer.delete_char_at(at.row, at.col);
            return Redraw::Line(self.cursor.row);
        }
        let joins = at.row < buffer.line_count();
        if !buffer.delete_char_at(at.row, at.col) {
            Redraw::None
        } else if joins {
            Redraw::Viewport
        } else {
            // Only padding was added to the last line.
            Redraw::Line(self.cursor.row)
        }
    }

    fn enter(&mut self, buffer: &mut TextBuffer) -> Redraw {
        let at = self.absolute();
        buffer.split_line(at.row, at.col);
        self.offset.col = 0;
        self.cursor.col = 1;
        if self.cursor.row >= self.extent.rows {
            self.offset.row += 1;
        } else {
            self.cursor.row += 1;
        }
        Redraw::Viewport
    }

    const fn home(&mut self) -> Redraw {
        self.cursor.col = 1;
        self.offset.col = 0;
        Redraw::Viewport
    }

    fn end(&mut self, buffer: &TextBuffer) -> Redraw {
        let target = buffer.line_length(self.absolute().row) + 1;
        self.place_col(target);
        Redraw::Viewport
    }

    fn page_up(&mut self) -> Redraw {
        self.offset.row = self.offset.row.saturating_sub(self.page_step());
        Redraw::Viewport
    }

    fn page_down(&mut self, buffer: &mut TextBuffer) -> Redraw {
        self.offset.row += self.page_step();
        buffer.ensure_line(self.offset.row + self.extent.rows);
        Redraw::Viewport
    }

    /// Rows scrolled by a page; a one-row display still pages by one.
    fn page_step(&self) -> usize {
        (self.extent.rows - 1).max(1)
    }

    /// Put the cursor on an absolute column, scrolling horizontally only
    /// when the column is right of the window.
    fn place_col(&mut self, target: usize) {
        let target = target.max(1);
        if target > self.extent.cols {
            self.offset.col = target - self.extent.cols;
            self.cursor.col = self.extent.cols;
        } else {
            self.offset.col = 0;
            self.cursor.col = target;
        }
    }
}
