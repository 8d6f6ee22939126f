//! Typewriter editor core.
//!
//! A rope-backed [`TextBuffer`], the [`ViewportCursor`] state machine that
//! maps key intents onto it, and the cursor blink. [`Editor`] ties the three
//! together and paints redraws into any [`RenderSink`].

mod blink;
mod buffer;
mod cursor;
mod key;

pub use blink::{BLINK_HOLD_MS, BLINK_INTERVAL_MS, BlinkPaint, CursorBlink};
pub use buffer::{EditMode, TextBuffer};
pub use cursor::{CellPos, Extent, Offset, Redraw, ViewportCursor};
pub use key::{Direction, KeyIntent};

use ratatui::style::Color;
use tracing::debug;

use crate::grid::RenderSink;

/// Glyph painted at the cursor cell.
pub const CURSOR_GLYPH: char = '_';

/// One editable display: buffer, window, blink and ink color.
#[derive(Debug)]
pub struct Editor {
    buffer: TextBuffer,
    view: ViewportCursor,
    blink: CursorBlink,
    color: Color,
}

impl Editor {
    pub fn new(extent: Extent, color: Color) -> Self {
        Self {
            buffer: TextBuffer::new(),
            view: ViewportCursor::new(extent),
            blink: CursorBlink::new(),
            color,
        }
    }

    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub const fn view(&self) -> &ViewportCursor {
        &self.view
    }

    pub const fn blink(&self) -> &CursorBlink {
        &self.blink
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Apply a key intent and paint whatever it changed.
    pub fn handle_key(
        &mut self,
        intent: KeyIntent,
        sink: &mut dyn RenderSink,
        now_ms: u64,
    ) -> Redraw {
        let redraw = self.view.handle(&mut self.buffer, intent);
        debug!(?intent, ?redraw, "typewriter key");
        if redraw == Redraw::None {
            return redraw;
        }
        self.paint(redraw, sink);
        if self.blink.cursor_moved(now_ms).is_some() {
            self.paint_cursor(sink);
        }
        redraw
    }

    /// Advance the blink timers and paint the result.
    pub fn poll_blink(&mut self, sink: &mut dyn RenderSink, now_ms: u64) -> bool {
        match self.blink.poll(now_ms) {
            Some(paint) => {
                self.apply_blink(paint, sink);
                true
            }
            None => false,
        }
    }

    /// Gain or lose focus; losing focus stops the blink and restores the
    /// character under the cursor.
    pub fn set_focused(&mut self, focused: bool, sink: &mut dyn RenderSink, now_ms: u64) {
        let paint = if focused {
            self.blink.focus(now_ms)
        } else {
            self.blink.blur()
        };
        self.apply_blink(paint, sink);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.blink.next_deadline()
    }

    /// Paint the whole window, plus the cursor when it is showing.
    pub fn repaint_all(&self, sink: &mut dyn RenderSink) {
        self.paint(Redraw::Viewport, sink);
        if self.blink.is_shown() {
            self.paint_cursor(sink);
        }
    }

    /// Paint one redraw instruction.
    ///
    /// The cursor glyph is not included; callers paint it afterwards.
    pub fn paint(&self, redraw: Redraw, sink: &mut dyn RenderSink) {
        match redraw {
            Redraw::None => {}
            Redraw::Cursor { from } => self.paint_cell(from, sink),
            Redraw::Line(row) => self.paint_row(row, sink),
            Redraw::Viewport => {
                for row in 1..=self.view.extent().rows {
                    self.paint_row(row, sink);
                }
            }
        }
    }

    fn apply_blink(&self, paint: BlinkPaint, sink: &mut dyn RenderSink) {
        match paint {
            BlinkPaint::Show => self.paint_cursor(sink),
            BlinkPaint::Hide => self.paint_cell(self.view.cursor(), sink),
        }
    }

    fn paint_cursor(&self, sink: &mut dyn RenderSink) {
        let at = self.view.cursor();
        sink.draw_cell(at.row, at.col, CURSOR_GLYPH, self.color);
    }

    /// Restore a display cell from the buffer.
    fn paint_cell(&self, at: CellPos, sink: &mut dyn RenderSink) {
        let offset = self.view.offset();
        let ch = self.buffer.char_at(at.row + offset.row, at.col + offset.col);
        if ch == ' ' {
            sink.clear_cell(at.row, at.col);
        } else {
            sink.draw_cell(at.row, at.col, ch, self.color);
        }
    }

    fn paint_row(&self, row: usize, sink: &mut dyn RenderSink) {
        let offset = self.view.offset();
        let text = self
            .buffer
            .line_segment(row + offset.row, offset.col + 1, self.view.extent().cols);
        sink.draw_line(row, &text, self.color);
    }
}
