//! Cursor blink state.
//!
//! While the display has focus, an interval repaints the cursor glyph and a
//! shorter timeout clears it again, giving a visible on/off blink. Any cursor
//! movement re-arms the timeout so the cursor stays visible while typing.

use crate::timer::{Ticker, Timeout, earliest};

/// Period of the blink interval.
pub const BLINK_INTERVAL_MS: u64 = 600;

/// How long the cursor stays visible after it is painted.
pub const BLINK_HOLD_MS: u64 = 300;

/// What the owner should do with the cursor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPaint {
    /// Paint the cursor glyph
    Show,
    /// Restore the character under the cursor
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorBlink {
    interval: Ticker,
    clear: Timeout,
    hold_ms: u64,
    focused: bool,
    shown: bool,
}

impl CursorBlink {
    pub const fn new() -> Self {
        Self::with_timing(BLINK_INTERVAL_MS, BLINK_HOLD_MS)
    }

    pub const fn with_timing(interval_ms: u64, hold_ms: u64) -> Self {
        Self {
            interval: Ticker::new(interval_ms),
            clear: Timeout::new(),
            hold_ms,
            focused: false,
            shown: false,
        }
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the cursor glyph is currently on screen.
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// Start blinking; the cursor is shown immediately.
    pub const fn focus(&mut self, now_ms: u64) -> BlinkPaint {
        self.focused = true;
        self.shown = true;
        self.interval.start(now_ms);
        self.clear.arm(now_ms, self.hold_ms);
        BlinkPaint::Show
    }

    /// Stop blinking and hide the cursor.
    pub const fn blur(&mut self) -> BlinkPaint {
        self.focused = false;
        self.shown = false;
        self.interval.cancel();
        self.clear.cancel();
        BlinkPaint::Hide
    }

    /// The cursor was repainted after an edit; keep it visible for a while.
    ///
    /// Returns `None` without focus, when no blink is running.
    pub const fn cursor_moved(&mut self, now_ms: u64) -> Option<BlinkPaint> {
        if !self.focused {
            return None;
        }
        self.shown = true;
        self.clear.arm(now_ms, self.hold_ms);
        Some(BlinkPaint::Show)
    }

    /// Advance timers to `now_ms`.
    ///
    /// The clear timeout is checked before the interval so a late poll that
    /// sees both due ends with the cursor visible.
    pub const fn poll(&mut self, now_ms: u64) -> Option<BlinkPaint> {
        let mut paint = None;
        if self.clear.take_due(now_ms) {
            self.shown = false;
            paint = Some(BlinkPaint::Hide);
        }
        if self.interval.take_due(now_ms) {
            self.shown = true;
            self.clear.arm(now_ms, self.hold_ms);
            paint = Some(BlinkPaint::Show);
        }
        paint
    }

    /// The next time `poll` can change anything.
    pub fn next_deadline(&self) -> Option<u64> {
        earliest(self.interval.next_at(), self.clear.deadline())
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
