//! Deadline-based timers driven by the host's millisecond clock.
//!
//! Timers never call back on their own. The owner polls them with the current
//! time and reacts when `take_due` returns true. Cancelling clears the
//! deadline, so a cancelled timer can never fire.

/// A recurring interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u64,
    next_at: Option<u64>,
}

impl Ticker {
    /// Create a stopped ticker. A zero period is treated as 1 ms.
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            next_at: None,
        }
    }

    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Start (or restart) so the first tick is one period after `now_ms`.
    pub const fn start(&mut self, now_ms: u64) {
        self.next_at = Some(now_ms.saturating_add(self.period_ms));
    }

    pub const fn cancel(&mut self) {
        self.next_at = None;
    }

    pub const fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    /// When the next tick is due.
    pub const fn next_at(&self) -> Option<u64> {
        self.next_at
    }

    /// Returns true if a tick is due and schedules the following one.
    ///
    /// Missed periods collapse into a single tick.
    pub const fn take_due(&mut self, now_ms: u64) -> bool {
        let Some(at) = self.next_at else {
            return false;
        };
        if now_ms < at {
            return false;
        }
        let missed = (now_ms - at) / self.period_ms;
        self.next_at = Some(at.saturating_add((missed + 1).saturating_mul(self.period_ms)));
        true
    }
}

/// A one-shot timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeout {
    at: Option<u64>,
}

impl Timeout {
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arm to fire `delay_ms` after `now_ms`, replacing any pending deadline.
    pub const fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.at = Some(now_ms.saturating_add(delay_ms));
    }

    pub const fn cancel(&mut self) {
        self.at = None;
    }

    pub const fn is_pending(&self) -> bool {
        self.at.is_some()
    }

    pub const fn deadline(&self) -> Option<u64> {
        self.at
    }

    /// Returns true once when the deadline has passed.
    pub const fn take_due(&mut self, now_ms: u64) -> bool {
        match self.at {
            Some(at) if now_ms >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

/// The earlier of two optional deadlines.
pub fn earliest(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_is_idle_until_started() {
        let mut ticker = Ticker::new(100);
        assert!(!ticker.is_running());
        assert!(!ticker.take_due(1_000));
    }

    #[test]
    fn test_ticker_fires_each_period() {
        let mut ticker = Ticker::new(100);
        ticker.start(0);
        assert!(!ticker.take_due(99));
        assert!(ticker.take_due(100));
        assert!(!ticker.take_due(150));
        assert!(ticker.take_due(200));
        assert_eq!(ticker.next_at(), Some(300));
    }

    #[test]
    fn test_ticker_collapses_missed_periods() {
        let mut ticker = Ticker::new(100);
        ticker.start(0);
        assert!(ticker.take_due(450));
        assert_eq!(ticker.next_at(), Some(500));
        assert!(!ticker.take_due(499));
    }

    #[test]
    fn test_cancelled_ticker_never_fires() {
        let mut ticker = Ticker::new(100);
        ticker.start(0);
        ticker.cancel();
        assert!(!ticker.take_due(10_000));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        assert_eq!(Ticker::new(0).period_ms(), 1);
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut timeout = Timeout::new();
        timeout.arm(10, 50);
        assert!(!timeout.take_due(59));
        assert!(timeout.take_due(60));
        assert!(!timeout.take_due(61));
        assert!(!timeout.is_pending());
    }

    #[test]
    fn test_timeout_rearm_replaces_deadline() {
        let mut timeout = Timeout::new();
        timeout.arm(0, 50);
        timeout.arm(40, 50);
        assert!(!timeout.take_due(60));
        assert_eq!(timeout.deadline(), Some(90));
    }

    #[test]
    fn test_cancelled_timeout_never_fires() {
        let mut timeout = Timeout::new();
        timeout.arm(0, 50);
        timeout.cancel();
        assert!(!timeout.take_due(1_000));
    }

    #[test]
    fn test_earliest_picks_minimum() {
        assert_eq!(earliest(Some(5), Some(3)), Some(3));
        assert_eq!(earliest(None, Some(3)), Some(3));
        assert_eq!(earliest(Some(5), None), Some(5));
        assert_eq!(earliest(None, None), None);
    }
}
