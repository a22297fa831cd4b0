//! Clocks and transient display timers
//!
//! Timers are plain deadlines keyed by [`TimerKind`]. Scheduling a kind
//! replaces its previous deadline; other kinds are left alone. The host
//! drives expiry by calling [`TransientTimers::take_due`] with the current
//! time, which keeps everything single-threaded and deterministic.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::trace;

/// Source of monotonic milliseconds
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Creates a clock starting at zero now
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same time, so a test can keep one handle while the
/// calculator owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    current_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at a fixed time
    #[must_use]
    pub fn at(time_ms: u64) -> Self {
        Self {
            current_ms: Arc::new(AtomicU64::new(time_ms)),
        }
    }

    /// Moves time forward
    pub fn advance(&self, ms: u64) {
        self.current_ms.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jumps to an absolute time
    pub fn set(&self, time_ms: u64) {
        self.current_ms.store(time_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.current_ms.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// The independent transient display timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Clears the result text
    ResultClear,
    /// Hides the easter indicator
    EasterHide,
}

impl TimerKind {
    /// Stable name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ResultClear => "result-clear",
            Self::EasterHide => "easter-hide",
        }
    }
}

/// Pending deadlines, at most one per kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransientTimers {
    pending: BTreeMap<TimerKind, u64>,
}

impl TransientTimers {
    /// Creates an empty timer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire at `deadline_ms`, cancelling its previous
    /// instance. Returns the replaced deadline, if any.
    pub fn schedule(&mut self, kind: TimerKind, deadline_ms: u64) -> Option<u64> {
        let replaced = self.pending.insert(kind, deadline_ms);
        trace!(timer = kind.name(), deadline_ms, ?replaced, "scheduled");
        replaced
    }

    /// Cancels `kind`, returning whether it was pending
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let cancelled = self.pending.remove(&kind).is_some();
        if cancelled {
            trace!(timer = kind.name(), "cancelled");
        }
        cancelled
    }

    /// Deadline of `kind`, if pending
    #[must_use]
    pub fn deadline(&self, kind: TimerKind) -> Option<u64> {
        self.pending.get(&kind).copied()
    }

    /// True if `kind` is pending
    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    /// True if nothing is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.values().copied().min()
    }

    /// Removes and returns every kind whose deadline is at or before `now_ms`
    pub fn take_due(&mut self, now_ms: u64) -> Vec<TimerKind> {
        let due: Vec<TimerKind> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now_ms)
            .map(|(&kind, _)| kind)
            .collect();
        for kind in &due {
            self.pending.remove(kind);
            trace!(timer = kind.name(), now_ms, "expired");
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(250);
        assert_eq!(other.now_ms(), 250);
        other.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn test_manual_clock_at() {
        assert_eq!(ManualClock::at(42).now_ms(), 42);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_clock_by_reference() {
        fn read<C: Clock>(clock: C) -> u64 {
            clock.now_ms()
        }
        let clock = ManualClock::at(7);
        assert_eq!(read(&clock), 7);
    }

    #[test]
    fn test_schedule_replaces_same_kind_only() {
        let mut timers = TransientTimers::new();
        assert_eq!(timers.schedule(TimerKind::ResultClear, 100), None);
        assert_eq!(timers.schedule(TimerKind::EasterHide, 150), None);
        assert_eq!(timers.schedule(TimerKind::ResultClear, 300), Some(100));
        assert_eq!(timers.deadline(TimerKind::ResultClear), Some(300));
        assert_eq!(timers.deadline(TimerKind::EasterHide), Some(150));
    }

    #[test]
    fn test_take_due() {
        let mut timers = TransientTimers::new();
        timers.schedule(TimerKind::ResultClear, 100);
        timers.schedule(TimerKind::EasterHide, 200);

        assert!(timers.take_due(99).is_empty());
        assert_eq!(timers.take_due(100), vec![TimerKind::ResultClear]);
        assert!(!timers.is_pending(TimerKind::ResultClear));
        assert_eq!(timers.next_deadline(), Some(200));
        assert_eq!(timers.take_due(1_000), vec![TimerKind::EasterHide]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut timers = TransientTimers::new();
        timers.schedule(TimerKind::EasterHide, 5);
        assert!(timers.cancel(TimerKind::EasterHide));
        assert!(!timers.cancel(TimerKind::EasterHide));
        assert!(timers.take_due(10).is_empty());
    }

    #[test]
    fn test_timer_kind_names() {
        assert_eq!(TimerKind::ResultClear.name(), "result-clear");
        assert_eq!(TimerKind::EasterHide.name(), "easter-hide");
    }
}
