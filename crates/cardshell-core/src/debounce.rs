//! Deadline-driven helpers for the UI event loop.
//!
//! Neither type owns a thread. The event loop asks for the next deadline
//! (for `ControlFlow::WaitUntil`) and polls with the current time.

use std::time::{Duration, Instant};

/// Trailing debouncer.
///
/// Every trigger pushes the deadline to `now + interval`. [`Debouncer::poll`]
/// reports `true` once, after triggers have stopped for a full interval, so
/// the last state of a burst is always acted on.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// The quiet interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record an event at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Whether a trailing fire is outstanding.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the outstanding fire is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire if the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any outstanding fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// A single delayed action.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    /// An unarmed one-shot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm to fire `delay` after `now`, replacing any earlier schedule.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Whether armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// When it is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire (and disarm) if due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// The earlier of two optional deadlines.
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
