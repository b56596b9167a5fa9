//! Restartable delay for coalescing bursts of resize events

use std::time::{Duration, Instant};

use crate::defaults::RESIZE_DEBOUNCE;

/// A single pending deadline. Each [`trigger`](Debouncer::trigger) pushes it
/// back; [`poll`](Debouncer::poll) reports it once it has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(RESIZE_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm, or re-arm, the deadline at `now + delay`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True exactly once per armed deadline, on the first poll at or after it.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the deadline, or `None` when idle.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
