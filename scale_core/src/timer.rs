//! Cancellable long-press timer.

use std::time::{Duration, Instant};

/// One-shot hold deadline: armed on press-start, cancelled by any
/// terminating press event, fired at most once when the deadline elapses.
#[derive(Debug, Default)]
pub struct HoldTimer {
    deadline: Option<Instant>,
}

impl HoldTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire once the deadline has been reached while the press is still
    /// held. Disarms on fire.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Strict variant used when the press is released: a release on the
    /// threshold wins over the timer and must not fire.
    pub fn fire_if_passed(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now > d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
