//! One-shot, cancelable level advance
//!
//! When a round ends the next level starts after a short pause. Instead of a
//! detached callback the owner holds an `AdvanceTimer` and polls it from its
//! event loop; a cancelled or dropped timer never fires.

use super::Session;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AdvanceTimer {
    deadline: Instant,
    next: Session,
    armed: bool,
}

impl AdvanceTimer {
    /// Arm a timer that yields `next` once `delay` has elapsed after `now`
    #[must_use]
    pub fn schedule(now: Instant, delay: Duration, next: Session) -> Self {
        log::debug!(
            "advance to level {} scheduled in {}ms",
            next.level(),
            delay.as_millis()
        );
        Self {
            deadline: now + delay,
            next,
            armed: true,
        }
    }

    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Session the timer will hand over
    #[must_use]
    pub const fn next_session(&self) -> Session {
        self.next
    }

    /// Time left until the deadline, zero once due
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.armed && now >= self.deadline
    }

    /// Disarm the timer; later polls return `None`
    pub fn cancel(&mut self) {
        if self.armed {
            log::debug!("advance to level {} cancelled", self.next.level());
        }
        self.armed = false;
    }

    /// Fire at most once: returns the next session the first time the timer is
    /// polled at or after its deadline
    pub fn poll(&mut self, now: Instant) -> Option<Session> {
        if !self.is_due(now) {
            return None;
        }
        self.armed = false;
        log::debug!("advance to level {} fired", self.next.level());
        Some(self.next)
    }
}
