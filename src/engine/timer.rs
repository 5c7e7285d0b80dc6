//! Countdown timer.
//!
//! Driven by the host's frame update; there is no timer thread.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Countdown clamped to `[0, max_time]` that expires exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    max_time: Duration,
    remaining: Duration,
    expired: bool,
}

impl GameTimer {
    /// Create a full timer.
    #[must_use]
    pub fn new(max_time: Duration) -> Self {
        Self {
            max_time,
            remaining: max_time,
            expired: false,
        }
    }

    /// Advance the clock by `delta`.
    ///
    /// Returns `true` on the tick where time runs out, and never again.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.expired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            self.expired = true;
            return true;
        }
        false
    }

    /// Add time, clamped to `max_time`. Ignored once expired.
    pub fn add_bonus(&mut self, amount: Duration) {
        if self.expired {
            return;
        }
        self.remaining = self.remaining.saturating_add(amount).min(self.max_time);
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn max_time(&self) -> Duration {
        self.max_time
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Remaining time as a fraction of `max_time`, for the life bar.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.max_time.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f32() / self.max_time.as_secs_f32()).clamp(0.0, 1.0)
    }
}
