//! One-second countdown used to bound a quiz attempt.

use std::time::Duration;

/// Wall-clock spacing between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Generation counter of a countdown run.
///
/// Every restart hands out a new epoch; a tick scheduled for an older epoch is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerEpoch(u64);

impl TimerEpoch {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Result of applying a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown still has time left.
    Running { remaining: u32 },
    /// The countdown hit zero on this tick (or was already at zero).
    Expired,
    /// The tick did not apply: the timer is inactive or the tick is stale.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    epoch: TimerEpoch,
}

impl Countdown {
    #[must_use]
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit: limit_secs,
            remaining: limit_secs,
            epoch: TimerEpoch::default(),
        }
    }

    /// Refill the countdown and start a new epoch.
    pub fn restart(&mut self) -> TimerEpoch {
        self.remaining = self.limit;
        self.epoch = self.epoch.next();
        self.epoch
    }

    /// Start a new epoch without refilling, so outstanding ticks become stale.
    pub fn invalidate(&mut self) {
        self.epoch = self.epoch.next();
    }

    /// Decrement by one second, never below zero.
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining == 0 {
            return TickOutcome::Expired;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining: self.remaining,
            }
        }
    }

    #[must_use]
    pub fn epoch(&self) -> TimerEpoch {
        self.epoch
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seconds consumed so far.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.limit - self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

/// Formats seconds as `m:ss`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}
