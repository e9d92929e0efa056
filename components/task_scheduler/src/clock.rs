//! Virtual clock.
//!
//! Logical time stands still while tasks run and only moves when the
//! scheduler has nothing runnable: it then jumps straight to the earliest
//! pending deadline or ready-time. The clock is monotone; an advance to a
//! past instant is a no-op.

use core_types::TimeMs;

/// The scheduler's source of logical time.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: TimeMs,
}

impl VirtualClock {
    /// Creates a clock at the origin of the timeline.
    pub fn new() -> Self {
        Self { now: TimeMs::ZERO }
    }

    /// Returns the current logical time.
    pub fn now(&self) -> TimeMs {
        self.now
    }

    /// Moves the clock forward to `instant`. Never moves backward.
    pub fn advance_to(&mut self, instant: TimeMs) {
        if instant > self.now {
            self.now = instant;
        }
    }
}
