//! Logical time.
//!
//! The scheduler never reads a wall clock; all deadlines and ready-times are
//! expressed as [`TimeMs`] values on a virtual timeline that only moves when
//! the scheduler advances it.

use std::fmt;

/// A point on the scheduler's virtual timeline, in milliseconds.
///
/// # Examples
///
/// ```
/// use core_types::TimeMs;
///
/// let start = TimeMs::ZERO;
/// let deadline = start.saturating_add_ms(50);
/// assert!(deadline > start);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeMs(u64);

impl TimeMs {
    /// The origin of the virtual timeline.
    pub const ZERO: TimeMs = TimeMs(0);

    /// Creates a logical timestamp from a millisecond count.
    pub const fn from_millis(ms: u64) -> Self {
        TimeMs(ms)
    }

    /// Returns the timestamp as a millisecond count.
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Returns this timestamp shifted forward by `ms` milliseconds,
    /// saturating at the top of the timeline.
    pub const fn saturating_add_ms(self, ms: u64) -> Self {
        TimeMs(self.0.saturating_add(ms))
    }
}

impl fmt::Display for TimeMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
