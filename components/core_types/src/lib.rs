//! Shared types for the cooperative task scheduler.
//!
//! This crate provides the leaf types every component depends on:
//! - [`TimeMs`] - logical (virtual) time in milliseconds
//! - [`TaskError`] / [`ErrorKind`] - failures raised by task callbacks
//! - [`ScheduleError`] - scheduling misuse rejected before anything is enqueued
//!
//! # Examples
//!
//! ```
//! use core_types::TimeMs;
//!
//! let t = TimeMs::ZERO.saturating_add_ms(50);
//! assert_eq!(t.millis(), 50);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod time;

// Re-export main types at crate root
pub use error::{ErrorKind, ScheduleError, TaskError};
pub use time::TimeMs;
