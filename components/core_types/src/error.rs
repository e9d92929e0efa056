//! Scheduler error types and error handling.
//!
//! Two failure families exist and never mix: a [`TaskError`] is raised by a
//! task callback while it runs and is isolated at the scheduler boundary; a
//! [`ScheduleError`] rejects a misuse of the scheduling API before anything
//! is enqueued.

use std::fmt;

/// The kind of task-execution error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A task callback reported a failure.
    CallbackFailed,
    /// A callback passed an invalid argument to a collaborator.
    InvalidArgument,
    /// Internal scheduler error.
    Internal,
}

/// An error raised by a task callback.
///
/// Task errors are one-shot, like the tasks that raise them: the scheduler
/// reports the error and moves on to the next task in the queue.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, TaskError};
///
/// let error = TaskError::failed("resource vanished");
/// assert_eq!(error.kind, ErrorKind::CallbackFailed);
/// assert_eq!(error.message, "resource vanished");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl TaskError {
    /// Creates a [`ErrorKind::CallbackFailed`] error with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        TaskError {
            kind: ErrorKind::CallbackFailed,
            message: message.into(),
        }
    }

    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        TaskError {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::CallbackFailed => write!(f, "callback failed: {}", self.message),
            ErrorKind::InvalidArgument => write!(f, "invalid argument: {}", self.message),
            ErrorKind::Internal => write!(f, "internal error: {}", self.message),
        }
    }
}

impl std::error::Error for TaskError {}

/// A scheduling-misuse error, raised at the call site.
///
/// Misuse is rejected before the task is enqueued, so a failed scheduling
/// call leaves the scheduler's queues untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// A timer was scheduled with a negative delay.
    NegativeDelay(i64),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::NegativeDelay(ms) => {
                write!(f, "timer delay must be non-negative, got {}ms", ms)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

// Lets a callback propagate a scheduling misuse as its own failure with `?`.
impl From<ScheduleError> for TaskError {
    fn from(err: ScheduleError) -> Self {
        TaskError::new(ErrorKind::InvalidArgument, err.to_string())
    }
}
