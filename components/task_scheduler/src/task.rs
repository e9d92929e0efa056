//! Tasks: deferred, one-shot units of work.
//!
//! A [`Task`] pairs a boxed callback with the bookkeeping the scheduler needs
//! to order it: its [`TaskClass`], the logical time it was scheduled at, and
//! a monotone sequence number used as a stable tie-break.

use core_types::{TaskError, TimeMs};

use crate::scheduler::Scheduler;

/// The class of a task, naming the phase that will run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskClass {
    /// Highest-priority microtask, drained before everything else.
    ImmediateMicrotask,
    /// Promise-style microtask, drained after the immediate queue is empty.
    Microtask,
    /// Deadline-ordered timer callback.
    Timer,
    /// Post-I/O check callback, drained once per cycle.
    Check,
    /// Completion callback of a simulated I/O operation.
    IoCompletion,
}

impl TaskClass {
    /// Returns the phase name used in trace output.
    pub fn phase_name(self) -> &'static str {
        match self {
            TaskClass::ImmediateMicrotask => "immediate-microtask",
            TaskClass::Microtask => "microtask",
            TaskClass::Timer => "timer",
            TaskClass::Check => "check",
            TaskClass::IoCompletion => "io-completion",
        }
    }
}

/// The callback carried by a task.
///
/// Callbacks receive the scheduler handle explicitly; there is no ambient
/// global loop to reach for. A callback may schedule new tasks into any
/// queue, but newly scheduled work only becomes runnable on later scheduler
/// passes.
pub type TaskFn = Box<dyn FnOnce(&mut Scheduler) -> Result<(), TaskError>>;

/// A deferred unit of work.
///
/// Tasks are created by the scheduling calls, executed exactly once, then
/// discarded. There is no cancellation or re-execution.
pub struct Task {
    callback: TaskFn,
    class: TaskClass,
    scheduled_at: TimeMs,
    seq: u64,
}

impl Task {
    /// Creates a new task from a closure.
    pub fn new<F>(class: TaskClass, scheduled_at: TimeMs, seq: u64, f: F) -> Self
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        Self {
            callback: Box::new(f),
            class,
            scheduled_at,
            seq,
        }
    }

    /// Returns the task's class.
    pub fn class(&self) -> TaskClass {
        self.class
    }

    /// Returns the logical time at which the task was scheduled.
    pub fn scheduled_at(&self) -> TimeMs {
        self.scheduled_at
    }

    /// Returns the task's scheduler-wide sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Executes the task, consuming it.
    pub fn run(self, scheduler: &mut Scheduler) -> Result<(), TaskError> {
        (self.callback)(scheduler)
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task {{ class: {:?}, scheduled_at: {}, seq: {} }}",
            self.class, self.scheduled_at, self.seq
        )
    }
}
