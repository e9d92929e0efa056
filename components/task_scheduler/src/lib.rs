//! Cooperative task scheduler with deterministic phase ordering.
//!
//! This crate reproduces the relative firing order of several classes of
//! deferred callbacks in a single-threaded cooperative runtime:
//! - [`Scheduler`] - the phase-ordered event loop and its scheduling API
//! - [`Task`] / [`TaskClass`] - deferred one-shot units of work
//! - [`IoDriver`] - simulated I/O collaborator on the virtual timeline
//! - [`TraceSink`] - trace/failure output, with stdout and capture sinks
//!
//! # Overview
//!
//! Each cycle drains immediate microtasks, then microtasks, then due timers,
//! then ready I/O completions, then the check queue, re-draining both
//! microtask queues after every timer, I/O, and check task. Logical time
//! never moves while work is runnable; when everything left lies in the
//! future, the clock jumps to the earliest deadline or ready-time.
//!
//! # Examples
//!
//! ```
//! use task_scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule_timer(0, |s| {
//!     s.schedule_immediate_microtask(|_| Ok(()));
//!     Ok(())
//! }).unwrap();
//! let report = scheduler.run();
//! assert_eq!(report.executed, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod io;
pub mod queue;
pub mod scheduler;
pub mod task;
pub mod trace;

// Re-export main types at crate root
pub use clock::VirtualClock;
pub use io::IoDriver;
pub use queue::{FifoQueue, TimerQueue};
pub use scheduler::{PhasePolicy, RunReport, Scheduler};
pub use task::{Task, TaskClass, TaskFn};
pub use trace::{CaptureSink, StdoutSink, TraceSink};
