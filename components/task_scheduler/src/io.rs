//! Simulated I/O collaborator.
//!
//! The driver stands in for the runtime's I/O subsystem: callers submit an
//! operation against a named resource, and its completion task becomes
//! runnable once the operation's ready-time has passed on the virtual
//! timeline. No real file or network access happens here; the resource name
//! exists only for trace and debug output.

use std::collections::VecDeque;

use core_types::TimeMs;

use crate::task::Task;

/// A pending simulated I/O operation.
#[derive(Debug)]
struct IoOperation {
    resource: String,
    ready_at: TimeMs,
    task: Task,
}

/// The scheduler's simulated I/O driver.
///
/// Operations complete in submission order among those whose ready-time has
/// passed, which keeps the I/O-completion phase FIFO.
#[derive(Debug, Default)]
pub struct IoDriver {
    pending: VecDeque<IoOperation>,
}

impl IoDriver {
    /// Creates a driver with no outstanding operations.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Submits an operation whose completion task becomes runnable at
    /// `ready_at`.
    pub fn submit(&mut self, resource: &str, ready_at: TimeMs, task: Task) {
        self.pending.push_back(IoOperation {
            resource: resource.to_string(),
            ready_at,
            task,
        });
    }

    /// Removes and returns the completion tasks of every operation ready at
    /// `now`, in submission order.
    pub fn take_ready(&mut self, now: TimeMs) -> Vec<Task> {
        let mut ready = Vec::new();
        let pending = std::mem::take(&mut self.pending);
        for op in pending {
            if op.ready_at <= now {
                ready.push(op.task);
            } else {
                self.pending.push_back(op);
            }
        }
        ready
    }

    /// Returns the earliest ready-time among outstanding operations.
    pub fn next_ready(&self) -> Option<TimeMs> {
        self.pending.iter().map(|op| op.ready_at).min()
    }

    /// Returns the number of outstanding operations.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Returns the resource names of outstanding operations, oldest first.
    pub fn outstanding_resources(&self) -> Vec<&str> {
        self.pending.iter().map(|op| op.resource.as_str()).collect()
    }
}
