//! Task queue management.
//!
//! Two queue shapes cover all five task classes: [`FifoQueue`] for the
//! classes that run in submission order, and [`TimerQueue`] for deadline
//! ordering with a stable `(deadline, seq)` tie-break.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use core_types::TimeMs;

use crate::task::Task;

/// A FIFO queue of tasks of one class.
///
/// Used for the immediate-microtask, microtask, and check classes. Tasks
/// enqueued while a drain is in progress land at the back and never reorder
/// the entries already queued.
#[derive(Debug, Default)]
pub struct FifoQueue {
    queue: VecDeque<Task>,
}

impl FifoQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Adds a task to the back of the queue.
    pub fn enqueue(&mut self, task: Task) {
        self.queue.push_back(task);
    }

    /// Removes and returns the task at the front of the queue.
    pub fn dequeue(&mut self) -> Option<Task> {
        self.queue.pop_front()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A timer entry: a task plus its computed deadline.
#[derive(Debug)]
struct TimerEntry {
    deadline: TimeMs,
    seq: u64,
    task: Task,
}

// Ordering is by (deadline, seq) only; seq is unique per scheduler, so equal
// deadlines fall back to insertion order.
impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.deadline, self.seq).cmp(&(other.deadline, other.seq))
    }
}

/// A deadline-ordered queue of timer tasks.
///
/// Backed by a min-heap on `(deadline, seq)`. A timer becomes due when its
/// deadline is at or before the current logical time; due timers are taken
/// as a snapshot so that timers scheduled mid-phase wait for the next pass.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<TimerEntry>>,
}

impl TimerQueue {
    /// Creates a new empty timer queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Adds a timer task with the given deadline.
    pub fn schedule(&mut self, deadline: TimeMs, task: Task) {
        let seq = task.seq();
        self.heap.push(Reverse(TimerEntry {
            deadline,
            seq,
            task,
        }));
    }

    /// Removes and returns every timer due at `now`, in firing order.
    pub fn take_due(&mut self, now: TimeMs) -> Vec<Task> {
        let mut due = Vec::new();
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.deadline > now {
                break;
            }
            if let Some(Reverse(entry)) = self.heap.pop() {
                due.push(entry.task);
            }
        }
        due
    }

    /// Returns the earliest pending deadline, if any timers are queued.
    pub fn next_deadline(&self) -> Option<TimeMs> {
        self.heap.peek().map(|Reverse(entry)| entry.deadline)
    }

    /// Returns true if no timers are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued timers.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
