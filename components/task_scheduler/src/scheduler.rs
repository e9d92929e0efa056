//! Cooperative task scheduler.
//!
//! The scheduler owns every queue and is the only thing that mutates them;
//! callbacks submit new work through the scheduling calls but never touch
//! queue internals. One task runs at a time, to completion, and each cycle
//! walks the phases in a fixed order:
//!
//! 1. Drain the immediate-microtask queue completely
//! 2. Drain the microtask queue, re-draining immediates between entries
//! 3. Run all currently-due timers in `(deadline, insertion)` order,
//!    re-draining both microtask queues after each
//! 4. Run ready I/O completions FIFO, with the same re-drain
//! 5. Drain the check queue once, with the same re-drain
//! 6. Stop if nothing is pending; otherwise jump the virtual clock to the
//!    earliest deadline or ready-time and start the next cycle
//!
//! Steps 4 and 5 swap under [`PhasePolicy::CheckBeforeIo`].

use core_types::{ScheduleError, TaskError, TimeMs};

use crate::clock::VirtualClock;
use crate::io::IoDriver;
use crate::queue::{FifoQueue, TimerQueue};
use crate::task::{Task, TaskClass};
use crate::trace::{StdoutSink, TraceSink};

/// Relative order of the I/O-completion and check phases within a cycle.
///
/// The demo this scheduler reproduces leaves the cross-cycle ordering of
/// these two phases environment-dependent, so the policy is explicit rather
/// than baked in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhasePolicy {
    /// I/O completions run before the check queue (the default).
    #[default]
    IoBeforeCheck,
    /// The check queue runs before I/O completions.
    CheckBeforeIo,
}

/// Counts from one `run()` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Tasks executed, successful or not.
    pub executed: usize,
    /// Tasks whose callback returned an error.
    pub failed: usize,
}

/// The cooperative task scheduler.
///
/// Explicitly constructed and owned by the caller; there is no ambient
/// global loop. Callbacks receive `&mut Scheduler` and schedule follow-up
/// work through it.
///
/// # Examples
///
/// ```
/// use task_scheduler::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule_microtask(|_| Ok(()));
/// let report = scheduler.run();
/// assert_eq!(report.executed, 1);
/// ```
pub struct Scheduler {
    immediate: FifoQueue,
    microtasks: FifoQueue,
    timers: TimerQueue,
    check: FifoQueue,
    io: IoDriver,
    clock: VirtualClock,
    policy: PhasePolicy,
    io_latency_ms: u64,
    sink: Box<dyn TraceSink>,
    failures: Vec<TaskError>,
    next_seq: u64,
    executed: usize,
    failed: usize,
}

impl Scheduler {
    /// Creates a scheduler with empty queues, the default phase policy, zero
    /// I/O latency, and stdout failure reporting.
    pub fn new() -> Self {
        Self {
            immediate: FifoQueue::new(),
            microtasks: FifoQueue::new(),
            timers: TimerQueue::new(),
            check: FifoQueue::new(),
            io: IoDriver::new(),
            clock: VirtualClock::new(),
            policy: PhasePolicy::default(),
            io_latency_ms: 0,
            sink: Box::new(StdoutSink),
            failures: Vec::new(),
            next_seq: 0,
            executed: 0,
            failed: 0,
        }
    }

    /// Sets the relative order of the I/O-completion and check phases.
    pub fn with_phase_policy(mut self, policy: PhasePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the simulated latency applied to [`Scheduler::submit_io`]
    /// operations.
    pub fn with_io_latency(mut self, latency_ms: u64) -> Self {
        self.io_latency_ms = latency_ms;
        self
    }

    /// Replaces the sink that receives task-failure reports.
    pub fn with_trace_sink<S: TraceSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Returns the current logical time.
    pub fn now(&self) -> TimeMs {
        self.clock.now()
    }

    /// Returns the errors collected from failed tasks, oldest first.
    pub fn failures(&self) -> &[TaskError] {
        &self.failures
    }

    /// Returns the collected failures, leaving the list empty.
    pub fn take_failures(&mut self) -> Vec<TaskError> {
        std::mem::take(&mut self.failures)
    }

    /// Returns the number of tasks waiting in any queue, including
    /// outstanding simulated I/O.
    pub fn pending_tasks(&self) -> usize {
        self.immediate.len()
            + self.microtasks.len()
            + self.timers.len()
            + self.check.len()
            + self.io.outstanding()
    }

    /// Returns true if no work is pending anywhere.
    pub fn is_idle(&self) -> bool {
        self.pending_tasks() == 0
    }

    /// Enqueues an immediate microtask.
    ///
    /// The immediate queue is drained fully, including anything it enqueues
    /// into itself, before any other queue is touched.
    pub fn schedule_immediate_microtask<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        let task = self.make_task(TaskClass::ImmediateMicrotask, f);
        self.immediate.enqueue(task);
    }

    /// Enqueues a promise-style microtask, drained after the immediate queue
    /// is empty and before timers, I/O, and check.
    pub fn schedule_microtask<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        let task = self.make_task(TaskClass::Microtask, f);
        self.microtasks.enqueue(task);
    }

    /// Enqueues a timer with deadline `now + delay_ms`.
    ///
    /// Timers fire only once due, ordered by deadline with insertion order
    /// breaking ties. A negative delay is rejected before anything is
    /// enqueued.
    pub fn schedule_timer<F>(&mut self, delay_ms: i64, f: F) -> Result<(), ScheduleError>
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        if delay_ms < 0 {
            return Err(ScheduleError::NegativeDelay(delay_ms));
        }
        let deadline = self.clock.now().saturating_add_ms(delay_ms as u64);
        let task = self.make_task(TaskClass::Timer, f);
        self.timers.schedule(deadline, task);
        Ok(())
    }

    /// Enqueues a check task, drained once per cycle after the timer phase.
    pub fn schedule_check<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        let task = self.make_task(TaskClass::Check, f);
        self.check.enqueue(task);
    }

    /// Enqueues the completion of an I/O operation that has already
    /// finished.
    ///
    /// The completion becomes runnable in the next I/O phase that takes a
    /// ready-set snapshot, never in one already in progress.
    pub fn schedule_io_completion<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        let now = self.clock.now();
        let task = self.make_task(TaskClass::IoCompletion, f);
        self.io.submit("<completed>", now, task);
    }

    /// Submits a simulated I/O operation against `resource`.
    ///
    /// The completion callback becomes runnable once the configured latency
    /// has elapsed on the virtual timeline. The operation counts as
    /// outstanding I/O until it runs, so `run()` will not terminate ahead of
    /// it.
    pub fn submit_io<F>(&mut self, resource: &str, f: F)
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        let ready_at = self.clock.now().saturating_add_ms(self.io_latency_ms);
        let task = self.make_task(TaskClass::IoCompletion, f);
        self.io.submit(resource, ready_at, task);
    }

    /// Runs repeating cycles until every queue is empty and no simulated I/O
    /// is outstanding.
    ///
    /// Calling `run()` again once drained is a no-op; no callback ever fires
    /// twice.
    pub fn run(&mut self) -> RunReport {
        let executed_before = self.executed;
        let failed_before = self.failed;

        while !self.is_idle() {
            self.run_cycle();
            if self.is_idle() {
                break;
            }
            if !self.has_runnable_work() {
                match self.next_wakeup() {
                    Some(instant) => self.clock.advance_to(instant),
                    // Pending but unreachable work cannot exist; bail rather
                    // than spin.
                    None => break,
                }
            }
        }

        RunReport {
            executed: self.executed - executed_before,
            failed: self.failed - failed_before,
        }
    }

    /// Runs one full cycle of phases at the current logical time.
    pub fn run_cycle(&mut self) {
        self.drain_microtasks();

        let due = self.timers.take_due(self.clock.now());
        for task in due {
            self.execute(task);
            self.drain_microtasks();
        }

        match self.policy {
            PhasePolicy::IoBeforeCheck => {
                self.run_io_phase();
                self.run_check_phase();
            }
            PhasePolicy::CheckBeforeIo => {
                self.run_check_phase();
                self.run_io_phase();
            }
        }
    }

    /// Drains both microtask queues.
    ///
    /// The immediate queue is emptied first; after each microtask, any
    /// immediates it scheduled run before the next microtask is taken.
    pub fn drain_microtasks(&mut self) {
        loop {
            while let Some(task) = self.immediate.dequeue() {
                self.execute(task);
            }
            match self.microtasks.dequeue() {
                Some(task) => self.execute(task),
                None => break,
            }
        }
    }

    fn run_io_phase(&mut self) {
        let ready = self.io.take_ready(self.clock.now());
        for task in ready {
            self.execute(task);
            self.drain_microtasks();
        }
    }

    // Check runs against a snapshot of the queue: check tasks scheduled from
    // inside the phase wait for the next cycle.
    fn run_check_phase(&mut self) {
        let mut remaining = self.check.len();
        while remaining > 0 {
            if let Some(task) = self.check.dequeue() {
                self.execute(task);
                self.drain_microtasks();
            }
            remaining -= 1;
        }
    }

    fn execute(&mut self, task: Task) {
        self.executed += 1;
        let class = task.class();
        let scheduled_at = task.scheduled_at();
        if let Err(err) = task.run(self) {
            self.failed += 1;
            self.sink.write(&format!(
                "[scheduler] {} task (scheduled at {}) failed: {}",
                class.phase_name(),
                scheduled_at,
                err
            ));
            self.failures.push(err);
        }
    }

    fn make_task<F>(&mut self, class: TaskClass, f: F) -> Task
    where
        F: FnOnce(&mut Scheduler) -> Result<(), TaskError> + 'static,
    {
        let seq = self.next_seq;
        self.next_seq += 1;
        Task::new(class, self.clock.now(), seq, f)
    }

    fn has_runnable_work(&self) -> bool {
        if !self.immediate.is_empty() || !self.microtasks.is_empty() || !self.check.is_empty() {
            return true;
        }
        let now = self.clock.now();
        matches!(self.timers.next_deadline(), Some(deadline) if deadline <= now)
            || matches!(self.io.next_ready(), Some(ready) if ready <= now)
    }

    fn next_wakeup(&self) -> Option<TimeMs> {
        match (self.timers.next_deadline(), self.io.next_ready()) {
            (Some(deadline), Some(ready)) => Some(deadline.min(ready)),
            (Some(deadline), None) => Some(deadline),
            (None, Some(ready)) => Some(ready),
            (None, None) => None,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.clock.now())
            .field("immediate", &self.immediate.len())
            .field("microtasks", &self.microtasks.len())
            .field("timers", &self.timers.len())
            .field("check", &self.check.len())
            .field("outstanding_io", &self.io.outstanding())
            .field("policy", &self.policy)
            .finish()
    }
}
