//! Unit tests for FifoQueue and TimerQueue

use core_types::TimeMs;
use task_scheduler::{FifoQueue, Task, TaskClass, TimerQueue};

fn task(class: TaskClass, seq: u64) -> Task {
    Task::new(class, TimeMs::ZERO, seq, |_| Ok(()))
}

#[test]
fn fifo_queue_starts_empty() {
    let queue = FifoQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn fifo_queue_preserves_insertion_order() {
    let mut queue = FifoQueue::new();
    queue.enqueue(task(TaskClass::Check, 1));
    queue.enqueue(task(TaskClass::Check, 2));
    queue.enqueue(task(TaskClass::Check, 3));

    let seqs: Vec<u64> = std::iter::from_fn(|| queue.dequeue())
        .map(|t| t.seq())
        .collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}

#[test]
fn fifo_dequeue_on_empty_returns_none() {
    let mut queue = FifoQueue::new();
    assert!(queue.dequeue().is_none());
}

#[test]
fn timer_queue_orders_by_deadline() {
    let mut queue = TimerQueue::new();
    queue.schedule(TimeMs::from_millis(30), task(TaskClass::Timer, 1));
    queue.schedule(TimeMs::from_millis(10), task(TaskClass::Timer, 2));
    queue.schedule(TimeMs::from_millis(20), task(TaskClass::Timer, 3));

    let due = queue.take_due(TimeMs::from_millis(30));
    let seqs: Vec<u64> = due.iter().map(|t| t.seq()).collect();
    assert_eq!(seqs, vec![2, 3, 1]);
}

#[test]
fn timer_queue_breaks_deadline_ties_by_insertion() {
    let mut queue = TimerQueue::new();
    queue.schedule(TimeMs::from_millis(10), task(TaskClass::Timer, 5));
    queue.schedule(TimeMs::from_millis(10), task(TaskClass::Timer, 6));

    let due = queue.take_due(TimeMs::from_millis(10));
    let seqs: Vec<u64> = due.iter().map(|t| t.seq()).collect();
    assert_eq!(seqs, vec![5, 6]);
}

#[test]
fn timer_queue_only_releases_due_entries() {
    let mut queue = TimerQueue::new();
    queue.schedule(TimeMs::from_millis(10), task(TaskClass::Timer, 1));
    queue.schedule(TimeMs::from_millis(20), task(TaskClass::Timer, 2));

    assert!(queue.take_due(TimeMs::from_millis(5)).is_empty());
    assert_eq!(queue.take_due(TimeMs::from_millis(10)).len(), 1);
    assert_eq!(queue.next_deadline(), Some(TimeMs::from_millis(20)));
    assert!(!queue.is_empty());
}
