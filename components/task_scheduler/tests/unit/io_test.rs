//! Unit tests for the simulated I/O driver

use core_types::TimeMs;
use task_scheduler::{IoDriver, Task, TaskClass};

fn completion(seq: u64) -> Task {
    Task::new(TaskClass::IoCompletion, TimeMs::ZERO, seq, |_| Ok(()))
}

#[test]
fn new_driver_has_nothing_outstanding() {
    let driver = IoDriver::new();
    assert_eq!(driver.outstanding(), 0);
    assert!(driver.next_ready().is_none());
}

#[test]
fn operation_stays_outstanding_until_ready_time() {
    let mut driver = IoDriver::new();
    driver.submit("app.log", TimeMs::from_millis(15), completion(1));

    assert!(driver.take_ready(TimeMs::from_millis(14)).is_empty());
    assert_eq!(driver.outstanding(), 1);

    let ready = driver.take_ready(TimeMs::from_millis(15));
    assert_eq!(ready.len(), 1);
    assert_eq!(driver.outstanding(), 0);
}

#[test]
fn ready_completions_keep_submission_order() {
    let mut driver = IoDriver::new();
    driver.submit("a", TimeMs::ZERO, completion(1));
    driver.submit("b", TimeMs::ZERO, completion(2));
    driver.submit("c", TimeMs::ZERO, completion(3));

    let seqs: Vec<u64> = driver
        .take_ready(TimeMs::ZERO)
        .iter()
        .map(|t| t.seq())
        .collect();
    assert_eq!(seqs, vec![1, 2, 3]);
}

#[test]
fn next_ready_reports_earliest_outstanding_operation() {
    let mut driver = IoDriver::new();
    driver.submit("slow", TimeMs::from_millis(40), completion(1));
    driver.submit("fast", TimeMs::from_millis(10), completion(2));

    assert_eq!(driver.next_ready(), Some(TimeMs::from_millis(10)));
    assert_eq!(driver.outstanding_resources(), vec!["slow", "fast"]);
}
