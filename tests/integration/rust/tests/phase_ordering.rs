//! Cross-component ordering tests built directly on the scheduler API
//!
//! These cover the interactions the demo scenario exercises only obliquely:
//! timers interleaved with I/O on the virtual timeline, failure isolation
//! across phases, and the configurable I/O/check ordering.

use std::sync::{Arc, Mutex};

use core_types::{TaskError, TimeMs};
use task_scheduler::{CaptureSink, PhasePolicy, Scheduler};

type Order = Arc<Mutex<Vec<String>>>;

fn push(order: &Order, label: &str) {
    order.lock().unwrap().push(label.to_string());
}

#[test]
fn timers_and_io_interleave_on_the_virtual_timeline() {
    let mut scheduler = Scheduler::new().with_io_latency(20);
    let order: Order = Arc::new(Mutex::new(vec![]));

    let o = order.clone();
    scheduler
        .schedule_timer(10, move |_| {
            push(&o, "timer 10");
            Ok(())
        })
        .unwrap();

    let o = order.clone();
    scheduler
        .schedule_timer(30, move |_| {
            push(&o, "timer 30");
            Ok(())
        })
        .unwrap();

    let o = order.clone();
    scheduler.submit_io("blob", move |_| {
        push(&o, "read at 20");
        Ok(())
    });

    scheduler.run();
    assert_eq!(
        *order.lock().unwrap(),
        vec!["timer 10", "read at 20", "timer 30"]
    );
    assert_eq!(scheduler.now(), TimeMs::from_millis(30));
}

#[test]
fn failure_in_one_phase_leaves_other_phases_intact() {
    let sink = CaptureSink::new();
    let mut scheduler = Scheduler::new().with_trace_sink(sink.clone());
    let order: Order = Arc::new(Mutex::new(vec![]));

    scheduler
        .schedule_timer(0, |_| Err(TaskError::failed("timer exploded")))
        .unwrap();

    let o = order.clone();
    scheduler.schedule_check(move |_| {
        push(&o, "check still runs");
        Ok(())
    });

    let o = order.clone();
    scheduler.schedule_io_completion(move |_| {
        push(&o, "io still runs");
        Ok(())
    });

    let report = scheduler.run();
    assert_eq!(report.failed, 1);
    assert_eq!(
        *order.lock().unwrap(),
        vec!["io still runs", "check still runs"]
    );
    assert_eq!(scheduler.failures().len(), 1);
    assert!(sink.lines()[0].contains("timer exploded"));
}

#[test]
fn policy_controls_io_check_order_under_load() {
    for (policy, expected) in [
        (PhasePolicy::IoBeforeCheck, vec!["io", "check"]),
        (PhasePolicy::CheckBeforeIo, vec!["check", "io"]),
    ] {
        let mut scheduler = Scheduler::new().with_phase_policy(policy);
        let order: Order = Arc::new(Mutex::new(vec![]));

        let o = order.clone();
        scheduler.schedule_check(move |_| {
            push(&o, "check");
            Ok(())
        });

        let o = order.clone();
        scheduler.schedule_io_completion(move |_| {
            push(&o, "io");
            Ok(())
        });

        scheduler.run();
        assert_eq!(*order.lock().unwrap(), expected, "policy {:?}", policy);
    }
}

#[test]
fn deeply_nested_microtask_chains_terminate_in_one_phase() {
    let mut scheduler = Scheduler::new();
    let order: Order = Arc::new(Mutex::new(vec![]));

    fn chain(scheduler: &mut Scheduler, order: Order, depth: usize) {
        scheduler.schedule_microtask(move |sched| {
            push(&order, &format!("depth {}", depth));
            if depth < 5 {
                chain(sched, order, depth + 1);
            }
            Ok(())
        });
    }

    chain(&mut scheduler, order.clone(), 1);

    let o = order.clone();
    scheduler.schedule_check(move |_| {
        push(&o, "check");
        Ok(())
    });

    scheduler.run();
    // The whole chain drains before the cycle reaches the check phase.
    assert_eq!(
        *order.lock().unwrap(),
        vec!["depth 1", "depth 2", "depth 3", "depth 4", "depth 5", "check"]
    );
}
