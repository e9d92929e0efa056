//! The scripted demo scenario.
//!
//! Rebuilds the classic single-file event-loop demonstration: two synchronous
//! trace lines bracket a mix of immediate microtasks, promise-style
//! microtasks, a 0 ms and a 50 ms timer, a check task, and one simulated file
//! read, several of which schedule follow-up work from inside their
//! callbacks. Running the scheduler afterwards produces the full ordering
//! trace.

use core_types::ScheduleError;
use task_scheduler::{CaptureSink, PhasePolicy, RunReport, Scheduler, TraceSink};

/// Installs the demo workload on `scheduler`, writing trace lines to `sink`.
///
/// The "start" and "end" lines are written synchronously while the scenario
/// is being scheduled, before anything deferred runs.
pub fn install<S>(scheduler: &mut Scheduler, sink: S) -> Result<(), ScheduleError>
where
    S: TraceSink + Clone + 'static,
{
    sink.write("start");

    let tick = sink.clone();
    scheduler.schedule_immediate_microtask(move |sched| {
        tick.write("tick 1");

        let nested = tick.clone();
        sched.schedule_immediate_microtask(move |_| {
            nested.write("tick 2");
            Ok(())
        });

        let promise = tick.clone();
        sched.schedule_microtask(move |_| {
            promise.write("promise in tick");
            Ok(())
        });

        Ok(())
    });

    let promise = sink.clone();
    scheduler.schedule_microtask(move |sched| {
        promise.write("promise 1");

        let chained = promise.clone();
        sched.schedule_microtask(move |_| {
            chained.write("promise 2");
            Ok(())
        });

        Ok(())
    });

    let timeout = sink.clone();
    scheduler.schedule_timer(0, move |sched| {
        timeout.write("timeout 1 (0ms)");

        let tick = timeout.clone();
        sched.schedule_immediate_microtask(move |_| {
            tick.write("tick in timeout 1");
            Ok(())
        });

        let promise = timeout.clone();
        sched.schedule_microtask(move |_| {
            promise.write("promise in timeout 1");
            Ok(())
        });

        Ok(())
    })?;

    let timeout = sink.clone();
    scheduler.schedule_timer(50, move |_| {
        timeout.write("timeout 2 (50ms)");
        Ok(())
    })?;

    let check = sink.clone();
    scheduler.schedule_check(move |sched| {
        check.write("check");

        let tick = check.clone();
        sched.schedule_immediate_microtask(move |_| {
            tick.write("tick in check");
            Ok(())
        });

        Ok(())
    });

    let read = sink.clone();
    scheduler.submit_io("demo-trace", move |sched| {
        read.write("read complete: demo-trace");

        let check = read.clone();
        sched.schedule_check(move |_| {
            check.write("check in read");
            Ok(())
        });

        let tick = read.clone();
        sched.schedule_immediate_microtask(move |_| {
            tick.write("tick in read");
            Ok(())
        });

        Ok(())
    });

    sink.write("end");
    Ok(())
}

/// Runs the demo with a capture sink and returns the trace plus the report.
pub fn run_captured(
    policy: PhasePolicy,
    io_latency_ms: u64,
) -> Result<(Vec<String>, RunReport), ScheduleError> {
    let sink = CaptureSink::new();
    let mut scheduler = Scheduler::new()
        .with_phase_policy(policy)
        .with_io_latency(io_latency_ms)
        .with_trace_sink(sink.clone());
    install(&mut scheduler, sink.clone())?;
    let report = scheduler.run();
    Ok((sink.lines(), report))
}
