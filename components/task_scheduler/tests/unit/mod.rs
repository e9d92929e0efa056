//! Unit test harness for the task_scheduler component

mod io_test;
mod queue_test;
