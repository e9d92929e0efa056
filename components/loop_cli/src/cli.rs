//! Command-line arguments for the loop-trace binary.

use clap::Parser;
use task_scheduler::PhasePolicy;

/// Replays a deferred-callback ordering demo on the cooperative scheduler.
#[derive(Parser, Debug)]
#[command(
    name = "loop-trace",
    version,
    about = "Replays the deferred-callback ordering demo on the cooperative task scheduler"
)]
pub struct Cli {
    /// Run the check phase before the I/O-completion phase in each cycle
    #[arg(long)]
    pub check_before_io: bool,

    /// Simulated latency applied to I/O operations, in virtual milliseconds
    #[arg(long, default_value_t = 0)]
    pub io_latency: u64,

    /// Capture the trace instead of printing it; only the summary is shown
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Returns the phase policy selected by the flags.
    pub fn phase_policy(&self) -> PhasePolicy {
        if self.check_before_io {
            PhasePolicy::CheckBeforeIo
        } else {
            PhasePolicy::IoBeforeCheck
        }
    }
}
