//! Deferred-callback ordering demo
//!
//! Entry point for the loop-trace binary. Parses CLI arguments, installs the
//! demo scenario on a scheduler, and runs it to completion.

use clap::Parser as ClapParser;
use loop_cli::{scenario, Cli, CliError, CliResult};
use task_scheduler::{CaptureSink, RunReport, Scheduler, StdoutSink};

fn run(cli: &Cli) -> CliResult<RunReport> {
    if cli.quiet {
        let sink = CaptureSink::new();
        let mut scheduler = Scheduler::new()
            .with_phase_policy(cli.phase_policy())
            .with_io_latency(cli.io_latency)
            .with_trace_sink(sink.clone());
        scenario::install(&mut scheduler, sink.clone())?;
        let report = scheduler.run();
        println!("captured {} trace lines", sink.len());
        Ok(report)
    } else {
        let mut scheduler = Scheduler::new()
            .with_phase_policy(cli.phase_policy())
            .with_io_latency(cli.io_latency)
            .with_trace_sink(StdoutSink);
        scenario::install(&mut scheduler, StdoutSink)?;
        Ok(scheduler.run())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            println!(
                "executed {} tasks ({} failed)",
                report.executed, report.failed
            );
            if report.failed > 0 {
                std::process::exit(1);
            }
        }
        Err(CliError::Schedule(e)) => {
            eprintln!("Scheduling Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
