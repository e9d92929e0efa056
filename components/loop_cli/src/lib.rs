//! Deferred-callback ordering demo CLI
//!
//! Provides the argument parser, error types, and the scripted scenario the
//! `loop-trace` binary replays against the cooperative task scheduler.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod scenario;

pub use cli::Cli;
pub use error::{CliError, CliResult};
