//! Error types for the CLI

use core_types::ScheduleError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A scheduling call was misused while building the scenario
    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
