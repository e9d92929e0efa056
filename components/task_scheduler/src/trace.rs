//! Trace output sinks.
//!
//! Demo callbacks and the scheduler's failure reports write human-readable
//! lines through a [`TraceSink`]. The default sink prints to stdout; tests
//! and the CLI's quiet mode use [`CaptureSink`] to collect lines instead.

use std::sync::Arc;

use parking_lot::Mutex;

/// Trace output writer trait.
pub trait TraceSink {
    /// Writes one trace line.
    fn write(&self, line: &str);
}

/// Sink that prints each line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn write(&self, line: &str) {
        println!("{}", line);
    }
}

/// Sink that collects lines into a shared buffer.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// scheduler and any number of callbacks write through others.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Creates a sink with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns the number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl TraceSink for CaptureSink {
    fn write(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
