use crate::writers::Logger;
use std::io::Write;

/// A [`Logger`] that writes each non-empty line, followed by `"\n"`, to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    /// Constructor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for StderrSink {
    fn log(&self, line: &str) {
        if !line.is_empty() {
            let mut w = std::io::stderr().lock();
            writeln!(w, "{line}").ok();
        }
    }
}
