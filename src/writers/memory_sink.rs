use crate::{writers::Logger, LINE_TERMINATOR};
use std::{
    ops::Deref,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// A [`Logger`] that collects all lines in memory.
///
/// Each non-empty line is appended, followed by `"\r\n"`; empty lines are ignored.
/// The collected text is available via [`MemorySink::data`].
///
/// There is no size limit; the buffer grows as long as the sink lives.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives access to everything that was written so far.
    ///
    /// Writes to this sink wait while the returned view is alive,
    /// so don't keep it around longer than needed.
    pub fn data(&self) -> MemoryView<'_> {
        MemoryView(self.lock_buffer())
    }

    fn lock_buffer(&self) -> MutexGuard<'_, String> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for MemorySink {
    fn log(&self, line: &str) {
        if !line.is_empty() {
            let mut buffer = self.lock_buffer();
            buffer.push_str(line);
            buffer.push_str(LINE_TERMINATOR);
        }
    }
}

/// Borrowed view on the text of a [`MemorySink`].
pub struct MemoryView<'a>(MutexGuard<'a, String>);

impl Deref for MemoryView<'_> {
    type Target = str;
    fn deref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for MemoryView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&**self, f)
    }
}
