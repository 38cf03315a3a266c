use crate::writers::Logger;
use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError},
};

/// A [`Logger`] that writes each line to all loggers it holds, in the order in which
/// they were added.
///
/// All methods take the same single lock, so a broadcast, an addition, a removal
/// and dropping the `MultiLogger` never overlap. A slow sink thus delays everything else,
/// which is acceptable for the low rate of log lines this is made for.
///
/// A sink that panics is skipped for the current line; the panic does not reach the caller.
///
/// `MultiLogger` itself implements `Logger`, so instances can be nested.
///
/// # Example
///
/// ```rust
/// use fanout_log::{writers::{Logger, MemorySink}, MultiLogger};
/// use std::sync::Arc;
///
/// let multi = MultiLogger::new();
/// let memory = Arc::new(MemorySink::new());
/// multi.add_logger(memory.clone());
/// multi.log("hello");
/// assert_eq!(&*memory.data(), "hello\r\n");
/// ```
#[derive(Default)]
pub struct MultiLogger {
    loggers: Mutex<Vec<Arc<dyn Logger>>>,
}

impl MultiLogger {
    /// Creates an instance without any loggers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a logger; it receives all lines that are written from now on.
    ///
    /// Adding the same logger twice is allowed; it then receives each line twice.
    pub fn add_logger(&self, logger: Arc<dyn Logger>) {
        self.lock_loggers().push(logger);
    }

    /// Removes the first occurrence of the given logger, and hands it back.
    ///
    /// Loggers are compared by the identity of their `Arc` allocation, not by content.
    /// Returns `None` if the logger is not held.
    pub fn remove_logger<L: Logger + ?Sized>(
        &self,
        logger: &Arc<L>,
    ) -> Option<Arc<dyn Logger>> {
        let mut loggers = self.lock_loggers();
        let idx = loggers
            .iter()
            .position(|held| std::ptr::addr_eq(Arc::as_ptr(held), Arc::as_ptr(logger)))?;
        Some(loggers.remove(idx))
    }

    /// Returns the number of held loggers.
    #[must_use]
    pub fn count_loggers(&self) -> usize {
        self.lock_loggers().len()
    }

    // Drops the held loggers in sequence order, under the lock.
    pub(crate) fn release_loggers(&self) {
        self.lock_loggers().clear();
    }

    // A panic in some sink must not disable logging for good.
    fn lock_loggers(&self) -> MutexGuard<'_, Vec<Arc<dyn Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for MultiLogger {
    fn log(&self, line: &str) {
        for logger in self.lock_loggers().iter() {
            // a panicking sink must neither unwind into the caller nor starve the next sinks
            catch_unwind(AssertUnwindSafe(|| logger.log(line))).ok();
        }
    }
}

impl Drop for MultiLogger {
    fn drop(&mut self) {
        self.release_loggers();
    }
}

impl std::fmt::Debug for MultiLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // try_lock: formatting from within a sink during a broadcast must not deadlock
        let mut d = f.debug_struct("MultiLogger");
        match self.loggers.try_lock() {
            Ok(loggers) => d.field("count_loggers", &loggers.len()),
            Err(TryLockError::Poisoned(e)) => d.field("count_loggers", &e.into_inner().len()),
            Err(TryLockError::WouldBlock) => d.field("count_loggers", &"<locked>"),
        };
        d.finish()
    }
}
