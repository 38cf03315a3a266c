use crate::{writers::Logger, ContextBuilder, MultiLogger};
use std::{fmt, sync::Arc};

/// The application's logging context: a [`MultiLogger`] with an explicit lifecycle.
///
/// Create it once with [`LogContext::initialize`] (or via [`LogContext::builder`]),
/// pass it, or the [`MultiLogger`] it hands out, to the code that needs to log,
/// and tear it down with [`LogContext::destroy`] or by dropping it.
///
/// Teardown releases all held loggers, even if clones of the `MultiLogger` are still
/// alive somewhere (e.g. in a [`LogBridge`](crate::LogBridge));
/// these then just write nowhere.
///
/// ```rust
/// use fanout_log::{writers::MemorySink, LogContext};
/// use std::sync::Arc;
///
/// let context = LogContext::initialize();
/// let memory = Arc::new(MemorySink::new());
/// context.add_logger(memory.clone());
/// context.log("starting up");
/// context.destroy();
/// assert_eq!(&*memory.data(), "starting up\r\n");
/// ```
#[derive(Debug)]
pub struct LogContext {
    multi: Arc<MultiLogger>,
}

impl LogContext {
    /// Creates a context without any loggers.
    #[must_use]
    pub fn initialize() -> Self {
        Self::with_multi_logger(Arc::new(MultiLogger::new()))
    }

    /// Returns a builder that allows configuring the initial set of loggers.
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    pub(crate) fn with_multi_logger(multi: Arc<MultiLogger>) -> Self {
        Self { multi }
    }

    /// Releases all loggers and ends the context.
    pub fn destroy(self) {
        drop(self);
    }

    /// Writes a line to all loggers.
    pub fn log(&self, line: &str) {
        self.multi.log(line);
    }

    /// Writes a formatted line to all loggers.
    pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.multi.log_fmt(args);
    }

    /// Writes a line that the caller hands over to all loggers.
    pub fn log_owned(&self, line: String) {
        self.multi.log_owned(line);
    }

    /// See [`MultiLogger::add_logger`].
    pub fn add_logger(&self, logger: Arc<dyn Logger>) {
        self.multi.add_logger(logger);
    }

    /// See [`MultiLogger::remove_logger`].
    pub fn remove_logger<L: Logger + ?Sized>(
        &self,
        logger: &Arc<L>,
    ) -> Option<Arc<dyn Logger>> {
        self.multi.remove_logger(logger)
    }

    /// See [`MultiLogger::count_loggers`].
    #[must_use]
    pub fn count_loggers(&self) -> usize {
        self.multi.count_loggers()
    }

    /// Hands out the `MultiLogger` for passing it to code that logs.
    #[must_use]
    pub fn multi_logger(&self) -> Arc<MultiLogger> {
        Arc::clone(&self.multi)
    }
}

impl Drop for LogContext {
    fn drop(&mut self) {
        self.multi.release_loggers();
    }
}

#[cfg(test)]
mod test {
    use super::LogContext;
    use crate::writers::{Logger, MemorySink};
    use std::sync::Arc;

    #[test]
    fn forwards_to_multi_logger() {
        let context = LogContext::initialize();
        let memory = Arc::new(MemorySink::new());
        context.add_logger(memory.clone());
        assert_eq!(context.count_loggers(), 1);

        context.log("a");
        context.log_fmt(format_args!("{}", "b"));
        context.log_owned("c".to_string());
        crate::log_fmt!(context.multi_logger(), "{}{}", 'd', 'e');
        assert_eq!(&*memory.data(), "a\r\nb\r\nc\r\nde\r\n");

        assert!(context.remove_logger(&memory).is_some());
        assert!(context.remove_logger(&memory).is_none());
        assert_eq!(context.count_loggers(), 0);
    }

    #[test]
    fn destroy_releases_loggers_of_shared_multi_logger() {
        let context = LogContext::initialize();
        let memory = Arc::new(MemorySink::new());
        context.add_logger(memory.clone());
        let multi = context.multi_logger();

        context.destroy();
        assert_eq!(multi.count_loggers(), 0);
        assert_eq!(Arc::strong_count(&memory), 1);

        multi.log("goes nowhere");
        assert_eq!(&*memory.data(), "");
    }
}
