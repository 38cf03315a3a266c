use crate::{default_format, writers::Logger, FanoutLogError, FormatFunction};
use log::LevelFilter;
use std::sync::Arc;

/// Connects the [`log`](https://docs.rs/log) facade to a [`Logger`].
///
/// Every record that passes the facade's max level is rendered with the configured
/// [`FormatFunction`] and written as one line.
///
/// ```rust,ignore
/// use fanout_log::{writers::StderrSink, LogBridge};
/// use std::sync::Arc;
///
/// LogBridge::new(Arc::new(StderrSink::new()))
///     .install(log::LevelFilter::Info)
///     .unwrap();
/// log::info!("now visible on stderr");
/// ```
pub struct LogBridge {
    logger: Arc<dyn Logger>,
    format: FormatFunction,
}

impl LogBridge {
    /// Creates a bridge that uses [`default_format`](crate::default_format).
    #[must_use]
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            format: default_format,
        }
    }

    /// Makes the bridge use the given format function.
    #[must_use]
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// Registers the bridge as the global logger of the `log` facade.
    ///
    /// # Errors
    ///
    /// `FanoutLogError::Log` if a global logger is already registered.
    pub fn install(self, max_level: LevelFilter) -> Result<(), FanoutLogError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.logger.log_owned((self.format)(record));
        }
    }

    fn flush(&self) {}
}
