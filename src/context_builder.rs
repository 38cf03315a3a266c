use crate::{
    writers::{DebugSink, FileSink, Logger, StderrSink},
    FanoutLogError, FormatFunction, LogBridge, LogContext, MultiLogger, ENV_LOG_FILE,
    ENV_LOG_STDERR,
};
use log::LevelFilter;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// The entry-point for configuring a [`LogContext`].
///
/// Choose the sinks, optionally connect the `log` facade, and call
/// [`ContextBuilder::try_build`].
/// The sinks are added in the order file, stderr, debugger, followed by the
/// loggers given with [`ContextBuilder::add_logger`].
///
/// ```rust,ignore
/// use fanout_log::LogContext;
///
/// let context = LogContext::builder()
///     .log_to_file("app.log")
///     .log_to_stderr()
///     .bridge_log_facade(log::LevelFilter::Info, fanout_log::opt_format)
///     .try_build()
///     .unwrap_or_else(|e| panic!("Log context creation failed with {e}"));
///
/// log::info!("goes to app.log and to stderr");
/// context.log("so does this");
/// ```
#[derive(Default)]
pub struct ContextBuilder {
    o_file: Option<PathBuf>,
    stderr: bool,
    debugger: bool,
    loggers: Vec<Arc<dyn Logger>>,
    o_bridge: Option<(LevelFilter, FormatFunction)>,
}

impl ContextBuilder {
    /// Creates a builder that takes its settings from the environment.
    ///
    /// `FANOUT_LOG_FILE` names a log file, and `FANOUT_LOG_STDERR` switches on
    /// logging to stderr if it is set to `1`, `true`, or `yes`.
    /// Unset or unparsable variables leave the respective sink off.
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(path) = std::env::var_os(ENV_LOG_FILE) {
            if !path.is_empty() {
                builder.o_file = Some(PathBuf::from(path));
            }
        }
        builder.stderr = std::env::var(ENV_LOG_STDERR)
            .map(|value| is_switched_on(&value))
            .unwrap_or(false);
        builder
    }

    /// Creates a builder that takes its settings from a TOML file like
    ///
    /// ```toml
    /// file = "log_files/app.log"
    /// stderr = true
    /// debugger = false
    /// ```
    ///
    /// All keys are optional.
    ///
    /// # Errors
    ///
    /// `FanoutLogError::Io` if the file cannot be read,
    /// `FanoutLogError::Toml` if its content is not valid.
    #[cfg(feature = "configfile")]
    #[cfg_attr(docsrs, doc(cfg(feature = "configfile")))]
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, FanoutLogError> {
        let config = crate::config_file::ConfigFile::read(path.as_ref())?;
        Ok(Self {
            o_file: config.file,
            stderr: config.stderr,
            debugger: config.debugger,
            ..Self::default()
        })
    }

    /// Makes the context write to the given file, which is created if necessary
    /// and appended to.
    #[must_use]
    pub fn log_to_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.o_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Makes the context write to stderr.
    #[must_use]
    pub fn log_to_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    /// Makes the context write to the debugger output.
    #[must_use]
    pub fn log_to_debugger(mut self) -> Self {
        self.debugger = true;
        self
    }

    /// Adds a further logger.
    #[must_use]
    pub fn add_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.loggers.push(logger);
        self
    }

    /// Makes records of the `log` facade go to the context, rendered with the given format.
    #[must_use]
    pub fn bridge_log_facade(mut self, max_level: LevelFilter, format: FormatFunction) -> Self {
        self.o_bridge = Some((max_level, format));
        self
    }

    /// Creates the context.
    ///
    /// # Errors
    ///
    /// `FanoutLogError::Io` if the log file cannot be opened,
    /// `FanoutLogError::Log` if the `log` facade should be bridged but already has a logger.
    pub fn try_build(self) -> Result<LogContext, FanoutLogError> {
        let multi = Arc::new(MultiLogger::new());
        if let Some(path) = self.o_file {
            multi.add_logger(Arc::new(FileSink::try_new(path)?));
        }
        if self.stderr {
            multi.add_logger(Arc::new(StderrSink::new()));
        }
        if self.debugger {
            multi.add_logger(Arc::new(DebugSink::new()));
        }
        for logger in self.loggers {
            multi.add_logger(logger);
        }

        if let Some((max_level, format)) = self.o_bridge {
            LogBridge::new(Arc::clone(&multi) as Arc<dyn Logger>)
                .format(format)
                .install(max_level)?;
        }
        Ok(LogContext::with_multi_logger(multi))
    }
}

fn is_switched_on(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}
