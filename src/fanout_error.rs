use thiserror::Error;

/// Describes errors in the construction of sinks and in the setup of a [`LogContext`].
///
/// Writing a log line never produces this error; only the fallible construction methods do.
///
/// [`LogContext`]: crate::LogContext
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FanoutLogError {
    /// A log file could not be opened, or a config file could not be read.
    #[error("log file or config file cannot be accessed")]
    Io(#[from] std::io::Error),

    /// The bridge to the `log` facade could not be installed,
    /// usually because another logger is already registered.
    #[error("installing the bridge to the log facade failed")]
    Log(#[from] log::SetLoggerError),

    /// The config file is not valid TOML, or has unknown keys.
    #[cfg(feature = "configfile")]
    #[cfg_attr(docsrs, doc(cfg(feature = "configfile")))]
    #[error("config file is invalid")]
    Toml(#[from] toml::de::Error),
}
