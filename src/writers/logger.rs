use std::fmt;

/// Writes lines of text to a single destination, or to several.
///
/// Implementations are best-effort: `log` must neither return an error nor panic;
/// a sink that cannot write simply drops the line.
///
/// Trait objects (`Arc<dyn Logger>`) can be handed to a [`MultiLogger`](crate::MultiLogger).
pub trait Logger: Send + Sync {
    /// Writes out a single line.
    ///
    /// The line terminator is added by the implementation.
    fn log(&self, line: &str);

    /// Renders the given arguments and writes the result as a single line.
    ///
    /// Usually called via the [`log_fmt!`](crate::log_fmt) macro.
    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(s) => self.log(s),
            None => self.log(&fmt::format(args)),
        }
    }

    /// Writes out a line that the caller hands over; the line is dropped afterwards.
    fn log_owned(&self, line: String) {
        self.log(&line);
    }
}

/// Writes a formatted line to a [`Logger`].
///
/// ```rust
/// use fanout_log::{log_fmt, writers::MemorySink};
///
/// let sink = MemorySink::new();
/// log_fmt!(sink, "{} + {} = {}", 1, 2, 1 + 2);
/// assert_eq!(&*sink.data(), "1 + 2 = 3\r\n");
/// ```
#[macro_export]
macro_rules! log_fmt {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::writers::Logger as _;
        $logger.log_fmt(format_args!($($arg)+))
    }};
}
