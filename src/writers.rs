//! Contains the trait [`Logger`] and the sinks that implement it:
//!
//! * [`FileSink`] appends to a file,
//! * [`MemorySink`] collects the lines in memory,
//! * [`DebugSink`] writes to the debugger output,
//! * [`StderrSink`] writes to stderr.
//!
//! The composite [`MultiLogger`](crate::MultiLogger) also implements [`Logger`].
//! You can use your own implementations of [`Logger`] as well:
//!
//! ```rust
//! use fanout_log::{writers::Logger, MultiLogger};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! #[derive(Default)]
//! struct LineCounter(AtomicUsize);
//! impl Logger for LineCounter {
//!     fn log(&self, _line: &str) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let counter = Arc::new(LineCounter::default());
//! let multi = MultiLogger::new();
//! multi.add_logger(counter.clone());
//! multi.log("one");
//! multi.log("two");
//! assert_eq!(counter.0.load(Ordering::Relaxed), 2);
//! ```

mod debug_sink;
mod file_sink;
mod logger;
mod memory_sink;
mod stderr_sink;

pub use self::debug_sink::DebugSink;
pub use self::file_sink::FileSink;
pub use self::logger::Logger;
pub use self::memory_sink::{MemorySink, MemoryView};
pub use self::stderr_sink::StderrSink;
