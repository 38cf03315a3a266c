// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! A small logging facility that writes lines of text to one or several destinations.
//!
//! The trait [`writers::Logger`] has a single primitive, `log(&str)`, and is implemented by
//!
//! * the sinks in module [`writers`], which write to a file, to memory,
//!   to the debugger output, or to stderr,
//! * and the [`MultiLogger`], which forwards each line to a dynamic set of other loggers,
//!   guarded by a single lock, so that loggers can be added and removed
//!   from any thread while others are logging.
//!
//! Logging is best-effort: writing a line never returns an error and never panics;
//! a sink that cannot write drops the line.
//!
//! A [`LogContext`] bundles a `MultiLogger` with an explicit lifecycle,
//! and is configured with a [`ContextBuilder`]:
//!
//! ```rust,ignore
//! use fanout_log::{writers::MemorySink, LogContext};
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemorySink::new());
//! let context = LogContext::builder()
//!     .log_to_file("app.log")
//!     .add_logger(memory.clone())
//!     .try_build()
//!     .unwrap_or_else(|e| panic!("Log context creation failed with {e}"));
//!
//! fanout_log::log_fmt!(context.multi_logger(), "{} items loaded", 42);
//! assert_eq!(&*memory.data(), "42 items loaded\r\n");
//! context.destroy();
//! ```
//!
//! Records of the [`log`](https://docs.rs/log) facade can be routed into a logger
//! with a [`LogBridge`].

mod bridge;
#[cfg(feature = "configfile")]
mod config_file;
mod context_builder;
mod fanout_error;
mod formats;
mod log_context;
mod multi_logger;

pub mod writers;

pub use crate::bridge::LogBridge;
pub use crate::context_builder::ContextBuilder;
pub use crate::fanout_error::FanoutLogError;
pub use crate::formats::*;
pub use crate::log_context::LogContext;
pub use crate::multi_logger::MultiLogger;

/// Terminator that file, memory and debugger sinks append to each line.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Environment variable that [`ContextBuilder::from_env`] reads the log file path from.
pub const ENV_LOG_FILE: &str = "FANOUT_LOG_FILE";

/// Environment variable that makes [`ContextBuilder::from_env`] switch on logging to stderr.
pub const ENV_LOG_STDERR: &str = "FANOUT_LOG_STDERR";
