use chrono::Local;
use log::Record;
use std::thread;

/// Function type for turning a `log::Record` into a single line.
///
/// Used by the [`LogBridge`](crate::LogBridge).
pub type FormatFunction = fn(record: &Record) -> String;

/// A logline-formatter that produces log lines like <br>
/// ```INFO [my_prog::some_submodule] Task successfully read from conf.json```
#[must_use]
pub fn default_format(record: &Record) -> String {
    format!(
        "{} [{}] {}",
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}

/// A colored version of the logline-formatter `default_format`
/// that produces log lines like <br>
/// <code><span style="color:red">ERROR</span> [my_prog::some_submodule] File not found</code>
///
/// Only the level is colored.
#[cfg(feature = "colors")]
#[cfg_attr(docsrs, doc(cfg(feature = "colors")))]
#[must_use]
pub fn colored_default_format(record: &Record) -> String {
    use nu_ansi_term::Color;
    let level = record.level();
    let painted = match level {
        log::Level::Error => Color::Red.bold().paint(level.as_str()),
        log::Level::Warn => Color::Yellow.bold().paint(level.as_str()),
        log::Level::Info => Color::Green.paint(level.as_str()),
        log::Level::Debug => Color::Blue.paint(level.as_str()),
        log::Level::Trace => Color::Purple.paint(level.as_str()),
    };
    format!(
        "{} [{}] {}",
        painted,
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}

/// A logline-formatter that produces log lines like
/// <br>
/// ```[2016-01-13 15:25:01.640870 +01:00] INFO [src/foo/bar:26] Task successfully read from conf.json```
/// <br>
/// i.e. with timestamp and file location.
#[must_use]
pub fn opt_format(record: &Record) -> String {
    format!(
        "[{}] {} [{}:{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f %:z"),
        record.level(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// A logline-formatter that produces log lines like
/// <br>
/// ```[2016-01-13 15:25:01.640870 +01:00] INFO [foo::bar] src/foo/bar.rs:26: Task successfully read from conf.json```
/// <br>
/// i.e. with timestamp, module path and file location.
#[must_use]
pub fn detailed_format(record: &Record) -> String {
    format!(
        "[{}] {} [{}] {}:{}: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f %:z"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// A logline-formatter that produces log lines like
/// <br>
/// ```[2016-01-13 15:25:01.640870 +01:00] T[taskreader] INFO [src/foo/bar:26] Task successfully read from conf.json```
/// <br>
/// i.e. with timestamp, thread name and file location.
#[must_use]
pub fn with_thread(record: &Record) -> String {
    format!(
        "[{}] T[{:?}] {} [{}:{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f %:z"),
        thread::current().name().unwrap_or("<unnamed>"),
        record.level(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}
