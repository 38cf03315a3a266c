use crate::{writers::Logger, LINE_TERMINATOR};

/// A [`Logger`] that writes to the output channel of an attached debugger.
///
/// On Windows, lines go to `OutputDebugStringW`. Other platforms have no such channel;
/// there the lines are written to stderr.
///
/// Empty lines are ignored; each other line is followed by `"\r\n"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugSink;

impl DebugSink {
    /// Constructor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for DebugSink {
    fn log(&self, line: &str) {
        if !line.is_empty() {
            let mut s = String::with_capacity(line.len() + LINE_TERMINATOR.len());
            s.push_str(line);
            s.push_str(LINE_TERMINATOR);
            platform::output_debug_string(&s);
        }
    }
}

#[cfg(windows)]
mod platform {
    #[link(name = "kernel32")]
    extern "system" {
        fn OutputDebugStringW(output_string: *const u16);
    }

    pub(super) fn output_debug_string(s: &str) {
        let wide: Vec<u16> = s.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: `wide` is a NUL-terminated UTF-16 string that outlives the call.
        unsafe { OutputDebugStringW(wide.as_ptr()) };
    }
}

#[cfg(not(windows))]
mod platform {
    use std::io::Write;

    pub(super) fn output_debug_string(s: &str) {
        std::io::stderr().lock().write_all(s.as_bytes()).ok();
    }
}
