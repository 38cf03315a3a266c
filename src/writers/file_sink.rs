use crate::{writers::Logger, FanoutLogError, LINE_TERMINATOR};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

/// A [`Logger`] that appends lines to a file.
///
/// Each line is written as UTF-8, followed by `"\r\n"`.
///
/// If the file could not be opened, the sink is invalid and silently drops everything.
/// The file handle is closed when the sink is dropped.
#[derive(Debug)]
pub struct FileSink {
    o_file: Option<File>,
}

impl FileSink {
    /// Opens the file for appending, and creates it if it does not exist.
    ///
    /// If opening fails, an invalid sink is returned; use [`FileSink::try_new`]
    /// to see the error instead.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            o_file: open_for_append(path.as_ref()).ok(),
        }
    }

    /// Opens the file for appending, and creates it if it does not exist.
    ///
    /// # Errors
    ///
    /// `FanoutLogError::Io` if the file cannot be opened.
    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, FanoutLogError> {
        Ok(Self {
            o_file: Some(open_for_append(path.as_ref())?),
        })
    }

    /// Adopts an already opened file.
    ///
    /// The file should be opened for appending, otherwise lines are written
    /// at the current position.
    #[must_use]
    pub fn from_file(file: File) -> Self {
        Self { o_file: Some(file) }
    }

    /// Returns false if the sink could not open its file and thus writes nothing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.o_file.is_some()
    }
}

// Other processes can keep reading the file while we append to it.
fn open_for_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Logger for FileSink {
    fn log(&self, line: &str) {
        if let Some(ref file) = self.o_file {
            let mut w: &File = file;
            // the terminator is only written if the payload made it
            if w.write_all(line.as_bytes()).is_ok() {
                w.write_all(LINE_TERMINATOR.as_bytes()).ok();
            }
        }
    }
}
