
use fanout_log::{
    writers::{FileSink, Logger},
    FanoutLogError,
};
use std::{fs::OpenOptions, io::Read};

#[test]
fn test_unwritable_path() {
    let dir = test_utils::dir();

    // a directory cannot be opened as log file
    let sink = FileSink::new(dir.path());
    assert!(!sink.is_valid());
    sink.log("This is dropped");
    sink.log_fmt(format_args!("This is dropped {}", "too"));
    drop(sink);
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());

    // neither can a file below a regular file
    let blocker = dir.child("blocker");
    std::fs::write(&blocker, "unchanged").unwrap();
    let sink = FileSink::new(blocker.join("x.log"));
    assert!(!sink.is_valid());
    sink.log("This is dropped");
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "unchanged");

    assert!(matches!(
        FileSink::try_new(blocker.join("x.log")),
        Err(FanoutLogError::Io(_))
    ));
}

#[test]
fn test_file_is_readable_while_logging() {
    let dir = test_utils::dir();
    let path = dir.child("shared.log");
    let sink = FileSink::try_new(&path).unwrap();
    sink.log("first");

    let mut reader = OpenOptions::new().read(true).open(&path).unwrap();
    let mut content = String::new();
    reader.read_to_string(&mut content).unwrap();
    assert_eq!(content, "first\r\n");

    sink.log("second");
    content.clear();
    reader.read_to_string(&mut content).unwrap();
    assert_eq!(content, "second\r\n");
}

#[test]
fn test_two_sinks_append_to_same_file() {
    let dir = test_utils::dir();
    let path = dir.child("appended.log");
    {
        let sink = FileSink::new(&path);
        sink.log("from first sink");
    }
    {
        let sink = FileSink::new(&path);
        sink.log("from second sink");
    }
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "from first sink\r\nfrom second sink\r\n"
    );
}
