
use fanout_log::{
    writers::{FileSink, Logger, MemorySink},
    MultiLogger,
};
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
};

const NO_OF_THREADS: usize = 8;
const NO_OF_ROUNDS: usize = 200;
const NO_OF_LOGLINES_PER_THREAD: usize = 2_000;

// Complains if it is called after its removal from the MultiLogger was completed.
struct RemovalWatcher {
    removed: AtomicBool,
    calls_after_removal: Arc<AtomicUsize>,
}
impl Logger for RemovalWatcher {
    fn log(&self, _line: &str) {
        if self.removed.load(Ordering::SeqCst) {
            self.calls_after_removal.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn concurrent_add_remove_and_log() {
    let multi = Arc::new(MultiLogger::new());
    let permanent = Arc::new(MemorySink::new());
    multi.add_logger(permanent.clone());

    let calls_after_removal = Arc::new(AtomicUsize::new(0));
    let stop = Arc::new(AtomicBool::new(false));

    // checks the count while the others add and remove
    let observer = {
        let multi = Arc::clone(&multi);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                let count = multi.count_loggers();
                assert!(count >= 1, "permanent logger vanished");
                assert!(count <= 1 + NO_OF_THREADS, "more loggers than adds: {count}");
            }
        })
    };

    let workers: Vec<JoinHandle<()>> = (0..NO_OF_THREADS)
        .map(|thread_number| {
            let multi = Arc::clone(&multi);
            let calls_after_removal = Arc::clone(&calls_after_removal);
            thread::Builder::new()
                .name(thread_number.to_string())
                .spawn(move || {
                    for round in 0..NO_OF_ROUNDS {
                        let watcher = Arc::new(RemovalWatcher {
                            removed: AtomicBool::new(false),
                            calls_after_removal: Arc::clone(&calls_after_removal),
                        });
                        multi.add_logger(watcher.clone());
                        multi.log(&format!("({thread_number}) round {round}"));
                        let removed = multi
                            .remove_logger(&watcher)
                            .unwrap_or_else(|| panic!("watcher of {thread_number} is gone"));
                        watcher.removed.store(true, Ordering::SeqCst);
                        drop(removed);
                    }
                })
                .unwrap()
        })
        .collect();

    for worker in workers {
        worker
            .join()
            .unwrap_or_else(|e| panic!("Joining worker thread failed: {e:?}"));
    }
    stop.store(true, Ordering::SeqCst);
    observer.join().unwrap();

    assert_eq!(calls_after_removal.load(Ordering::SeqCst), 0);
    assert_eq!(multi.count_loggers(), 1);

    let data = permanent.data();
    assert_eq!(data.lines().count(), NO_OF_THREADS * NO_OF_ROUNDS);
    for thread_number in 0..NO_OF_THREADS {
        let prefix = format!("({thread_number}) round ");
        let rounds: Vec<usize> = data
            .lines()
            .filter_map(|line| line.strip_prefix(&prefix))
            .map(|round| round.parse().unwrap())
            .collect();
        // lines of one thread arrive in call order
        assert_eq!(rounds, (0..NO_OF_ROUNDS).collect::<Vec<_>>());
    }
}

#[test]
fn concurrent_writes_keep_lines_intact() {
    let dir = test_utils::dir();
    let path = dir.child("threads.log");
    let multi = Arc::new(MultiLogger::new());
    multi.add_logger(Arc::new(FileSink::new(&path)));

    let workers: Vec<JoinHandle<()>> = (0..NO_OF_THREADS)
        .map(|thread_number| {
            let multi = Arc::clone(&multi);
            thread::spawn(move || {
                for idx in 0..NO_OF_LOGLINES_PER_THREAD {
                    multi.log(&format!("({thread_number})  writing out line number {idx}"));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    drop(multi);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("\r\n"));
    let lines: Vec<&str> = content.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), NO_OF_THREADS * NO_OF_LOGLINES_PER_THREAD);
    for line in lines {
        assert!(line.starts_with('('), "broken line: {line}");
        assert!(line.contains("writing out line number"), "broken line: {line}");
    }
}
