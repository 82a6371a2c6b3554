extern crate std;

use alloc::{
    boxed::Box,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use core::{
    cell::RefCell,
    fmt::{self, Write},
};
use std::sync::Once;

use hashbrown::HashMap;
use log::{Level, LevelFilter, Log, Metadata, Record};
use spin::Mutex;

use crate::linked_list::singly::{list::SinglyLinkedList, traits::DataPolicy};

/// Counts how many times each value went through `release`.
#[derive(Clone, Default)]
pub(super) struct ReleaseLog(Arc<Mutex<HashMap<i32, usize>>>);

impl ReleaseLog {
    pub(super) fn record(&self, value: i32) {
        *self.0.lock().entry(value).or_insert(0) += 1;
    }

    pub(super) fn count(&self, value: i32) -> usize {
        self.0.lock().get(&value).copied().unwrap_or(0)
    }

    pub(super) fn total(&self) -> usize {
        self.0.lock().values().sum()
    }
}

/// Policy over boxed integers that records every release.
pub(super) struct RecordingPolicy {
    log: ReleaseLog,
}

impl DataPolicy<Box<i32>> for RecordingPolicy {
    fn print(&self, data: &Box<i32>, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{data} ")
    }

    fn release(&self, data: Box<i32>) {
        self.log.record(*data);
    }

    fn equals(&self, lhs: &Box<i32>, rhs: &Box<i32>) -> bool {
        **lhs == **rhs
    }
}

pub(super) type RecordingList = SinglyLinkedList<Box<i32>, RecordingPolicy>;

pub(super) fn recording_list() -> (RecordingList, ReleaseLog) {
    let log = ReleaseLog::default();
    let list = SinglyLinkedList::with_policy(RecordingPolicy { log: log.clone() });
    (list, log)
}

pub(super) fn values<P>(list: &SinglyLinkedList<Box<i32>, P>) -> Vec<i32>
where
    P: DataPolicy<Box<i32>>,
{
    list.iter().map(|v| **v).collect()
}

std::thread_local! {
    static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Logger keeping error messages per test thread.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            CAPTURED.with(|captured| captured.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Run `f` and return the error messages it logged on this thread.
pub(super) fn capture_errors(f: impl FnOnce()) -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed in tests");
        log::set_max_level(LevelFilter::Error);
    });

    CAPTURED.with(|captured| captured.borrow_mut().clear());
    f();
    CAPTURED.with(RefCell::take)
}
