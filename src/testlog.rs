//! Capturing logger for unit tests
//!
//! Records are kept per thread, and libtest runs each test on its own thread.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the logger once and clear this thread's records
pub(crate) fn init() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Drain this thread's records
pub(crate) fn take() -> Vec<(Level, String)> {
    RECORDS.with(|r| r.borrow_mut().drain(..).collect())
}

/// Drain this thread's records, keeping the error level messages
pub(crate) fn take_errors() -> Vec<String> {
    take()
        .into_iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, msg)| msg)
        .collect()
}
