use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

/// Logger that keeps every record in memory
pub struct LogRecorder {
    records: Mutex<Vec<(Level, String)>>,
}

static RECORDER: LogRecorder = LogRecorder {
    records: Mutex::new(Vec::new()),
};

static INSTALL: Once = Once::new();

impl LogRecorder {
    /// Records whose message contains `needle`
    pub fn matching(&self, needle: &str) -> Vec<(Level, String)> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .cloned()
            .collect()
    }
}

impl Log for LogRecorder {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Installs the recorder as the global logger. Test binaries using it must
/// not call `init_logging`.
pub fn install() -> &'static LogRecorder {
    INSTALL.call_once(|| {
        log::set_logger(&RECORDER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    &RECORDER
}
