//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! and the most recent ones stay in a rolling buffer (the diagnostic channel
//! shown in the footer panel).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

const CAPACITY: usize = 200;

/// Fixed-size buffer dropping the oldest entry when full
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    entries: VecDeque<String>,
}

impl RollingBuffer {
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, entry: String) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

struct ConsoleLogger {
    recent: Mutex<RollingBuffer>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    recent: Mutex::new(RollingBuffer::new(CAPACITY)),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{} {}", record.level(), record.args());
        let js = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js),
            Level::Warn => web_sys::console::warn_1(&js),
            Level::Info => web_sys::console::info_1(&js),
            Level::Debug | Level::Trace => web_sys::console::log_1(&js),
        }
        if let Ok(mut recent) = self.recent.lock() {
            let at = chrono::Local::now().format("%H:%M:%S");
            recent.push(format!("{at} {line}"));
        }
    }

    fn flush(&self) {}
}

/// Install the logger; debug builds log at `Debug`, release at `Info`
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Most recent formatted records, oldest first
pub fn recent_records() -> Vec<String> {
    LOGGER
        .recent
        .lock()
        .map(|recent| recent.snapshot())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_buffer_keeps_latest() {
        let mut buf = RollingBuffer::new(3);
        for i in 0..5 {
            buf.push(format!("line {i}"));
        }
        assert_eq!(buf.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buf = RollingBuffer::new(0);
        buf.push("x".into());
        assert!(buf.snapshot().is_empty());
    }
}
