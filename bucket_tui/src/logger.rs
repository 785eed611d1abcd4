//! In-app log console
//!
//! The TUI owns the terminal, so log records go into a ring buffer that the
//! Log tab renders instead of being written to stdout/stderr.

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared buffer of (Level, message) lines
#[derive(Clone)]
pub struct ConsoleLog {
    buffer: Arc<Mutex<VecDeque<(Level, String)>>>,
    max_lines: usize,
}

impl ConsoleLog {
    pub fn new(max_lines: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(VecDeque::new())),
            max_lines,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<(Level, String)>> {
        // A panic while holding the lock can't leave the deque half-written
        self.buffer.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push(&self, level: Level, msg: String) {
        let mut buf = self.lock();
        if buf.len() >= self.max_lines {
            buf.pop_front();
        }
        buf.push_back((level, msg));
    }

    pub fn get_lines(&self) -> Vec<(Level, String)> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct ConsoleLogger {
    console: ConsoleLog,
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.console
                .push(record.level(), format!("{}: {}", record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global logger
pub fn init(level: LevelFilter) -> Result<ConsoleLog, SetLoggerError> {
    let console = ConsoleLog::new(200);
    let logger = ConsoleLogger {
        console: console.clone(),
    };

    // The global logger must be 'static
    let logger: &'static ConsoleLogger = Box::leak(Box::new(logger));

    log::set_logger(logger)?;
    log::set_max_level(level);

    Ok(console)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let console = ConsoleLog::new(2);
        console.push(Level::Info, "one".to_string());
        console.push(Level::Warn, "two".to_string());
        console.push(Level::Error, "three".to_string());

        let lines = console.get_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (Level::Warn, "two".to_string()));
        assert_eq!(lines[1], (Level::Error, "three".to_string()));
    }

    #[test]
    fn test_clones_share_buffer() {
        let console = ConsoleLog::new(10);
        let other = console.clone();
        other.push(Level::Info, "shared".to_string());
        assert_eq!(console.len(), 1);
        assert!(!console.is_empty());
    }
}
