//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a shared buffer displayed in the log panel.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for the log panel.
///
pub const LOG_CAPACITY: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Bounded, shareable list of formatted log lines. The oldest entries are
/// dropped once the capacity is reached.
///
#[derive(Clone, Debug)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        LogBuffer::with_capacity(LOG_CAPACITY)
    }
}

impl LogBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        LogBuffer {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= self.capacity {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return the most recent `count` entries, oldest first.
    ///
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(count);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the custom logger as the global logger, forwarding every record at
/// or above `level` into `buffer`.
///
pub fn init(buffer: LogBuffer, level: LevelFilter) -> AppResult<()> {
    let logger = CustomLogger::new(level);
    logger.set_log_callback(Box::new(move |entry| buffer.push(entry)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::RecordBuilder;

    #[test]
    fn format_log_contains_level_and_message() {
        let formatted = format_log(
            &RecordBuilder::new()
                .level(Level::Warn)
                .args(format_args!("feed low"))
                .build(),
        );
        assert!(formatted.contains("WARN"));
        assert!(formatted.ends_with("feed low"));
    }

    #[test]
    fn buffer_drops_oldest_entries() {
        let buffer = LogBuffer::with_capacity(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.tail(10), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.tail(1), vec!["c".to_string()]);
    }

    #[test]
    fn buffer_clones_share_entries() {
        let buffer = LogBuffer::default();
        let clone = buffer.clone();
        assert!(buffer.is_empty());
        clone.push("shared".to_string());
        assert_eq!(buffer.tail(1), vec!["shared".to_string()]);
    }

    #[test]
    fn logger_forwards_enabled_records() {
        let buffer = LogBuffer::default();
        let sink = buffer.clone();
        let logger = CustomLogger::new(LevelFilter::Info);
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));

        logger.log(
            &RecordBuilder::new()
                .level(Level::Info)
                .args(format_args!("navigated"))
                .build(),
        );
        logger.log(
            &RecordBuilder::new()
                .level(Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );
        assert_eq!(buffer.len(), 1);
        assert!(buffer.tail(1)[0].contains("navigated"));
    }
}
