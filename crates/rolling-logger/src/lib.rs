//! Rolling Logger
//!
//! `log` backend for browser frontends. Every record is written to the
//! browser console (stderr on native targets) and the most recent lines are
//! kept in a circular buffer for the app's log panel.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Up to `limit` of the latest lines, oldest first
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        let skip = lines.len().saturating_sub(limit);
        lines.iter().skip(skip).cloned().collect()
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

pub fn format_record(record: &Record<'_>) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Up to `limit` recent lines of the global logger, empty before `init`
pub fn recent_lines(limit: usize) -> Vec<String> {
    LOGGER.get().map(|logger| logger.recent(limit)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_latest_lines() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }
        let lines = logger.recent(DEFAULT_CAPACITY);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[test] line 2"));
        assert!(lines[2].ends_with("[test] line 4"));
    }

    #[test]
    fn test_filters_by_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        log_line(&logger, Level::Info, "hidden");
        log_line(&logger, Level::Error, "shown");
        let lines = logger.recent(DEFAULT_CAPACITY);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_recent_limits_to_newest() {
        let logger = RollingLogger::new(LevelFilter::Trace, 10);
        for i in 0..6 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }
        let lines = logger.recent(2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[test] line 4"));
        assert!(lines[1].ends_with("[test] line 5"));
        assert!(logger.recent(0).is_empty());
    }

    #[test]
    fn test_recent_lines_before_init_is_empty() {
        assert!(recent_lines(10).is_empty());
    }
}
