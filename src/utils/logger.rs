// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::Write;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Writes one line per record to stderr, prefixed with a level icon
pub struct ConsoleLogger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn icon(level: Level) -> &'static str {
    match level {
        Level::Error => "🔴", // Red Circle
        Level::Warn => "🟠",  // Orange Circle
        Level::Info => "🔵",  // Blue Circle
        Level::Debug => "⚪", // White/Gray Circle
        Level::Trace => "▫️", // Small dot
    }
}

// Format: "🟠  Approximating the mass of Pb206 as 206u!"
fn format_line(level: Level, message: &std::fmt::Arguments) -> String {
    format!("{}  {}", icon(level), message)
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record.level(), record.args());
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
