//! Board logger.
//!
//! Formats `log` records as `[LEVEL] target: message` lines, coloured by
//! level, and hands them to a sink supplied by the integrator (usually the
//! debug UART's blocking write).

use core::fmt::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Once;

/// Receives formatted log output.
pub type Sink = fn(&str);

static SINK: Once<Sink> = Once::new();

pub struct BoardLogger;

static LOGGER: BoardLogger = BoardLogger;

struct SinkWriter(Sink);

impl Write for SinkWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        (self.0)(s);
        Ok(())
    }
}

impl Log for BoardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(&sink) = SINK.get() else {
            return;
        };
        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // BrightYellow
            Level::Info => 37,  // White
            Level::Debug => 32, // Green
            Level::Trace => 90, // BrightBlack
        };
        // Nowhere to report a failing sink.
        let _ = writeln!(
            SinkWriter(sink),
            "\u{1B}[{}m[{}] {}: {}\u{1B}[0m",
            color,
            record.level(),
            record.target(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// Install the board logger writing to `sink`.
///
/// Only the first call installs a logger; later calls return the error from
/// [`log::set_logger`].
pub fn init(sink: Sink, level: LevelFilter) -> Result<(), SetLoggerError> {
    SINK.call_once(|| sink);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
