//! Minimal stderr logger for the `log` facade.
//!
//! The library only emits records; the binary installs this logger once
//! at startup. Records go to stderr so they never interleave with the
//! board on stdout.

use std::io::Write;
use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable read when no `--log` flag is given.
pub const LOG_ENV: &str = "KLONDIKE_LOG";

/// Level used when neither flag nor environment names one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl StderrLogger {
    fn level_prefix(level: Level) -> &'static str {
        match level {
            Level::Error => "[ERROR] ",
            Level::Warn => "[WARN]  ",
            Level::Info => "[INFO]  ",
            Level::Debug => "[DEBUG] ",
            Level::Trace => "[TRACE] ",
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = write!(out, "{}", Self::level_prefix(record.level()));
        if let Some(module) = record.module_path() {
            let _ = write!(out, "[{module}] ");
        }
        let _ = writeln!(out, "{}", record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at `level`.
///
/// Fails if another logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name such as `debug` or `OFF`.
#[must_use]
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(name.trim()).ok()
}

/// Resolve the level from an explicit flag value, falling back to
/// `KLONDIKE_LOG` and then to `warn`.
#[must_use]
pub fn resolve_level(flag: Option<&str>) -> LevelFilter {
    flag.map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV).ok())
        .and_then(|name| parse_level(&name))
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" INFO "), Some(LevelFilter::Info));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_flag_wins() {
        assert_eq!(resolve_level(Some("trace")), LevelFilter::Trace);
    }

    #[test]
    fn test_second_init_reports_error() {
        // Whichever call installs the logger first, the next one fails.
        let _ = init(LevelFilter::Off);
        let err = init(LevelFilter::Off).unwrap_err();
        let wrapped = anyhow::anyhow!("failed to install logger: {err}");
        assert!(wrapped.to_string().starts_with("failed to install logger: "));
    }

    #[test]
    fn test_prefix_width() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert_eq!(StderrLogger::level_prefix(level).len(), 8);
        }
    }
}
