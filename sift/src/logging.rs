//! Stderr logging for the library and the CLI.
//!
//! The library reports what it decided (how a pattern was classified, which
//! exclusion evicted a path, whether the cache answered) through the `log`
//! facade and never prints on its own. [`Logger`] is the backend that turns
//! those records into `LEVEL: message` lines on stderr, filtered by a
//! [`LogLevel`] chosen from CLI flags or the `SIFT_LOG_MODE` variable.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`] when no flag is given.
pub const LOG_MODE_ENV: &str = "SIFT_LOG_MODE";

/// How much diagnostic output reaches stderr.
///
/// Levels are ordered from least to most talkative.
///
/// # Examples
///
/// ```
/// use sift::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("verbose".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing but the command's own output.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything, including per-pattern resolution traces.
    Verbose,
}

impl LogLevel {
    const NAMES: [(&'static str, LogLevel); 3] = [
        ("quiet", LogLevel::Quiet),
        ("normal", LogLevel::Normal),
        ("verbose", LogLevel::Verbose),
    ];

    /// The most detailed `log` level that should reach stderr.
    #[must_use]
    pub const fn level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive; accepts `quiet`, `normal` and `verbose`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, level)| *level)
            .ok_or_else(|| format!("unknown log mode '{s}' (expected quiet, normal or verbose)"))
    }
}

/// Writes `LEVEL: message` lines to stderr.
///
/// Use it directly, or call [`Logger::install`] to route the library's `log`
/// records through it.
///
/// # Examples
///
/// ```
/// use sift::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("dependency directory vendor/ does not exist");
/// logger.debug("not shown below Verbose");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger that prints at `level` and above.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Printed unless quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Printed unless quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Printed only when verbose.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Printed only when verbose.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    fn emit(&self, minimum: LogLevel, tag: &str, message: &str) {
        if self.level >= minimum {
            eprintln!("{tag}: {message}");
        }
    }

    /// Make this logger the process-wide `log` backend.
    ///
    /// The first installation wins; later calls are no-ops.
    pub fn install(self) {
        let filter = self.level.level_filter();
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(filter);
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

/// Pick a logger from CLI flags, then `SIFT_LOG_MODE`, then the default.
///
/// `verbose` beats `quiet` when both are set. An unrecognized
/// `SIFT_LOG_MODE` value is ignored.
///
/// # Examples
///
/// ```
/// use sift::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}
