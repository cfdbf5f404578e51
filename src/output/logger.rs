//! Leveled diagnostic logging
//!
//! A [`Logger`] carries a minimum severity and a swappable sink. Components
//! receive an `Arc<Logger>` when they are built, so a single verbosity flag
//! controls every diagnostic without any hidden state. [`global`] hands out a
//! shared default instance for callers that do not care to build their own.

use ansi_term::Colour::{Blue, Purple, Red, Yellow};
use ansi_term::Style;
use parking_lot::RwLock;
use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Diagnostic severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    /// Filter used when nothing else was configured
    pub const DEFAULT_FILTER: Level = Level::Warn;

    /// Display name of the level
    pub fn name(&self) -> &'static str {
        match self {
            Level::Trace => "Trace",
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
        }
    }

    /// Numeric rank, higher is more severe
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Map a `-v` repetition count to a filter level
    pub fn from_verbosity(count: u8) -> Level {
        match count {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn style(&self) -> Style {
        match self {
            Level::Error => Red.bold(),
            Level::Warn => Yellow.bold(),
            Level::Info => Blue.normal(),
            Level::Debug => Purple.normal(),
            Level::Trace => Style::new().dimmed(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(format!("cannot assign log level filter to '{}'", s)),
        }
    }
}

/// Destination for enabled log records
pub type Sink = Arc<dyn Fn(Level, &str) + Send + Sync>;

/// Sink printing `[LEVEL] > message` on stderr
pub fn stderr_sink() -> Sink {
    let colored = std::io::stderr().is_terminal();

    Arc::new(move |level: Level, message: &str| {
        let label = format!("[{}]", level.name().to_uppercase());
        if colored {
            eprintln!("{} > {}", level.style().paint(label), message);
        } else {
            eprintln!("{} > {}", label, message);
        }
    })
}

/// Leveled logger with a mutable filter and sink
pub struct Logger {
    filter: RwLock<Level>,
    sink: RwLock<Sink>,
}

impl Logger {
    /// Create a logger writing to stderr with the default filter
    pub fn new() -> Self {
        Self::with_sink(stderr_sink())
    }

    /// Create a logger writing to a custom sink with the default filter
    pub fn with_sink(sink: Sink) -> Self {
        Self {
            filter: RwLock::new(Level::DEFAULT_FILTER),
            sink: RwLock::new(sink),
        }
    }

    /// Current minimum level
    pub fn level_filter(&self) -> Level {
        *self.filter.read()
    }

    /// Replace the minimum level
    pub fn set_level_filter(&self, level: Level) {
        *self.filter.write() = level;
    }

    /// Replace the minimum level from its name.
    ///
    /// Unknown names are reported at error level and leave the filter as is.
    pub fn set_level_filter_str(&self, name: &str) -> bool {
        match name.parse::<Level>() {
            Ok(level) => {
                self.set_level_filter(level);
                true
            }
            Err(message) => {
                self.error(message);
                false
            }
        }
    }

    /// Replace the sink
    pub fn set_sink(&self, sink: Sink) {
        *self.sink.write() = sink;
    }

    /// Whether a record at `level` would reach the sink
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level_filter()
    }

    /// Send a record to the sink when its level passes the filter
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        // The sink is cloned out so it may log again without deadlocking
        let sink = self.sink.read().clone();
        sink(level, &message.to_string());
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Level::Trace, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("filter", &self.level_filter())
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<Arc<Logger>> = OnceLock::new();

/// Process-wide default logger
pub fn global() -> Arc<Logger> {
    GLOBAL.get_or_init(|| Arc::new(Logger::new())).clone()
}
