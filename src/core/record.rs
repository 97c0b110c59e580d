//! Per-call log record and call-site capture

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt::{self, Write};
use std::panic::Location;

/// Source location of the application code that issued a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// File name reported when no call site was captured
    pub const UNKNOWN_FILE: &'static str = "unknown";

    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of the outermost `#[track_caller]` frame.
    ///
    /// Every public logging method and each internal forwarding function is
    /// annotated with `#[track_caller]`, so the location resolves to the
    /// application's call no matter how many layers sit in between.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    /// File name without its directory
    pub fn basename(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

/// Everything a formatter needs to render one log call
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub call_site: Option<CallSite>,
    pub timestamp: DateTime<Local>,
}

impl<'a> Record<'a> {
    pub fn new(level: LogLevel, message: &'a str, call_site: Option<CallSite>) -> Self {
        Self {
            level,
            message,
            call_site,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Base name of the call-site file, `"unknown"` when not captured
    pub fn file(&self) -> &'static str {
        self.call_site
            .map_or(CallSite::UNKNOWN_FILE, |site| site.basename())
    }

    /// Call-site line, `0` when not captured
    pub fn line(&self) -> u32 {
        self.call_site.map_or(0, |site| site.line)
    }
}

/// Join the `Display` output of every argument with no separator
///
/// ```
/// use leveled_logger::core::record::concat_args;
///
/// assert_eq!(concat_args(&[&"retry ", &3, &"/", &5]), "retry 3/5");
/// ```
pub fn concat_args(args: &[&dyn fmt::Display]) -> String {
    let mut message = String::new();
    for arg in args {
        // Writing into a String cannot fail
        let _ = write!(message, "{}", arg);
    }
    message
}
