//! Log level definitions

use super::error::LoggerError;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, ordered `Debug < Info < Warn < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Map a raw level value back to a level
    pub fn from_repr(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Canonical name for a raw level value, `"UNKNOWN"` when out of range
    pub fn name_of(value: u8) -> &'static str {
        Self::from_repr(value).map_or("UNKNOWN", |level| level.to_str())
    }

    /// Parse a level name, falling back to [`LogLevel::Info`]
    ///
    /// Matching is case-insensitive. Empty and unrecognized names resolve to
    /// `Info` instead of failing; use `str::parse` for strict parsing.
    ///
    /// ```
    /// use leveled_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse_lenient("debug"), LogLevel::Debug);
    /// assert_eq!(LogLevel::parse_lenient("verbose"), LogLevel::Info);
    /// ```
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    #[cfg(feature = "color")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}

/// Accepts a level name (lenient) or its integer value
struct LogLevelVisitor;

impl<'de> Visitor<'de> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a log level name or an integer between 0 and 4")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LogLevel, E> {
        Ok(LogLevel::parse_lenient(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LogLevel, E> {
        u8::try_from(v)
            .ok()
            .and_then(LogLevel::from_repr)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LogLevel, E> {
        u8::try_from(v)
            .ok()
            .and_then(LogLevel::from_repr)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}
