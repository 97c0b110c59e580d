//! # Leveled Logger
//!
//! A small synchronous logging library: five severities, a minimum-level
//! filter, pluggable formatters and a single output sink.
//!
//! ## Features
//!
//! - **Level filtering**: `DEBUG < INFO < WARN < ERROR < FATAL`
//! - **Pluggable formatters**: plain text, single-line JSON, or your own
//! - **Accurate call sites**: file and line of the application's call
//! - **Configuration**: defaults, `LOG_*` environment variables or a JSON file
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(buffer.clone(), LogLevel::Info, TextFormatter::new());
//!
//! info!(logger, "listening on port ", 8080);
//! assert!(buffer.contents().contains("[INFO] listening on port 8080"));
//! ```

pub mod config;
pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::LoggerConfig;
    pub use crate::core::{
        CallSite, FnFormatter, FormatKind, Formatter, LogLevel, Logger, LoggerBuilder,
        LoggerError, Record, Result, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
    pub use crate::sinks::{OutputTarget, SharedBuffer, Sink};
}

pub use config::LoggerConfig;
pub use self::core::{
    CallSite, FnFormatter, FormatKind, Formatter, LogLevel, Logger, LoggerBuilder, LoggerError,
    Record, Result, TimestampFormat, FATAL_EXIT_CODE,
};
pub use formatters::{JsonFormatter, TextFormatter};
pub use sinks::{OutputTarget, SharedBuffer, Sink};
