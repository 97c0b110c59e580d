//! Core logger types and traits

pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use formatter::{FnFormatter, FormatKind, Formatter};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use record::{CallSite, Record};
pub use timestamp::TimestampFormat;
