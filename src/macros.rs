//! Logging macros taking any number of message parts.
//!
//! Every argument is rendered with its `Display` implementation and the
//! pieces are joined with no separator, like a print-style join. The call
//! site recorded is the line of the macro invocation.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warn};
//!
//! let logger = Logger::builder().output(SharedBuffer::new()).build();
//!
//! // Single part
//! info!(logger, "Server started");
//!
//! // Parts are concatenated as-is
//! let port = 8080;
//! info!(logger, "Server listening on port ", port);
//!
//! // Use format_args! for templated messages
//! warn!(logger, format_args!("Retry {} of {}", 3, 5));
//! ```

/// Log the concatenated parts at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().output(SharedBuffer::new()).build();
/// use leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log(
            $level,
            $crate::core::record::concat_args(&[$(&$arg as &dyn ::std::fmt::Display),+]),
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().output(SharedBuffer::new()).build();
/// use leveled_logger::debug;
/// debug!(logger, "Counter value: ", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg),+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().output(SharedBuffer::new()).build();
/// use leveled_logger::info;
/// info!(logger, "Processing ", 100, " items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg),+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg),+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().output(SharedBuffer::new()).build();
/// use leveled_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json");
/// error!(logger, "Failed to load config: ", err);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg),+)
    };
}

/// Log a fatal-level message and exit the process.
///
/// Expands to an expression of type `!`.
///
/// ```no_run
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::default();
/// use leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: ", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.fatal($crate::core::record::concat_args(
            &[$(&$arg as &dyn ::std::fmt::Display),+],
        ))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::formatters::TextFormatter;
    use crate::sinks::SharedBuffer;

    fn logger() -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone(), LogLevel::Debug, TextFormatter::new());
        (logger, buffer)
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = logger();
        log!(logger, LogLevel::Info, "Formatted: ", 42);
        assert!(buffer.contents().contains("[INFO] Formatted: 42\n"));
    }

    #[test]
    fn test_parts_join_without_spaces() {
        let (logger, buffer) = logger();
        info!(logger, 1, 2, "three", 4.5);
        assert!(buffer.contents().contains("[INFO] 12three4.5\n"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = logger();
        debug!(logger, "Debug message");
        info!(logger, "Info message");
        warn!(logger, "Retry ", 1, " of ", 3);
        error!(logger, "Code: ", 500);

        let output = buffer.contents();
        assert!(output.contains("[DEBUG] Debug message"));
        assert!(output.contains("[INFO] Info message"));
        assert!(output.contains("[WARN] Retry 1 of 3"));
        assert!(output.contains("[ERROR] Code: 500"));
    }

    #[test]
    fn test_macro_call_site() {
        let (logger, buffer) = logger();
        let line = line!() + 1;
        warn!(logger, "here");
        assert!(buffer
            .contents()
            .contains(&format!("macros.rs:{} - [WARN] here", line)));
    }

    #[test]
    fn test_format_args_part() {
        let (logger, buffer) = logger();
        error!(logger, format_args!("{}/{}", 1, 2));
        assert!(buffer.contents().contains("[ERROR] 1/2\n"));
    }
}
