//! Main logger implementation

use super::{
    formatter::Formatter,
    log_level::LogLevel,
    record::{CallSite, Record},
};
use crate::formatters::TextFormatter;
use crate::sinks::{self, Sink};
use parking_lot::{Mutex, RwLock};
use std::fmt::Display;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit status used when a FATAL record terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger writing formatted records to a single sink.
///
/// Logging is synchronous: each call filters, captures the call site, formats
/// and writes before returning. Write failures are ignored. The three mutable
/// fields sit behind `parking_lot` locks so a `Logger` can be shared across
/// threads; a record is always written with one `write_all`.
pub struct Logger {
    min_level: RwLock<LogLevel>,
    output: Mutex<Sink>,
    formatter: RwLock<Arc<dyn Formatter>>,
    enable_caller: AtomicBool,
}

impl Logger {
    /// Create a logger from an output sink, a minimum level and a formatter
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::{JsonFormatter, LogLevel, Logger};
    ///
    /// let logger = Logger::new(std::io::stderr(), LogLevel::Warn, JsonFormatter::new());
    /// logger.info("filtered out");
    /// ```
    pub fn new<W, F>(output: W, level: LogLevel, formatter: F) -> Self
    where
        W: Write + Send + 'static,
        F: Formatter + 'static,
    {
        Self::from_parts(Box::new(output), level, Arc::new(formatter))
    }

    /// Create a logger from an already boxed sink and shared formatter
    pub fn from_parts(output: Sink, level: LogLevel, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            min_level: RwLock::new(level),
            output: Mutex::new(output),
            formatter: RwLock::new(formatter),
            enable_caller: AtomicBool::new(true),
        }
    }

    /// Create a new logger builder
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Replace the sink. The previous sink is dropped.
    pub fn set_output<W: Write + Send + 'static>(&self, output: W) {
        self.set_sink(Box::new(output));
    }

    pub fn set_sink(&self, output: Sink) {
        *self.output.lock() = output;
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        self.set_shared_formatter(Arc::new(formatter));
    }

    pub fn set_shared_formatter(&self, formatter: Arc<dyn Formatter>) {
        *self.formatter.write() = formatter;
    }

    /// Enable or disable call-site capture.
    ///
    /// When disabled, formatters receive no call site and render `unknown:0`.
    pub fn set_enable_caller(&self, enable: bool) {
        self.enable_caller.store(enable, Ordering::Relaxed);
    }

    pub fn caller_enabled(&self) -> bool {
        self.enable_caller.load(Ordering::Relaxed)
    }

    /// Whether a record at `level` passes the current threshold
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    /// Log at an explicit level. A `Fatal` level terminates the process.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.dispatch(level, message);
        if level == LogLevel::Fatal {
            self.terminate();
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.dispatch(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.dispatch(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.dispatch(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.dispatch(LogLevel::Error, message);
    }

    /// Write a FATAL record, then exit the process with status 1.
    ///
    /// No destructors or exit hooks run; only the sink is flushed.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        self.dispatch(LogLevel::Fatal, message);
        self.terminate()
    }

    /// Shared routine behind every level method.
    ///
    /// Must stay `#[track_caller]`, like every function between it and the
    /// public API, so the captured call site is the application's.
    #[track_caller]
    fn dispatch(&self, level: LogLevel, message: impl Display) {
        if !self.enabled(level) {
            return;
        }

        // Called directly: passing `CallSite::caller` as a fn item would
        // report the location inside `Option` instead.
        let call_site = if self.caller_enabled() {
            Some(CallSite::caller())
        } else {
            None
        };

        let message = message.to_string();
        let record = Record::new(level, &message, call_site);

        // Clone the formatter out so a formatter may reconfigure the logger
        let formatter = Arc::clone(&*self.formatter.read());
        let formatted = formatter.format(&record);

        self.write(formatted.as_bytes());
    }

    /// Best-effort write; errors are discarded
    fn write(&self, bytes: &[u8]) {
        let mut output = self.output.lock();
        let _ = output.write_all(bytes);
        let _ = output.flush();
    }

    fn terminate(&self) -> ! {
        let _ = self.output.lock().flush();
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    /// Text records at INFO and above on stdout
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .output(std::io::stderr())
///     .formatter(JsonFormatter::new())
///     .enable_caller(false)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    output: Option<Sink>,
    formatter: Option<Arc<dyn Formatter>>,
    enable_caller: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            output: None,
            formatter: None,
            enable_caller: true,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the output sink (defaults to stdout)
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, output: Sink) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the formatter (defaults to [`TextFormatter`])
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable_caller(mut self, enable: bool) -> Self {
        self.enable_caller = enable;
        self
    }

    /// Build the logger
    pub fn build(self) -> Logger {
        let output = self.output.unwrap_or_else(sinks::stdout);
        let formatter = self
            .formatter
            .unwrap_or_else(|| Arc::new(TextFormatter::new()));

        let logger = Logger::from_parts(output, self.min_level, formatter);
        logger.set_enable_caller(self.enable_caller);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
