//! Plain text formatter

use crate::core::{Formatter, Record, TimestampFormat};

/// Renders `<timestamp> - <file>:<line> - [<LEVEL>] <message>\n`
///
/// # Example
///
/// ```
/// use leveled_logger::{Formatter, LogLevel, Record, TextFormatter};
///
/// let line = TextFormatter::new().format(&Record::new(LogLevel::Info, "ready", None));
/// assert!(line.ends_with(" - unknown:0 - [INFO] ready\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    timestamp_format: TimestampFormat,
    #[cfg(feature = "color")]
    use_colors: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format for this formatter
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_logger::{TextFormatter, TimestampFormat};
    ///
    /// let formatter = TextFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Colour the level name with ANSI escapes
    #[cfg(feature = "color")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "color")]
    fn level_name(&self, record: &Record<'_>) -> String {
        use colored::Colorize;

        let name = record.level.to_str();
        if self.use_colors {
            name.color(record.level.color_code()).to_string()
        } else {
            name.to_string()
        }
    }

    #[cfg(not(feature = "color"))]
    fn level_name(&self, record: &Record<'_>) -> String {
        record.level.to_str().to_string()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        format!(
            "{} - {}:{} - [{}] {}\n",
            self.timestamp_format.format(&record.timestamp),
            record.file(),
            record.line(),
            self.level_name(record),
            record.message
        )
    }
}
