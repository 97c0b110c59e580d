//! Timestamp formatting utilities
//!
//! Text records use a human-readable local time to second precision, JSON
//! records use RFC 3339 with the local offset.

use chrono::{DateTime, Local, SecondsFormat};
use std::fmt::{self, Write};

/// Layout used by the text formatter
pub const TEXT_TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::Text.format(&Local::now());
/// assert_eq!(stamp.len(), "2025-01-08 10:30:45".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    Text,

    /// RFC 3339 with seconds precision: `2025-01-08T10:30:45+02:00`
    ///
    /// UTC renders with a `Z` suffix.
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format, substituting the text layout if a custom pattern is invalid
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        self.try_format(datetime)
            .unwrap_or_else(|_| datetime.format(TEXT_TIMESTAMP_LAYOUT).to_string())
    }

    /// Format, failing when a custom strftime pattern cannot be rendered
    pub fn try_format(&self, datetime: &DateTime<Local>) -> Result<String, fmt::Error> {
        match self {
            TimestampFormat::Text => Ok(datetime.format(TEXT_TIMESTAMP_LAYOUT).to_string()),
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339_opts(SecondsFormat::Secs, true)),
            TimestampFormat::Custom(format_str) => {
                let mut formatted = String::new();
                write!(formatted, "{}", datetime.format(format_str))?;
                Ok(formatted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn fixed_datetime() -> DateTime<Local> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            .with_timezone(&Local)
    }

    #[test]
    fn test_text_format() {
        let dt = fixed_datetime();
        let formatted = TimestampFormat::Text.format(&dt);
        assert_eq!(formatted, dt.format("%Y-%m-%d %H:%M:%S").to_string());
        assert_eq!(formatted.len(), 19);
    }

    #[test]
    fn test_rfc3339_round_trips_through_chrono() {
        let dt = fixed_datetime();
        let formatted = TimestampFormat::Rfc3339.format(&dt);
        let parsed = DateTime::<FixedOffset>::parse_from_rfc3339(&formatted)
            .expect("rfc3339 output should parse");
        assert_eq!(parsed.timestamp(), dt.timestamp());
        assert!(!formatted.contains('.'), "seconds precision only");
    }

    #[test]
    fn test_custom_format() {
        let dt = fixed_datetime();
        let format = TimestampFormat::Custom("%Y".to_string());
        assert_eq!(format.format(&dt), dt.format("%Y").to_string());
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let dt = fixed_datetime();
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(format.try_format(&dt).is_err());
        assert_eq!(format.format(&dt), TimestampFormat::Text.format(&dt));
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Text);
    }
}
