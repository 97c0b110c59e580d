//! JSON formatter for structured logging

use crate::core::{Formatter, Record, TimestampFormat};
use serde::Serialize;

/// Serialized shape of one record; field order is the output key order
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: &'static str,
    file: &'a str,
    line: u32,
    message: &'a str,
}

/// Writes each record as a single-line JSON object (JSONL)
///
/// ```text
/// {"timestamp":"2025-01-08T10:30:45+01:00","level":"INFO","file":"main.rs","line":12,"message":"ready"}
/// ```
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::Rfc3339,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Minimal record emitted when the full record cannot be rendered
    fn fallback(message: &str) -> String {
        let value = serde_json::json!({
            "error": "failed to format log message",
            "message": message,
        });
        format!("{}\n", value)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        let Ok(timestamp) = self.timestamp_format.try_format(&record.timestamp) else {
            return Self::fallback(record.message);
        };

        let json_record = JsonRecord {
            timestamp,
            level: record.level.to_str(),
            file: record.file(),
            line: record.line(),
            message: record.message,
        };

        match serde_json::to_string(&json_record) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(_) => Self::fallback(record.message),
        }
    }
}
