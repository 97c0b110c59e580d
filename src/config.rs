//! Logger configuration
//!
//! Assembles a [`Logger`] from a handful of named options taken from
//! defaults, environment variables or a JSON file. Assembly never fails:
//! an unusable output or a missing custom formatter degrades to stdout and
//! the text formatter with a diagnostic on stderr. Only reading a
//! configuration file reports an error.

use crate::core::{FormatKind, Formatter, LogLevel, Logger, LoggerError, Result};
use crate::formatters::{JsonFormatter, TextFormatter};
use crate::sinks::OutputTarget;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

pub const ENV_LEVEL: &str = "LOG_LEVEL";
pub const ENV_OUTPUT: &str = "LOG_OUTPUT";
pub const ENV_FORMAT: &str = "LOG_FORMAT";
pub const ENV_ENABLE_CALLER: &str = "LOG_ENABLE_CALLER";

/// Settings a [`Logger`] is assembled from
///
/// # File format
///
/// ```json
/// {
///   "level": "DEBUG",
///   "output": "stdout",
///   "format": "json",
///   "enable_caller": true
/// }
/// ```
///
/// Missing keys keep their defaults and unknown keys are ignored.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    /// `"stdout"`, `"stderr"` or a file path
    pub output: String,
    /// `"text"`, `"json"` or `"custom"`
    pub format: String,
    pub enable_caller: bool,
    /// Formatter used when `format` is `"custom"`
    #[serde(skip)]
    pub custom: Option<Arc<dyn Formatter>>,
}

impl Default for LoggerConfig {
    /// INFO level, text records on stdout, caller capture on
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            output: "stdout".to_string(),
            format: FormatKind::Text.as_str().to_string(),
            enable_caller: true,
            custom: None,
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("output", &self.output)
            .field("format", &self.format)
            .field("enable_caller", &self.enable_caller)
            .field("custom", &self.custom.as_ref().map(|_| "<formatter>"))
            .finish()
    }
}

impl LoggerConfig {
    /// Defaults overridden by `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT` and
    /// `LOG_ENABLE_CALLER` from the process environment
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] with an injectable variable lookup
    ///
    /// Empty values are treated as unset. Caller capture is only disabled by
    /// the exact value `false`.
    ///
    /// ```
    /// use leveled_logger::{LogLevel, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_env_with(|key| match key {
    ///     "LOG_LEVEL" => Some("debug".to_string()),
    ///     "LOG_FORMAT" => Some("JSON".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level, LogLevel::Debug);
    /// assert_eq!(config.format, "json");
    /// ```
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(level) = var(ENV_LEVEL) {
            config.level = LogLevel::parse_lenient(&level);
        }
        if let Some(output) = var(ENV_OUTPUT) {
            config.output = output;
        }
        if let Some(format) = var(ENV_FORMAT) {
            config.format = format.to_lowercase();
        }
        if var(ENV_ENABLE_CALLER).as_deref() == Some("false") {
            config.enable_caller = false;
        }

        config
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                path.display().to_string(),
                e,
            )
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| LoggerError::config_parse(path.display().to_string(), e))
    }

    /// Parse configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn update_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Select a formatter by name; stored lower-cased
    pub fn update_format(&mut self, format: &str) {
        self.format = format.to_lowercase();
    }

    /// Supply a custom formatter and select it
    #[must_use]
    pub fn with_custom<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.custom = Some(Arc::new(formatter));
        self.format = FormatKind::Custom.as_str().to_string();
        self
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::parse(&self.output)
    }

    pub fn format_kind(&self) -> FormatKind {
        FormatKind::parse_lenient(&self.format)
    }

    /// Formatter named by `format`, with the text fallbacks applied
    pub fn resolve_formatter(&self) -> Arc<dyn Formatter> {
        match self.format_kind() {
            FormatKind::Json => Arc::new(JsonFormatter::new()),
            FormatKind::Custom => match &self.custom {
                Some(formatter) => Arc::clone(formatter),
                None => {
                    eprintln!(
                        "[LOGGER ERROR] Custom format selected but no formatter supplied, \
                         using text format"
                    );
                    Arc::new(TextFormatter::new())
                }
            },
            FormatKind::Text => Arc::new(TextFormatter::new()),
        }
    }

    /// Build a logger from this configuration
    ///
    /// A file output is opened for appending; if that fails the logger
    /// writes to stdout instead.
    ///
    /// ```
    /// use leveled_logger::LoggerConfig;
    ///
    /// let logger = LoggerConfig::default().apply();
    /// logger.info("configured");
    /// ```
    pub fn apply(&self) -> Logger {
        Logger::builder()
            .min_level(self.level)
            .sink(self.output_target().open())
            .shared_formatter(self.resolve_formatter())
            .enable_caller(self.enable_caller)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FnFormatter;
    use crate::core::Record;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, "stdout");
        assert_eq!(config.format, "text");
        assert!(config.enable_caller);
        assert!(config.custom.is_none());
    }

    #[test]
    fn test_from_env() {
        let config = LoggerConfig::from_env_with(env(&[
            ("LOG_LEVEL", "error"),
            ("LOG_OUTPUT", "stderr"),
            ("LOG_FORMAT", "Json"),
            ("LOG_ENABLE_CALLER", "false"),
        ]));
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.output_target(), OutputTarget::Stderr);
        assert_eq!(config.format_kind(), FormatKind::Json);
        assert!(!config.enable_caller);
    }

    #[test]
    fn test_from_env_fallbacks() {
        let config = LoggerConfig::from_env_with(env(&[
            ("LOG_LEVEL", "chatty"),
            ("LOG_OUTPUT", ""),
            ("LOG_FORMAT", "yaml"),
            ("LOG_ENABLE_CALLER", "no"),
        ]));
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, "stdout");
        assert_eq!(config.format_kind(), FormatKind::Text);
        assert!(config.enable_caller);
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"level": "DEBUG", "output": "stderr", "format": "json", "enable_caller": false, "filepath": ""}"#,
        )?;

        let config = LoggerConfig::from_file(&path)?;
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.output, "stderr");
        assert_eq!(config.format, "json");
        assert!(!config.enable_caller);
        Ok(())
    }

    #[test]
    fn test_from_file_partial_and_numeric_level() -> Result<()> {
        let config = LoggerConfig::from_json_str(r#"{"level": 3}"#)?;
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.output, "stdout");
        assert_eq!(config.format, "text");
        Ok(())
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempdir().expect("temp dir");

        let missing = LoggerConfig::from_file(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(LoggerError::IoOperation { .. })));

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ level: ").expect("write config");
        let broken = LoggerConfig::from_file(&path);
        assert!(matches!(broken, Err(LoggerError::ConfigParse { .. })));
    }

    #[test]
    fn test_updates() {
        let mut config = LoggerConfig::default();
        config.update_level(LogLevel::Warn);
        config.update_format("JSON");
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, "json");
    }

    #[test]
    fn test_custom_without_formatter_uses_text() {
        let mut config = LoggerConfig::default();
        config.update_format("custom");
        let formatter = config.resolve_formatter();
        let output = formatter.format(&Record::new(LogLevel::Info, "plain", None));
        assert!(output.ends_with(" - unknown:0 - [INFO] plain\n"));
    }

    #[test]
    fn test_custom_formatter_selected() {
        let config = LoggerConfig::default()
            .with_custom(FnFormatter(|record: &Record<'_>| format!("<{}>\n", record.message)));
        assert_eq!(config.format_kind(), FormatKind::Custom);
        let output = config
            .resolve_formatter()
            .format(&Record::new(LogLevel::Info, "mine", None));
        assert_eq!(output, "<mine>\n");
    }

    #[test]
    fn test_apply_writes_to_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.jsonl");
        let config = LoggerConfig {
            level: LogLevel::Debug,
            output: path.display().to_string(),
            format: "json".to_string(),
            ..LoggerConfig::default()
        };

        let logger = config.apply();
        logger.debug("to file");
        drop(logger);

        let content = fs::read_to_string(&path)?;
        let parsed: serde_json::Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(parsed["level"], "DEBUG");
        assert_eq!(parsed["message"], "to file");
        assert_eq!(parsed["file"], "config.rs");
        Ok(())
    }
}
