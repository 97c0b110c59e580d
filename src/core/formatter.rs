//! Formatter trait for rendering log records

use super::record::Record;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Renders a record into the final text written to the sink.
///
/// The returned string is the complete record, including its trailing line
/// terminator; the logger writes it verbatim. Implementations must not fail:
/// any internal error has to be folded into the returned text.
///
/// # Example
///
/// ```
/// use leveled_logger::{Formatter, Record};
///
/// struct Banner;
///
/// impl Formatter for Banner {
///     fn format(&self, record: &Record<'_>) -> String {
///         format!("**CUSTOM LOG** [{}] {}\n", record.level, record.message)
///     }
/// }
/// ```
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record<'_>) -> String;
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, record: &Record<'_>) -> String {
        (**self).format(record)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, record: &Record<'_>) -> String {
        (**self).format(record)
    }
}

/// Adapts a closure into a [`Formatter`]
pub struct FnFormatter<F>(pub F);

impl<F> Formatter for FnFormatter<F>
where
    F: Fn(&Record<'_>) -> String + Send + Sync,
{
    fn format(&self, record: &Record<'_>) -> String {
        (self.0)(record)
    }
}

impl<F> fmt::Debug for FnFormatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFormatter")
    }
}

/// Named formatter selection used by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatKind {
    #[default]
    Text,
    Json,
    /// A formatter supplied by the embedding application
    Custom,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Text => "text",
            FormatKind::Json => "json",
            FormatKind::Custom => "custom",
        }
    }

    /// Case-insensitive; unrecognized names select [`FormatKind::Text`]
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => FormatKind::Json,
            "custom" => FormatKind::Custom,
            _ => FormatKind::Text,
        }
    }
}

impl FromStr for FormatKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
