//! Formatter implementations

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

// Re-export traits for convenience
pub use crate::core::{FnFormatter, FormatKind, Formatter};
