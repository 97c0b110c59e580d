//! Basic logger usage example
//!
//! Demonstrates text, JSON and custom formatters and runtime level changes.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};

/// Sample custom formatter
struct BannerFormatter;

impl Formatter for BannerFormatter {
    fn format(&self, record: &Record<'_>) -> String {
        format!("**CUSTOM LOG** [{}] {}\n", record.level, record.message)
    }
}

fn main() {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    println!("1. Text records on stdout at INFO:");
    let logger = Logger::new(std::io::stdout(), LogLevel::Info, TextFormatter::new());
    logger.info("This is an info message");
    logger.debug("This debug message is hidden at INFO");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Lowering the threshold at runtime:");
    logger.set_level(LogLevel::Debug);
    logger.debug("Now this debug message is shown");

    println!("\n3. Switching to JSON records:");
    logger.set_formatter(JsonFormatter::new());
    info!(logger, "Request handled in ", 12, "ms");
    warn!(logger, "Message with \"quotes\" is escaped");

    println!("\n4. A custom formatter:");
    logger.set_formatter(BannerFormatter);
    logger.info("This is a custom formatted info message");

    println!("\n=== Example completed successfully! ===");
}
