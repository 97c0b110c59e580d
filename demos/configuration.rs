//! Configuration example
//!
//! Builds loggers from defaults, `LOG_*` environment variables and a JSON
//! configuration file.
//!
//! Run with: LOG_LEVEL=debug LOG_FORMAT=json cargo run --example configuration

use leveled_logger::prelude::*;
use leveled_logger::{error, info};

fn main() {
    // Defaults: INFO, stdout, text
    let logger = LoggerConfig::default().apply();
    logger.info("Example 1: default configuration");
    logger.debug("Example 1: hidden at the default INFO level");

    // Environment variables
    let config = LoggerConfig::from_env();
    let logger = config.apply();
    logger.info(format_args!("Example 2: configured from environment: {:?}", config));
    logger.debug("Example 2: visible when LOG_LEVEL=debug");

    // File output in JSON
    let mut config = LoggerConfig {
        level: LogLevel::Debug,
        output: std::env::temp_dir()
            .join("leveled_logger_demo.jsonl")
            .display()
            .to_string(),
        format: "json".to_string(),
        ..LoggerConfig::default()
    };
    let file_logger = config.apply();
    file_logger.debug("Example 3: written to a file");
    info!(logger, "Example 3: JSON records appended to ", config.output);

    // Dynamic update, then rebuild
    config.update_format("text");
    config.update_level(LogLevel::Warn);
    config.output = "stderr".to_string();
    let logger = config.apply();
    logger.info("Example 4: hidden");
    logger.warn("Example 4: warnings go to stderr");

    // JSON configuration file
    match LoggerConfig::from_file("config.json") {
        Ok(config) => config.apply().info("Example 5: loaded from config.json"),
        Err(e) => error!(logger, "Failed to load config: ", e),
    }

    // Custom format without a formatter falls back to text
    let mut config = LoggerConfig::default();
    config.update_format("custom");
    config.apply().info("Example 6: text fallback for a missing custom formatter");
}
