//! Concurrent logging tests
//!
//! These tests verify:
//! - Records from many threads are written whole, one per line
//! - Reconfiguration from another thread does not corrupt records

use leveled_logger::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_records_stay_intact() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new(
        buffer.clone(),
        LogLevel::Info,
        JsonFormatter::new(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    logger.info(format!("Thread {} - Message {}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let content = buffer.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 800, "Should have 800 records from 8 threads * 100 messages");
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("whole JSON record");
        assert_eq!(parsed["file"], "concurrency_tests.rs");
    }
}

#[test]
fn test_level_changes_while_logging() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::new(
        buffer.clone(),
        LogLevel::Debug,
        TextFormatter::new(),
    ));

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                logger.warn(format!("warn {}", i));
                logger.debug(format!("debug {}", i));
            }
        })
    };

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                let level = if i % 2 == 0 { LogLevel::Warn } else { LogLevel::Debug };
                logger.set_level(level);
            }
        })
    };

    writer.join().expect("writer panicked");
    toggler.join().expect("toggler panicked");

    let content = buffer.contents();
    // WARN always passes both thresholds
    assert_eq!(content.matches("[WARN]").count(), 500);
    for line in content.lines() {
        assert!(line.contains("[WARN] warn ") || line.contains("[DEBUG] debug "));
    }
}
