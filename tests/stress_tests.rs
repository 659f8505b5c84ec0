//! Stress tests for concurrent logging
//!
//! Loggers hold no mutable state; these tests verify that sharing one across
//! threads delivers every enabled call exactly once and never interleaves
//! the lines a stream console writes.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use structured_logger::prelude::*;
use tempfile::TempDir;

#[test]
fn test_concurrent_logging_to_file_console() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = temp_dir.path().join("concurrent_out.log");
    let err_path = temp_dir.path().join("concurrent_err.log");

    let console = StreamConsole::new(
        fs::File::create(&out_path).unwrap(),
        fs::File::create(&err_path).unwrap(),
    );
    let logger = Arc::new(
        Logger::builder()
            .level(LogLevel::Debug)
            .format(JsonFormatter::new())
            .transport(ConsoleTransport::with_console(console))
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..250 {
                    let ctx = context! { "thread" => thread_id, "seq" => i };
                    if i % 2 == 0 {
                        logger.info_with_context("even", ctx).unwrap();
                    } else {
                        logger.error_with_context("odd", ctx).unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let out = fs::read_to_string(&out_path).unwrap();
    let err = fs::read_to_string(&err_path).unwrap();
    assert_eq!(out.lines().count(), 1000);
    assert_eq!(err.lines().count(), 1000);

    // every line is one intact JSON object
    for line in out.lines().chain(err.lines()) {
        let value: serde_json::Value = serde_json::from_str(line).expect("intact line");
        assert!(value["context"]["seq"].is_number());
    }
}

#[test]
fn test_gated_calls_under_load_never_reach_sink() {
    let writes = Arc::new(AtomicUsize::new(0));
    let sink = |writes: &Arc<AtomicUsize>| {
        let writes = Arc::clone(writes);
        move |_: &str| {
            writes.fetch_add(1, Ordering::Relaxed);
            Ok::<(), std::io::Error>(())
        }
    };

    let transport = ConsoleTransport::from_sinks(
        ConsoleSinks::new()
            .debug(sink(&writes))
            .info(sink(&writes))
            .warn(sink(&writes))
            .error(sink(&writes)),
    )
    .unwrap();
    let logger = Arc::new(
        Logger::builder()
            .level(LogLevel::Warn)
            .transport(transport)
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..500 {
                    logger.debug("hidden").unwrap();
                    logger.info("hidden").unwrap();
                    logger.warn("shown").unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(writes.load(Ordering::Relaxed), 2000);
}
