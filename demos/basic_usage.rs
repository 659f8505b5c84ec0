//! Basic logger usage example
//!
//! Demonstrates the factory defaults, JSON output, structured context and
//! error details.
//!
//! Run with: cargo run --example basic_usage

use structured_logger::prelude::*;
use structured_logger::{info, warn};

#[derive(Debug)]
struct ConfigError;

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "port must be between 1 and 65535")
    }
}

impl std::error::Error for ConfigError {}

fn main() -> Result<()> {
    println!("=== Structured Logger - Basic Usage Example ===\n");

    // Factory defaults: INFO level, human formatter, console transport
    println!("1. Default logger (debug is hidden):");
    let logger = LoggerFactory::create_logger();
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;

    println!("\n2. Human output with context and error:");
    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .context(context! { "service" => "demo" })
        .build()?;
    info!(logger, "Listening on port {}", 8080)?;
    logger.error_with_cause(
        "Invalid configuration",
        Some(context! { "port" => 0 }),
        ErrorInfo::from_error(&ConfigError),
    )?;

    println!("\n3. Pretty JSON output:");
    let logger = LoggerFactory::create_logger_with(
        LoggerConfig::new().format(JsonFormatter::new_pretty()),
    );
    warn!(logger, "Disk usage at {}%", 91)?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
