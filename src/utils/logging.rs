// src/utils/logging.rs
//! Logging configuration and utilities
//!
//! This module handles logging setup for the monitor application,
//! including:
//! - Standard logging configuration for the polling loop
//! - Diagnostic logging for one-shot runs
//! - Custom log formatting
//!
//! Uses `env_logger` under the hood with custom formatting and filtering.
//! Log lines go to stderr so they form a separate append-only stream next
//! to the report, which owns stdout.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;

/// Initializes the logging subsystem with sensible defaults
///
/// # Configuration
/// - Logs to stderr
/// - Default log level: Info
/// - Custom timestamp and source location formatting
/// - Respects `RUST_LOG` environment variable if set
pub fn init_logging() {
    common_log_config().filter(None, LevelFilter::Info).init();
}

/// Configures diagnostic logging for single-cycle runs
///
/// # Differences from Standard Logging
/// - Default log level: Debug (if RUST_LOG not set)
/// - Surfaces per-enrichment-call outcomes that Info hides
/// - Same custom formatting as standard logging
pub fn init_diag_logging() {
    let mut builder = common_log_config();

    // Set default to debug level if RUST_LOG not configured
    if env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.parse_env("RUST_LOG");
    }

    builder.init();
}

/// Creates and configures a base logger builder with common settings
///
/// # Features
/// - Custom log format including:
///   - Timestamp (seconds since epoch)
///   - Log level
///   - Module path
///   - Line number
///   - Message
/// - Output to stderr
///
/// # Returns
/// Partially configured `env_logger::Builder` instance
fn common_log_config() -> Builder {
    let mut builder = Builder::new();

    builder
        .format(|buf, record| {
            use std::io::Write;
            let ts = buf.timestamp_seconds();
            let level = record.level();
            let module = record.module_path().unwrap_or_default();
            let line = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                ts,
                level,
                module,
                line,
                record.args()
            )
        })
        .target(Target::Stderr);

    builder
}
