// src/utils/error.rs
use serde_json;
use std::io;
use thiserror::Error;
use url;

/// Main error type for the monitoring application
///
/// This enum represents all possible error conditions that can occur
/// outside the per-pool fetch pipeline (which degrades into record
/// fields instead of erroring), including I/O, configuration, and
/// HTTP client construction errors.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Configuration file or parameter errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
