// src/config/mod.rs
//! Configuration management for the XMR monitor
//!
//! This module handles all configuration-related functionality including:
//! - Loading and parsing configuration files
//! - Generating configuration templates
//! - Validating pool and oracle endpoints
//!
//! The configuration uses TOML format. Every tunable has a default; only
//! the wallet address is required.

/// Core configuration implementation
///
/// Contains the [`Config`] struct and related types that define
/// the monitor's configuration structure and behavior.
pub mod config;

// Re-export key items for easy access
pub use config::{Config, OracleConfig, PoolConfig, expand_wallet};

use crate::utils::error::MonitorError;
use std::path::PathBuf;

/// Loads monitor configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the configuration file (anything convertible to PathBuf)
///
/// # Returns
/// * `Ok(Config)` - Successfully loaded configuration
/// * `Err(MonitorError)` - If the file couldn't be read or parsed
pub fn load(path: impl Into<PathBuf>) -> Result<Config, MonitorError> {
    Config::load(path)
}

/// Generates a commented configuration template
///
/// # Returns
/// String containing a ready-to-use TOML configuration template
pub fn generate_template() -> String {
    Config::generate_template()
}
