//! XMR Monitor - Monero mining pool account monitoring in Rust
//!
//! This crate provides a terminal monitor for Monero (XMR) mining pool
//! accounts with support for:
//! - Polling pool HTTP APIs on a fixed interval
//! - Per-worker hashrate detail with graceful degradation
//! - Payout timing and earnings estimation
//! - A fixed-width terminal dashboard report

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Monitor loop driving the fetch/estimate/render cycle
pub mod monitor;

/// Network communication components for pool and oracle queries
pub mod network;

/// Report rendering functionality
pub mod report;

/// Earnings estimation and payout timing
pub mod stats;

/// Utility functions, formatting, and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Configuration management
pub mod config;

/// Shared type definitions
pub mod types;

// Core exports
pub use cli::Commands;
pub use config::Config;
pub use monitor::Monitor;
pub use network::{OracleClient, PoolStatsClient};
pub use report::{PoolReportEntry, render_report};
pub use stats::{EarningsProjection, PayoutEta, time_to_payout, xmr_per_day};
pub use types::{NetworkInfo, PoolStatsRecord, PoolStatus, WorkerRecord};
pub use utils::{MonitorError, init_logging};
