// src/network/mod.rs
//! Network communication components
//!
//! This module handles all HTTP interactions with mining pools and the
//! price/network oracles. It provides two main client implementations:
//! - `PoolStatsClient`: fetches and normalizes one pool's account statistics
//! - `OracleClient`: fetches the exchange rate and network difficulty context

/// Pool statistics fetcher
///
/// Queries a pool's stats, identifier, and hashrate-chart endpoints and
/// merges them into one normalized record, retrying transient failures
/// and degrading gracefully when detail endpoints are unavailable.
pub mod pool;

/// Price and network-info oracle client
///
/// Fetches the current USD/XMR rate (with a configured fallback) and
/// the network difficulty/height/reward used by the earnings estimator.
pub mod oracle;

// Re-export main components for cleaner imports
pub use oracle::OracleClient;
pub use pool::PoolStatsClient;
