// src/stats/mod.rs
//! Earnings estimation module
//!
//! This module turns fetched statistics into derived figures:
//! - Expected XMR/day for a given hashrate
//! - Time until the payout threshold is reached
//! - Day/week/month/year earnings projections
//!
//! Everything here is pure math over values produced by the network
//! layer; no I/O and no state.

/// Submodule containing the estimation functions
///
/// The estimator prefers a network-share calculation over a static
/// divisor whenever current difficulty is available.
pub mod estimator;

// Re-export main components
pub use estimator::{EarningsProjection, PayoutEta, time_to_payout, xmr_per_day};
