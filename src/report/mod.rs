// src/report/mod.rs
//! Report rendering module
//!
//! This module composes the per-cycle terminal dashboard: a header, one
//! bordered block per pool, an aggregate summary, and an earnings
//! projection. All functions are pure and return strings; the monitor
//! loop owns the actual printing.

/// Submodule containing the renderer implementation
///
/// Fixed-width text layout built from values pre-computed by the
/// fetcher and estimator.
pub mod renderer;

// Re-export main components
pub use renderer::{PoolReportEntry, render_report};
