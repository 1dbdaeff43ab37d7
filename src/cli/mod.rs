// src/cli/mod.rs
//! Command-line interface definitions
//!
//! Declares the clap command tree: the `watch` polling loop, the
//! single-cycle `once` diagnostic, and `config` template generation.

/// Command and option structs parsed by clap
pub mod commands;

// Re-export for easier access
pub use commands::{Action, Commands, ConfigOptions, OnceOptions, WatchOptions};
