// src/cli/commands.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// XMR Monitor CLI - Monero mining pool monitoring in Rust
#[derive(Parser, Debug)]
#[command(name = "xmr-monitor-rs")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// The action to perform (watch pools, run one cycle, or generate config)
    #[command(subcommand)]
    pub action: Action,
}

/// Top-level commands for the monitor application
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Start the polling loop with specified options
    Watch(WatchOptions),

    /// Run a single polling cycle and exit
    Once(OnceOptions),

    /// Generate configuration file template
    Config(ConfigOptions),
}

/// Options for the polling loop
#[derive(Parser, Debug)]
pub struct WatchOptions {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Wallet address to watch (overrides config)
    #[arg(short, long)]
    pub wallet: Option<String>,

    /// Seconds between polling cycles (overrides config)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

/// Options for a single diagnostic cycle
#[derive(Parser, Debug)]
pub struct OnceOptions {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Options for generating configuration files
#[derive(Parser, Debug)]
pub struct ConfigOptions {
    /// Output file path
    #[arg(short, long, default_value = "config.toml")]
    pub output: PathBuf,
}
