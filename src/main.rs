// src/main.rs
use clap::Parser;
use tokio::runtime::Runtime;
use xmr_monitor_rs::utils::logging::init_diag_logging;
use xmr_monitor_rs::{self, *};

/// Main entry point for the XMR monitor
///
/// # Returns
/// - `Ok(())` on successful execution
/// - `Err(MonitorError)` if any operation fails
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Delegates to appropriate subcommand handler
/// 3. Propagates any errors upward
fn main() -> Result<(), MonitorError> {
    let cli = cli::Commands::parse();

    match cli.action {
        cli::Action::Watch(opts) => run_watch(opts),
        cli::Action::Once(opts) => run_once(opts),
        cli::Action::Config(opts) => generate_config(opts),
    }
}

/// Starts the polling loop with given configuration options
///
/// # Arguments
/// * `opts` - Command line options for the polling loop
///
/// # Operations
/// 1. Initializes logging
/// 2. Loads and validates configuration
/// 3. Applies CLI overrides
/// 4. Runs the monitor loop until interrupted
fn run_watch(opts: cli::WatchOptions) -> Result<(), MonitorError> {
    utils::init_logging();

    let mut config = config::load(&opts.config)?;
    // Apply CLI overrides
    if let Some(wallet) = opts.wallet {
        config.wallet_address = wallet;
    }
    if let Some(interval) = opts.interval {
        config.poll_interval_secs = interval;
    }
    config.validate()?;

    let monitor = monitor::Monitor::new(config);

    // Runtime setup
    let rt = Runtime::new()?;
    rt.block_on(monitor.run())
}

/// Runs a single polling cycle and exits
///
/// # Arguments
/// * `opts` - Command line options for the diagnostic cycle
///
/// # Operations
/// 1. Initializes diagnostic (debug-default) logging
/// 2. Loads configuration
/// 3. Runs exactly one cycle and prints the report
fn run_once(opts: cli::OnceOptions) -> Result<(), MonitorError> {
    init_diag_logging();

    let config = config::load(&opts.config)?;
    let monitor = monitor::Monitor::new(config);

    let rt = Runtime::new()?;
    rt.block_on(monitor.run_once())
}

/// Generates configuration template file
///
/// # Arguments
/// * `opts` - Configuration generation options
///
/// # Operations
/// 1. Generates template content
/// 2. Writes template to specified output file
fn generate_config(opts: cli::ConfigOptions) -> Result<(), MonitorError> {
    let config = config::generate_template();
    std::fs::write(opts.output, config)?;
    Ok(())
}
