// src/monitor/cycle.rs

//! Polling cycle orchestration
//!
//! One [`Monitor`] value owns the immutable configuration and the
//! network clients. Each tick it fetches the oracle context and every
//! pool's record in sequence, derives payout timing, renders the
//! report, and prints it to stdout. The loop sleeps between ticks and
//! recovers from cycle-level failures with a short cooldown instead of
//! exiting.
use crate::config::Config;
use crate::network::{OracleClient, PoolStatsClient};
use crate::report::{PoolReportEntry, render_report};
use crate::stats::{EarningsProjection, time_to_payout, xmr_per_day};
use crate::types::PoolStatus;
use crate::utils::error::MonitorError;
use crate::utils::format::shorten_wallet;
use chrono::Local;
use std::time::Duration;

/// Pause between queries to independent pools, for display pacing only
const POOL_PACING_DELAY: Duration = Duration::from_secs(1);

/// Pause after a failed cycle before the loop resumes
const CYCLE_FAILURE_COOLDOWN: Duration = Duration::from_secs(30);

/// The polling monitor: configuration plus one client per data source
pub struct Monitor {
    /// Immutable configuration fixed at startup
    config: Config,
    /// One stats client per configured pool, in configuration order
    pools: Vec<PoolStatsClient>,
    /// Price and network-info client
    oracle: OracleClient,
}

impl Monitor {
    /// Creates a Monitor from a validated configuration
    ///
    /// # Arguments
    /// * `config` - The loaded configuration; consumed and held for the
    ///   monitor's lifetime
    pub fn new(config: Config) -> Self {
        let retry_delay = Duration::from_secs(config.retry_delay_secs);
        let pools = config
            .pools
            .iter()
            .map(|pool| {
                PoolStatsClient::new(
                    pool,
                    &config.wallet_address,
                    config.max_retries,
                    retry_delay,
                )
            })
            .collect();
        let oracle = OracleClient::new(&config.oracle, config.fallback_price_usd);

        Monitor {
            config,
            pools,
            oracle,
        }
    }

    /// Runs the polling loop until interrupted
    ///
    /// Each iteration runs one cycle and prints the report, then sleeps
    /// for the configured interval. A failed cycle is logged and
    /// followed by a short cooldown instead of the full interval. The
    /// interrupt signal is checked while sleeping, so an in-flight
    /// cycle always completes before the loop stops.
    pub async fn run(&self) -> Result<(), MonitorError> {
        log::info!(
            "starting XMR monitor for wallet {}",
            shorten_wallet(&self.config.wallet_address)
        );
        log::info!(
            "polling {} pool(s) every {} seconds",
            self.pools.len(),
            self.config.poll_interval_secs
        );

        let poll_interval = Duration::from_secs(self.config.poll_interval_secs);
        let mut iteration: u64 = 0;

        loop {
            iteration += 1;
            let wait = match self.run_cycle().await.and_then(|report| emit(&report)) {
                Ok(()) => {
                    log::info!(
                        "cycle #{} complete, next update in {}s",
                        iteration,
                        self.config.poll_interval_secs
                    );
                    poll_interval
                }
                Err(e) => {
                    log::error!(
                        "cycle #{} failed: {}; resuming in {}s",
                        iteration,
                        e,
                        CYCLE_FAILURE_COOLDOWN.as_secs()
                    );
                    CYCLE_FAILURE_COOLDOWN
                }
            };

            if wait_or_interrupt(wait).await {
                log::info!("interrupt received, stopping monitor");
                break;
            }
        }

        Ok(())
    }

    /// Runs a single cycle and prints the report (the `once` subcommand)
    pub async fn run_once(&self) -> Result<(), MonitorError> {
        let report = self.run_cycle().await?;
        emit(&report)
    }

    /// Executes one polling cycle and renders the report
    ///
    /// Fetches the price and network context, then each pool in
    /// sequence with a small pacing delay between pools, logging every
    /// fetch outcome. Pool fetches cannot fail - their errors are
    /// already folded into the records - so a cycle only fails on
    /// conditions outside the fetch pipeline.
    async fn run_cycle(&self) -> Result<String, MonitorError> {
        let price = self.oracle.fetch_price().await;
        let network = self.oracle.fetch_network().await;

        let mut entries = Vec::with_capacity(self.pools.len());
        for (i, (client, pool)) in self.pools.iter().zip(&self.config.pools).enumerate() {
            if i > 0 {
                tokio::time::sleep(POOL_PACING_DELAY).await;
            }

            log::info!("fetching stats from {}", client.name());
            let record = client.fetch_stats().await;
            match record.status {
                PoolStatus::Online => log::info!(
                    "{}: online, {:.2} H/s, {} worker(s)",
                    record.pool_name,
                    record.hashrate,
                    record.worker_count
                ),
                PoolStatus::Offline => log::info!(
                    "{}: offline ({})",
                    record.pool_name,
                    record.error_message.as_deref().unwrap_or("no reason given")
                ),
                PoolStatus::Error => log::warn!(
                    "{}: fetch failed ({})",
                    record.pool_name,
                    record.error_message.as_deref().unwrap_or("unknown error")
                ),
            }

            let daily_rate = xmr_per_day(record.hashrate, network.as_ref());
            let eta = time_to_payout(
                record.balance,
                record.hashrate,
                pool.payout_threshold,
                daily_rate,
            );
            entries.push(PoolReportEntry {
                record,
                payout_threshold: pool.payout_threshold,
                eta,
            });
        }

        let total_hashrate: f64 = entries
            .iter()
            .filter(|e| e.record.status == PoolStatus::Online)
            .map(|e| e.record.hashrate)
            .sum();
        let projection = (total_hashrate > 0.0)
            .then(|| EarningsProjection::from_daily(xmr_per_day(total_hashrate, network.as_ref())));

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Ok(render_report(
            &self.config.wallet_address,
            &timestamp,
            &entries,
            price,
            projection.as_ref(),
        ))
    }
}

/// Writes the rendered report to stdout
fn emit(report: &str) -> Result<(), MonitorError> {
    use std::io::Write;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Sleeps for `duration`, waking early on the interrupt signal
///
/// # Returns
/// `true` if the interrupt arrived before the sleep finished
async fn wait_or_interrupt(duration: Duration) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = tokio::signal::ctrl_c() => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_builds_one_client_per_pool() {
        let toml_src = r#"
wallet_address = "44abc"
[[pools]]
name = "PoolA"
stats_url = "https://a.example/api/miner/{wallet}/stats"
identifiers_url = "https://a.example/api/miner/{wallet}/identifiers"
chart_url = "https://a.example/api/miner/{wallet}/chart"
[[pools]]
name = "PoolB"
stats_url = "https://b.example/api/miner/{wallet}/stats"
identifiers_url = "https://b.example/api/miner/{wallet}/identifiers"
chart_url = "https://b.example/api/miner/{wallet}/chart"
payout_threshold = 0.3
"#;
        let config: Config = toml::from_str(toml_src).unwrap();
        let monitor = Monitor::new(config);
        assert_eq!(monitor.pools.len(), 2);
        assert_eq!(monitor.pools[0].name(), "PoolA");
        assert_eq!(monitor.pools[1].name(), "PoolB");
    }

    #[tokio::test]
    async fn sleep_completes_without_interrupt() {
        assert!(!wait_or_interrupt(Duration::ZERO).await);
    }
}
