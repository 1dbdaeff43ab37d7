// src/network/pool.rs

//! Pool statistics fetcher
//!
//! Queries a pool's aggregate-stats endpoint, then enriches the result
//! with per-worker detail from the identifier and hashrate-chart
//! endpoints. The primary call retries transient network failures; the
//! enrichment calls degrade to defaults individually. The fetcher never
//! returns an error to its caller — every failure mode is folded into
//! the returned [`PoolStatsRecord`].
use crate::config::{PoolConfig, expand_wallet};
use crate::types::{PoolStatsRecord, PoolStatus, WorkerRecord, atomic_to_xmr};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Timeout applied to each pool data endpoint call
const DATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Scale applied to the aggregate `hash` field when no per-worker
/// detail is available
const AGGREGATE_HASH_SCALE: f64 = 1000.0;

/// Classification of a single failed HTTP call inside the fetch pipeline
///
/// The variant decides how the pipeline proceeds: `Network` failures on
/// the primary call are retried, `Api` failures abort it immediately,
/// and `Offline` marks the account as absent rather than the fetch as
/// failed. This type never crosses the fetcher's public boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout) - retryable
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered but the body was unusable - not retryable
    #[error("unexpected response: {0}")]
    Api(String),

    /// The source is reachable but explicitly has no data for the account
    #[error("{0}")]
    Offline(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Api(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Aggregate account statistics as returned by the stats endpoint
///
/// All fields default to zero so a sparse body still deserializes; the
/// `error` field is populated by pools that answer 200 with an
/// API-level error for unknown wallets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AggregateStats {
    /// Raw aggregate hashrate field (pool-scaled units)
    pub hash: f64,
    /// Unpaid balance in atomic units
    pub amt_due: u64,
    /// Lifetime paid amount in atomic units
    pub amt_paid: u64,
    /// Shares the pool accepted
    pub valid_shares: u64,
    /// Shares the pool rejected
    pub invalid_shares: u64,
    /// Lifetime hashes submitted
    pub total_hashes: u64,
    /// API-level error message, set when the account is unknown
    pub error: Option<String>,
}

/// One sample from the per-worker hashrate chart, newest first
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartSample {
    /// Hashrate at this sample in H/s
    #[serde(default)]
    pub hs: f64,
    /// Unix timestamp of this sample
    #[serde(default)]
    pub ts: u64,
}

/// Per-worker hashrate history keyed by worker identifier
pub type HashrateChart = HashMap<String, Vec<ChartSample>>;

/// Client for one pool's account-statistics API
///
/// Holds the resolved endpoint URLs (wallet substituted in), the retry
/// policy for the primary stats call, and the HTTP client. One instance
/// per configured pool, created at startup and reused every cycle.
pub struct PoolStatsClient {
    /// Display name used in logs and the report
    name: String,
    /// Resolved aggregate-stats endpoint
    stats_url: String,
    /// Resolved worker-identifier endpoint
    identifiers_url: String,
    /// Resolved hashrate-chart endpoint
    chart_url: String,
    /// Attempts for the primary stats call
    max_retries: u32,
    /// Delay between retry attempts
    retry_delay: Duration,
    /// HTTP client for all requests to this pool
    client: Client,
}

impl PoolStatsClient {
    /// Creates a new PoolStatsClient for one configured pool
    ///
    /// # Arguments
    /// * `config` - Pool endpoints and payout policy
    /// * `wallet` - Wallet address substituted into the endpoint templates
    /// * `max_retries` - Attempts for the primary stats call
    /// * `retry_delay` - Delay between retry attempts
    pub fn new(config: &PoolConfig, wallet: &str, max_retries: u32, retry_delay: Duration) -> Self {
        PoolStatsClient {
            name: config.name.clone(),
            stats_url: expand_wallet(&config.stats_url, wallet),
            identifiers_url: expand_wallet(&config.identifiers_url, wallet),
            chart_url: expand_wallet(&config.chart_url, wallet),
            max_retries,
            retry_delay,
            client: Client::new(),
        }
    }

    /// The pool's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetches one complete statistics record for this pool
    ///
    /// Never fails: transport errors on the primary call are retried up
    /// to the configured maximum, and whatever failure survives is
    /// captured in the record's `status` and `error_message` fields.
    /// Enrichment failures only reduce the record's detail level.
    pub async fn fetch_stats(&self) -> PoolStatsRecord {
        let aggregate = match retry_transient(self.max_retries, self.retry_delay, || {
            self.fetch_aggregate()
        })
        .await
        {
            Ok(aggregate) => aggregate,
            Err(FetchError::Offline(reason)) => {
                log::info!("{}: offline: {}", self.name, reason);
                return PoolStatsRecord::offline(&self.name, reason);
            }
            Err(e) => {
                log::warn!("{}: stats fetch failed: {}", self.name, e);
                return PoolStatsRecord::error(&self.name, e.to_string());
            }
        };

        let identifiers = or_default(self.fetch_identifiers().await, "worker identifiers");
        let chart = or_default(self.fetch_chart().await, "hashrate chart");

        build_record(&self.name, &aggregate, &identifiers, &chart)
    }

    /// Calls the aggregate-stats endpoint once
    ///
    /// # Returns
    /// - `Ok(AggregateStats)` on a parsed 2xx body without an API error
    /// - `Err(FetchError::Offline)` on non-2xx status or an unknown-account body
    /// - `Err(FetchError::Network | Api)` on transport or decode failure
    async fn fetch_aggregate(&self) -> Result<AggregateStats, FetchError> {
        let response = self
            .client
            .get(&self.stats_url)
            .timeout(DATA_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Offline(format!(
                "pool returned HTTP {}",
                response.status()
            )));
        }

        let stats: AggregateStats = response.json().await?;
        if let Some(reason) = &stats.error {
            return Err(FetchError::Offline(format!("account not found: {}", reason)));
        }
        Ok(stats)
    }

    /// Calls the worker-identifier endpoint once
    async fn fetch_identifiers(&self) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(&self.identifiers_url)
            .timeout(DATA_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "identifiers endpoint returned HTTP {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    /// Calls the per-worker hashrate-chart endpoint once
    async fn fetch_chart(&self) -> Result<HashrateChart, FetchError> {
        let response = self
            .client
            .get(&self.chart_url)
            .timeout(DATA_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "chart endpoint returned HTTP {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }
}

/// Runs `op` up to `max_attempts` times, retrying only network-class failures
///
/// # Arguments
/// * `max_attempts` - Total attempts, including the first
/// * `delay` - Fixed back-off between attempts
/// * `op` - The fallible operation
///
/// # Returns
/// The first success, or the error that ended the attempts: the last
/// network failure once attempts are exhausted, or the first
/// non-retryable failure immediately.
pub async fn retry_transient<T, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut op: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(FetchError::Network(msg)) if attempt < max_attempts => {
                log::warn!(
                    "transient failure (attempt {}/{}): {}; retrying in {:?}",
                    attempt,
                    max_attempts,
                    msg,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Collapses a failed enrichment call into its default value
///
/// This is the explicit degrade-gracefully policy: a secondary call
/// that fails leaves the record's detail fields at their defaults and
/// never changes its top-level status.
fn or_default<T: Default>(result: Result<T, FetchError>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::debug!("{} unavailable, continuing without: {}", what, e);
            T::default()
        }
    }
}

/// Merges the identifier list with the hashrate chart
///
/// Every identifier yields exactly one [`WorkerRecord`], in identifier
/// order; identifiers absent from the chart (or with an empty sample
/// list) get hashrate 0. The chart's first sample is the most recent.
///
/// # Returns
/// The worker records and the sum of their hashrates
pub fn merge_workers(identifiers: &[String], chart: &HashrateChart) -> (Vec<WorkerRecord>, f64) {
    let mut workers = Vec::with_capacity(identifiers.len());
    let mut total = 0.0;

    for id in identifiers {
        let (hashrate, last_share_ts) = chart
            .get(id)
            .and_then(|samples| samples.first())
            .map(|sample| (sample.hs, sample.ts))
            .unwrap_or((0.0, 0));

        total += hashrate;
        workers.push(WorkerRecord {
            id: id.clone(),
            hashrate,
            last_share_ts,
        });
    }

    (workers, total)
}

/// Assembles the final record from the aggregate body and worker detail
///
/// The per-worker sum is authoritative for the record's hashrate when
/// it is nonzero; otherwise the aggregate `hash` field is scaled down
/// as a coarse fallback. The two are never blended. Worker count always
/// reflects the identifier list, whatever the chart returned.
pub fn build_record(
    pool_name: &str,
    aggregate: &AggregateStats,
    identifiers: &[String],
    chart: &HashrateChart,
) -> PoolStatsRecord {
    let (workers, worker_total) = merge_workers(identifiers, chart);

    let hashrate = if worker_total > 0.0 {
        worker_total
    } else {
        aggregate.hash / AGGREGATE_HASH_SCALE
    };

    PoolStatsRecord {
        pool_name: pool_name.to_string(),
        status: PoolStatus::Online,
        hashrate,
        balance: atomic_to_xmr(aggregate.amt_due),
        paid: atomic_to_xmr(aggregate.amt_paid),
        worker_count: identifiers.len(),
        workers,
        valid_shares: aggregate.valid_shares,
        invalid_shares: aggregate.invalid_shares,
        total_hashes: aggregate.total_hashes,
        error_message: None,
    }
}
