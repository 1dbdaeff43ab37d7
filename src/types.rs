// src/types.rs
use std::fmt;

/// Number of atomic units in one whole XMR (piconero per XMR).
pub const ATOMIC_UNITS_PER_XMR: f64 = 1e12;

/// Converts an atomic-unit amount into whole XMR.
///
/// # Arguments
/// * `atomic` - Amount in atomic units (10^-12 XMR)
///
/// # Returns
/// The amount as a whole-coin floating point value
pub fn atomic_to_xmr(atomic: u64) -> f64 {
    atomic as f64 / ATOMIC_UNITS_PER_XMR
}

/// Reachability state of a pool account for one polling cycle
///
/// Distinguishes an account the pool knows and reports on (`Online`),
/// a reachable pool that has no data for the account (`Offline`), and
/// a fetch that failed outright after retries (`Error`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    /// The pool answered with account statistics
    Online,
    /// The pool is reachable but reports no account or is closed
    Offline,
    /// The fetch failed (network error, timeout, malformed response)
    Error,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolStatus::Online => write!(f, "ONLINE"),
            PoolStatus::Offline => write!(f, "OFFLINE"),
            PoolStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Per-worker statistics as reported by the pool's hashrate chart
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerRecord {
    /// Worker identifier as reported by the pool
    pub id: String,
    /// Most recent charted hashrate in H/s (0 if absent from the chart)
    pub hashrate: f64,
    /// Unix timestamp of the most recent chart sample
    pub last_share_ts: u64,
}

/// Normalized snapshot of one pool account for one polling cycle
///
/// Built fresh each cycle by the stats fetcher and handed to the
/// estimator and renderer; never mutated after construction and
/// discarded once the report is printed.
#[derive(Debug, Clone)]
pub struct PoolStatsRecord {
    /// Display name of the pool
    pub pool_name: String,
    /// Outcome of the fetch for this cycle
    pub status: PoolStatus,
    /// Account hashrate in H/s (worker sum, or aggregate fallback)
    pub hashrate: f64,
    /// Unpaid balance in XMR
    pub balance: f64,
    /// Lifetime paid amount in XMR
    pub paid: f64,
    /// Number of workers the identifier endpoint reported
    pub worker_count: usize,
    /// Per-worker detail, in the order the pool returned identifiers
    pub workers: Vec<WorkerRecord>,
    /// Shares the pool accepted
    pub valid_shares: u64,
    /// Shares the pool rejected
    pub invalid_shares: u64,
    /// Lifetime hashes submitted to the pool
    pub total_hashes: u64,
    /// Failure or offline reason when status is not `Online`
    pub error_message: Option<String>,
}

impl PoolStatsRecord {
    /// Creates a record for a pool that is reachable but has no account data
    pub fn offline(pool_name: impl Into<String>, reason: impl Into<String>) -> Self {
        PoolStatsRecord {
            status: PoolStatus::Offline,
            error_message: Some(reason.into()),
            ..Self::empty(pool_name)
        }
    }

    /// Creates a record for a pool whose fetch failed after retries
    pub fn error(pool_name: impl Into<String>, message: impl Into<String>) -> Self {
        PoolStatsRecord {
            status: PoolStatus::Error,
            error_message: Some(message.into()),
            ..Self::empty(pool_name)
        }
    }

    fn empty(pool_name: impl Into<String>) -> Self {
        PoolStatsRecord {
            pool_name: pool_name.into(),
            status: PoolStatus::Offline,
            hashrate: 0.0,
            balance: 0.0,
            paid: 0.0,
            worker_count: 0,
            workers: Vec::new(),
            valid_shares: 0,
            invalid_shares: 0,
            total_hashes: 0,
            error_message: None,
        }
    }
}

/// Network-wide context fetched once per cycle
///
/// Absent (`None` at the call site) when the network endpoint is
/// unreachable, in which case the estimator falls back to its
/// difficulty-agnostic divisor.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    /// Current network difficulty
    pub difficulty: f64,
    /// Current chain height
    pub height: u64,
    /// Current block reward in XMR
    pub block_reward: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_trillion_atomic_units_is_one_xmr() {
        assert_eq!(atomic_to_xmr(1_000_000_000_000), 1.0);
    }

    #[test]
    fn offline_record_carries_reason() {
        let rec = PoolStatsRecord::offline("TestPool", "Account not found");
        assert_eq!(rec.status, PoolStatus::Offline);
        assert_eq!(rec.error_message.as_deref(), Some("Account not found"));
        assert_eq!(rec.worker_count, 0);
        assert!(rec.workers.is_empty());
    }
}
