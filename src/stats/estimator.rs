// src/stats/estimator.rs

//! Earnings estimation
//!
//! Pure math converting an account hashrate into an expected XMR/day
//! figure, and that figure into payout timing and periodic projections.
//! Prefers a network-share calculation when difficulty is known and
//! falls back to a static divisor calibrated to typical network
//! conditions otherwise.
use crate::types::NetworkInfo;
use std::fmt;

/// Seconds in one day
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Assumed average block time in seconds
const AVG_BLOCK_TIME_SECS: f64 = 120.0;

/// Blocks mined per day at the assumed block time
const BLOCKS_PER_DAY: f64 = 720.0;

/// Difficulty-agnostic divisor: hashes per XMR under typical conditions
const FALLBACK_DAILY_DIVISOR: f64 = 1.5e12;

/// Estimates expected earnings in XMR per day for a given hashrate
///
/// With network context and a positive difficulty, the estimate is the
/// account's share of the network hashrate times the daily block
/// emission. Without it, a fixed divisor stands in. The two formulas
/// are alternatives, never blended.
///
/// # Arguments
/// * `hashrate` - Account hashrate in H/s
/// * `network` - Current network context, if the oracle had it
pub fn xmr_per_day(hashrate: f64, network: Option<&NetworkInfo>) -> f64 {
    match network {
        Some(info) if info.difficulty > 0.0 => {
            let network_hashrate = info.difficulty / AVG_BLOCK_TIME_SECS;
            let share = hashrate / network_hashrate;
            share * BLOCKS_PER_DAY * info.block_reward
        }
        _ => hashrate * SECONDS_PER_DAY / FALLBACK_DAILY_DIVISOR,
    }
}

/// Estimated time until a pool issues the next payout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayoutEta {
    /// Balance already meets the payout threshold
    Ready,
    /// No hashrate and below threshold: payout will never arrive
    Never,
    /// Less than a day away
    Hours(f64),
    /// Between one and thirty days away
    Days(f64),
    /// Thirty days or more away
    Months(f64),
}

impl fmt::Display for PayoutEta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoutEta::Ready => write!(f, "Ready!"),
            PayoutEta::Never => write!(f, "∞"),
            PayoutEta::Hours(h) => write!(f, "{:.1} hours", h),
            PayoutEta::Days(d) => write!(f, "{:.1} days", d),
            PayoutEta::Months(m) => write!(f, "{:.1} months", m),
        }
    }
}

/// Computes the time until the balance reaches the payout threshold
///
/// A balance at or above the threshold is immediately payable whatever
/// the hashrate. Below threshold, zero hashrate (or a non-positive
/// daily rate) never pays out. Otherwise the remaining amount divided
/// by the daily rate gives the estimate, banded into hours, days, or
/// months for display.
///
/// # Arguments
/// * `balance` - Current unpaid balance in XMR
/// * `hashrate` - Account hashrate in H/s
/// * `threshold` - The pool's payout threshold in XMR
/// * `daily_rate` - Estimated earnings in XMR/day (from [`xmr_per_day`])
pub fn time_to_payout(balance: f64, hashrate: f64, threshold: f64, daily_rate: f64) -> PayoutEta {
    if balance >= threshold {
        return PayoutEta::Ready;
    }
    if hashrate <= 0.0 || daily_rate <= 0.0 {
        return PayoutEta::Never;
    }

    let days = (threshold - balance) / daily_rate;
    if days < 1.0 {
        PayoutEta::Hours(days * 24.0)
    } else if days < 30.0 {
        PayoutEta::Days(days)
    } else {
        PayoutEta::Months(days / 30.0)
    }
}

/// Periodic earnings projection derived from a daily estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsProjection {
    /// Expected XMR per day
    pub per_day: f64,
    /// Expected XMR per week
    pub per_week: f64,
    /// Expected XMR per month (30 days)
    pub per_month: f64,
    /// Expected XMR per year
    pub per_year: f64,
}

impl EarningsProjection {
    /// Expands a daily estimate into day/week/month/year figures
    pub fn from_daily(per_day: f64) -> Self {
        EarningsProjection {
            per_day,
            per_week: per_day * 7.0,
            per_month: per_day * 30.0,
            per_year: per_day * 365.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} !~ {}", a, b);
    }

    #[test]
    fn network_share_formula() {
        // difficulty 120_000 -> network hashrate 1_000 H/s, so 1_000 H/s
        // earns the full daily emission.
        let network = NetworkInfo {
            difficulty: 120_000.0,
            height: 3_000_000,
            block_reward: 0.6,
        };
        assert_close(xmr_per_day(1_000.0, Some(&network)), 720.0 * 0.6);
        assert_close(xmr_per_day(500.0, Some(&network)), 720.0 * 0.6 / 2.0);
    }

    #[test]
    fn fallback_formula_without_network() {
        assert_close(xmr_per_day(1_000_000.0, None), 1_000_000.0 * 86_400.0 / 1.5e12);
    }

    #[test]
    fn fallback_formula_with_zero_difficulty() {
        let network = NetworkInfo {
            difficulty: 0.0,
            height: 0,
            block_reward: 0.6,
        };
        assert_close(
            xmr_per_day(1_000.0, Some(&network)),
            xmr_per_day(1_000.0, None),
        );
    }

    #[test]
    fn ready_whenever_balance_meets_threshold() {
        assert_eq!(time_to_payout(0.1, 1_000.0, 0.1, 0.01), PayoutEta::Ready);
        assert_eq!(time_to_payout(0.2, 0.0, 0.1, 0.0), PayoutEta::Ready);
    }

    #[test]
    fn never_without_hashrate_below_threshold() {
        assert_eq!(time_to_payout(0.05, 0.0, 0.1, 0.0), PayoutEta::Never);
        // A positive hashrate with a degenerate rate also never pays out.
        assert_eq!(time_to_payout(0.05, 100.0, 0.1, 0.0), PayoutEta::Never);
    }

    #[test]
    fn eta_banding() {
        // 0.05 XMR remaining at 0.1 XMR/day -> half a day.
        match time_to_payout(0.05, 100.0, 0.1, 0.1) {
            PayoutEta::Hours(h) => assert_close(h, 12.0),
            other => panic!("expected hours, got {:?}", other),
        }
        // 0.05 remaining at 0.01/day -> 5 days.
        match time_to_payout(0.05, 100.0, 0.1, 0.01) {
            PayoutEta::Days(d) => assert_close(d, 5.0),
            other => panic!("expected days, got {:?}", other),
        }
        // 0.09 remaining at 0.001/day -> 90 days -> 3 months.
        match time_to_payout(0.01, 100.0, 0.1, 0.001) {
            PayoutEta::Months(m) => assert_close(m, 3.0),
            other => panic!("expected months, got {:?}", other),
        }
    }

    #[test]
    fn eta_display() {
        assert_eq!(PayoutEta::Ready.to_string(), "Ready!");
        assert_eq!(PayoutEta::Never.to_string(), "∞");
        assert_eq!(PayoutEta::Hours(12.0).to_string(), "12.0 hours");
        assert_eq!(PayoutEta::Days(5.25).to_string(), "5.2 days");
        assert_eq!(PayoutEta::Months(3.0).to_string(), "3.0 months");
    }

    #[test]
    fn projection_periods() {
        let projection = EarningsProjection::from_daily(0.01);
        assert_close(projection.per_week, 0.07);
        assert_close(projection.per_month, 0.3);
        assert_close(projection.per_year, 3.65);
    }
}
