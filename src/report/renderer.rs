// src/report/renderer.rs

//! Report rendering
//!
//! Pure formatting: composes pre-computed values into a fixed-width
//! bordered text dashboard. One block per pool, an aggregate summary
//! over the online pools, and an optional earnings projection. No
//! business logic lives here - upstream components supply every value.
use crate::stats::{EarningsProjection, PayoutEta};
use crate::types::{PoolStatsRecord, PoolStatus};
use crate::utils::format::{format_count, format_hashrate, format_usd, format_xmr, shorten_wallet};

/// Total column width of the rendered report
pub const REPORT_WIDTH: usize = 100;

/// Everything the renderer needs for one pool's block
#[derive(Debug, Clone)]
pub struct PoolReportEntry {
    /// The fetched record for this cycle
    pub record: PoolStatsRecord,
    /// The pool's payout threshold in XMR
    pub payout_threshold: f64,
    /// Pre-computed time-to-payout for this pool
    pub eta: PayoutEta,
}

/// Renders the complete report for one polling cycle
///
/// # Arguments
/// * `wallet` - Wallet address shown (shortened) in the header
/// * `timestamp` - Pre-formatted wall-clock time of this cycle
/// * `entries` - One entry per configured pool, in configuration order
/// * `price_usd` - Current USD/XMR rate for the money columns
/// * `projection` - Earnings projection, absent when total hashrate is zero
pub fn render_report(
    wallet: &str,
    timestamp: &str,
    entries: &[PoolReportEntry],
    price_usd: f64,
    projection: Option<&EarningsProjection>,
) -> String {
    let mut out = render_header(wallet, timestamp);

    for entry in entries {
        out.push_str(&render_pool_block(entry, price_usd));
    }

    let records: Vec<&PoolStatsRecord> = entries.iter().map(|e| &e.record).collect();
    out.push_str(&render_summary(&records, price_usd));

    if let Some(projection) = projection {
        out.push_str(&render_projection(projection, price_usd));
    }

    out
}

/// Renders the report header with title, wallet, and timestamp
pub fn render_header(wallet: &str, timestamp: &str) -> String {
    let rule = "=".repeat(REPORT_WIDTH);
    format!(
        "{rule}\n{:^width$}\n{:^width$}\n{:^width$}\n{rule}\n",
        "XMR MINING MONITOR",
        format!("Wallet: {}", shorten_wallet(wallet)),
        format!("Updated: {}", timestamp),
        width = REPORT_WIDTH,
    )
}

/// Renders one pool's bordered block
///
/// Online pools get the full detail block; offline and errored pools
/// get a short status line with the recorded reason. Every configured
/// pool renders something - the report never omits a pool.
pub fn render_pool_block(entry: &PoolReportEntry, price_usd: f64) -> String {
    let record = &entry.record;
    let mut out = String::new();

    let title = format!("┌─ {} Pool ", record.pool_name);
    let fill = REPORT_WIDTH.saturating_sub(title.chars().count());
    out.push_str(&format!("\n{}{}\n", title, "─".repeat(fill)));

    match record.status {
        PoolStatus::Online => {
            out.push_str(&format!("│ Status:          {}\n", record.status));
            out.push_str(&format!(
                "│ Hashrate:        {}\n",
                format_hashrate(record.hashrate)
            ));
            out.push_str(&format!(
                "│ Balance:         {} ({})\n",
                format_xmr(record.balance),
                format_usd(record.balance, price_usd)
            ));
            out.push_str(&format!(
                "│ Total Paid:      {} ({})\n",
                format_xmr(record.paid),
                format_usd(record.paid, price_usd)
            ));
            out.push_str(&format!("│ Active Workers:  {}\n", record.worker_count));

            if !record.workers.is_empty() {
                out.push_str("│ Worker Details:\n");
                for worker in &record.workers {
                    out.push_str(&format!(
                        "│   • {}: {}\n",
                        worker.id,
                        format_hashrate(worker.hashrate)
                    ));
                }
            }

            // Acceptance is only meaningful once shares exist.
            let total_shares = record.valid_shares + record.invalid_shares;
            if total_shares > 0 {
                let acceptance = record.valid_shares as f64 / total_shares as f64 * 100.0;
                out.push_str(&format!(
                    "│ Valid Shares:    {} ({:.2}% acceptance)\n",
                    record.valid_shares, acceptance
                ));
                out.push_str(&format!("│ Invalid Shares:  {}\n", record.invalid_shares));
            }

            if record.total_hashes > 0 {
                out.push_str(&format!(
                    "│ Total Hashes:    {}\n",
                    format_count(record.total_hashes)
                ));
            }

            let progress = record.balance / entry.payout_threshold * 100.0;
            out.push_str(&format!(
                "│ Threshold:       {} ({:.2}% reached)\n",
                format_xmr(entry.payout_threshold),
                progress
            ));
            out.push_str(&format!("│ Time to Payout:  {}\n", entry.eta));
        }
        PoolStatus::Error => {
            out.push_str(&format!("│ Status:          {}\n", record.status));
            out.push_str(&format!(
                "│ Error:           {}\n",
                record.error_message.as_deref().unwrap_or("Unknown error")
            ));
        }
        PoolStatus::Offline => {
            out.push_str(&format!("│ Status:          {}\n", record.status));
            if let Some(reason) = &record.error_message {
                out.push_str(&format!("│ Reason:          {}\n", reason));
            }
        }
    }

    out.push_str(&format!("└{}\n", "─".repeat(REPORT_WIDTH - 1)));
    out
}

/// Renders the aggregate summary over all online pools
pub fn render_summary(records: &[&PoolStatsRecord], price_usd: f64) -> String {
    let online: Vec<&&PoolStatsRecord> = records
        .iter()
        .filter(|r| r.status == PoolStatus::Online)
        .collect();

    let total_hashrate: f64 = online.iter().map(|r| r.hashrate).sum();
    let total_balance: f64 = online.iter().map(|r| r.balance).sum();
    let total_paid: f64 = online.iter().map(|r| r.paid).sum();
    let total_workers: usize = online.iter().map(|r| r.worker_count).sum();

    let rule = "=".repeat(REPORT_WIDTH);
    let mut out = format!("\n{rule}\n{:^width$}\n{rule}\n", "SUMMARY", width = REPORT_WIDTH);
    out.push_str(&format!(
        "│ Total Hashrate:     {}\n",
        format_hashrate(total_hashrate)
    ));
    out.push_str(&format!(
        "│ Total Balance:      {} ({})\n",
        format_xmr(total_balance),
        format_usd(total_balance, price_usd)
    ));
    out.push_str(&format!(
        "│ Total Paid:         {} ({})\n",
        format_xmr(total_paid),
        format_usd(total_paid, price_usd)
    ));
    out.push_str(&format!("│ Total Workers:      {}\n", total_workers));
    out.push_str(&format!(
        "│ Active Pools:       {}/{}\n",
        online.len(),
        records.len()
    ));
    out.push_str(&format!(
        "│ Total Earnings:     {} ({})\n",
        format_xmr(total_balance + total_paid),
        format_usd(total_balance + total_paid, price_usd)
    ));
    out.push_str(&format!("{rule}\n"));
    out
}

/// Renders the periodic earnings projection block
pub fn render_projection(projection: &EarningsProjection, price_usd: f64) -> String {
    let rule = "─".repeat(REPORT_WIDTH);
    let mut out = format!(
        "\n{:^width$}\n{rule}\n",
        "ESTIMATED EARNINGS",
        width = REPORT_WIDTH
    );
    for (label, amount) in [
        ("Per Day:  ", projection.per_day),
        ("Per Week: ", projection.per_week),
        ("Per Month:", projection.per_month),
        ("Per Year: ", projection.per_year),
    ] {
        out.push_str(&format!(
            "│ {} {} ({})\n",
            label,
            format_xmr(amount),
            format_usd(amount, price_usd)
        ));
    }
    out.push_str(&format!("{rule}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkerRecord;

    fn online_record() -> PoolStatsRecord {
        PoolStatsRecord {
            pool_name: "SupportXMR".into(),
            status: PoolStatus::Online,
            hashrate: 1_000.0,
            balance: 0.05,
            paid: 0.2,
            worker_count: 2,
            workers: vec![
                WorkerRecord {
                    id: "rig1".into(),
                    hashrate: 1_000.0,
                    last_share_ts: 42,
                },
                WorkerRecord {
                    id: "rig2".into(),
                    hashrate: 0.0,
                    last_share_ts: 0,
                },
            ],
            valid_shares: 120,
            invalid_shares: 2,
            total_hashes: 9_000_000,
            error_message: None,
        }
    }

    fn entry(record: PoolStatsRecord) -> PoolReportEntry {
        PoolReportEntry {
            record,
            payout_threshold: 0.1,
            eta: PayoutEta::Days(5.0),
        }
    }

    #[test]
    fn online_block_has_full_detail() {
        let block = render_pool_block(&entry(online_record()), 155.0);
        assert!(block.contains("┌─ SupportXMR Pool "));
        assert!(block.contains("│ Status:          ONLINE"));
        assert!(block.contains("│ Hashrate:        1.00 KH/s"));
        assert!(block.contains("│ Balance:         0.05000000 XMR ($7.7500 USD)"));
        assert!(block.contains("│ Active Workers:  2"));
        assert!(block.contains("│   • rig1: 1.00 KH/s"));
        assert!(block.contains("│   • rig2: 0.00 H/s"));
        assert!(block.contains("│ Valid Shares:    120 (98.36% acceptance)"));
        assert!(block.contains("│ Total Hashes:    9,000,000"));
        assert!(block.contains("│ Threshold:       0.10000000 XMR (50.00% reached)"));
        assert!(block.contains("│ Time to Payout:  5.0 days"));
    }

    #[test]
    fn acceptance_lines_omitted_without_shares() {
        let mut record = online_record();
        record.valid_shares = 0;
        record.invalid_shares = 0;
        let block = render_pool_block(&entry(record), 155.0);
        assert!(!block.contains("Valid Shares"));
        assert!(!block.contains("Invalid Shares"));
        assert!(!block.contains("acceptance"));
    }

    #[test]
    fn offline_block_is_short_with_reason() {
        let record = PoolStatsRecord::offline("MineXMR", "Pool closed in 2022");
        let block = render_pool_block(&entry(record), 155.0);
        assert!(block.contains("│ Status:          OFFLINE"));
        assert!(block.contains("│ Reason:          Pool closed in 2022"));
        assert!(!block.contains("Hashrate"));
        assert!(!block.contains("Threshold"));
    }

    #[test]
    fn error_block_carries_message() {
        let record = PoolStatsRecord::error("SupportXMR", "network error: timed out");
        let block = render_pool_block(&entry(record), 155.0);
        assert!(block.contains("│ Status:          ERROR"));
        assert!(block.contains("│ Error:           network error: timed out"));
    }

    #[test]
    fn summary_counts_only_online_pools() {
        let online = online_record();
        let errored = PoolStatsRecord::error("Nanopool", "timeout");
        let summary = render_summary(&[&online, &errored], 155.0);
        assert!(summary.contains("│ Total Hashrate:     1.00 KH/s"));
        assert!(summary.contains("│ Total Workers:      2"));
        assert!(summary.contains("│ Active Pools:       1/2"));
        assert!(summary.contains("│ Total Earnings:     0.25000000 XMR"));
    }

    #[test]
    fn report_renders_a_block_for_every_pool() {
        let entries = vec![
            entry(online_record()),
            entry(PoolStatsRecord::offline("MineXMR", "Pool closed in 2022")),
            entry(PoolStatsRecord::error("Nanopool", "timeout")),
        ];
        let wallet = "4".repeat(95);
        let report = render_report(&wallet, "2026-08-06 13:00:00", &entries, 155.0, None);
        assert!(report.contains("XMR MINING MONITOR"));
        assert!(report.contains("SupportXMR Pool"));
        assert!(report.contains("MineXMR Pool"));
        assert!(report.contains("Nanopool Pool"));
        assert!(report.contains("SUMMARY"));
        assert!(!report.contains("ESTIMATED EARNINGS"));
    }

    #[test]
    fn projection_block_lists_all_periods() {
        let projection = EarningsProjection::from_daily(0.01);
        let block = render_projection(&projection, 155.0);
        assert!(block.contains("ESTIMATED EARNINGS"));
        assert!(block.contains("│ Per Day:   0.01000000 XMR ($1.5500 USD)"));
        assert!(block.contains("│ Per Week:  0.07000000 XMR"));
        assert!(block.contains("│ Per Month: 0.30000000 XMR"));
        assert!(block.contains("│ Per Year:  3.65000000 XMR"));
    }
}
