// src/utils/format.rs
//! Display formatting helpers
//!
//! Pure functions converting numeric quantities into the strings the
//! report renderer prints. No state, no I/O.

/// Formats a hashrate with an appropriate unit (H/s, KH/s, MH/s, GH/s)
///
/// # Arguments
/// * `hashrate` - Hashrate in hashes per second
pub fn format_hashrate(hashrate: f64) -> String {
    if hashrate >= 1_000_000_000.0 {
        format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
    } else if hashrate >= 1_000_000.0 {
        format!("{:.2} MH/s", hashrate / 1_000_000.0)
    } else if hashrate >= 1_000.0 {
        format!("{:.2} KH/s", hashrate / 1_000.0)
    } else {
        format!("{:.2} H/s", hashrate)
    }
}

/// Formats an XMR amount with full atomic-unit precision
///
/// # Arguments
/// * `amount` - Amount in whole XMR
pub fn format_xmr(amount: f64) -> String {
    format!("{:.8} XMR", amount)
}

/// Formats the USD equivalent of an XMR amount
///
/// # Arguments
/// * `xmr_amount` - Amount in whole XMR
/// * `price_usd` - Current USD/XMR exchange rate
pub fn format_usd(xmr_amount: f64, price_usd: f64) -> String {
    format!("${:.4} USD", xmr_amount * price_usd)
}

/// Formats an integer with comma thousands separators
///
/// # Arguments
/// * `value` - The value to format (e.g. a lifetime hash count)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Shortens a wallet address to its first and last 20 characters
///
/// Addresses of 40 characters or fewer are returned unchanged.
pub fn shorten_wallet(wallet: &str) -> String {
    if wallet.len() <= 40 {
        wallet.to_string()
    } else {
        format!("{}...{}", &wallet[..20], &wallet[wallet.len() - 20..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashrate_unit_scaling() {
        assert_eq!(format_hashrate(500.0), "500.00 H/s");
        assert_eq!(format_hashrate(1_500.0), "1.50 KH/s");
        assert_eq!(format_hashrate(2_500_000.0), "2.50 MH/s");
        assert_eq!(format_hashrate(3_000_000_000.0), "3.00 GH/s");
    }

    #[test]
    fn xmr_amount_has_atomic_precision() {
        assert_eq!(format_xmr(0.1), "0.10000000 XMR");
        assert_eq!(format_xmr(0.00000001), "0.00000001 XMR");
    }

    #[test]
    fn usd_uses_current_price() {
        assert_eq!(format_usd(2.0, 155.0), "$310.0000 USD");
        assert_eq!(format_usd(0.0, 155.0), "$0.0000 USD");
    }

    #[test]
    fn count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn wallet_shortening() {
        let wallet = "4".repeat(95);
        let short = shorten_wallet(&wallet);
        assert_eq!(short.len(), 43);
        assert!(short.contains("..."));
        assert_eq!(shorten_wallet("short"), "short");
    }
}
