// src/config/config.rs
use crate::utils::error::MonitorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Main configuration structure for the monitor application
///
/// Contains all settings needed to run the polling loop, including
/// the wallet to watch, cycle timing, the retry policy for the primary
/// stats call, and the pool and oracle endpoints to query. Loaded once
/// at startup and passed immutably into every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wallet address whose pool accounts are queried
    pub wallet_address: String,

    /// Seconds between polling cycles
    /// (default: 300)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Attempts for the primary stats call before giving up
    /// (default: 3)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Seconds between retry attempts
    /// (default: 5)
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,

    /// USD/XMR rate used when the price oracle is unreachable
    /// (default: 155.0)
    #[serde(default = "default_fallback_price")]
    pub fallback_price_usd: f64,

    /// Price and network-info endpoints
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Pools to query each cycle
    #[serde(default = "default_pools")]
    pub pools: Vec<PoolConfig>,
}

/// Endpoints for the exchange-rate and network-info queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Price-quote endpoint returning the current USD/XMR rate
    #[serde(default = "default_price_url")]
    pub price_url: String,

    /// Network-info endpoint returning difficulty, height, and reward
    #[serde(default = "default_network_url")]
    pub network_url: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            price_url: default_price_url(),
            network_url: default_network_url(),
        }
    }
}

/// One pool integration: display name, endpoints, and payout policy
///
/// Endpoint URLs may contain a `{wallet}` placeholder which is replaced
/// with the configured wallet address before the request is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Display name used in logs and the report
    pub name: String,
    /// Aggregate account-stats endpoint
    pub stats_url: String,
    /// Worker-identifier list endpoint
    pub identifiers_url: String,
    /// Per-worker hashrate-chart endpoint
    pub chart_url: String,
    /// Minimum balance in XMR before this pool issues a payout
    #[serde(default = "default_payout_threshold")]
    pub payout_threshold: f64,
}

/// Replaces the `{wallet}` placeholder in an endpoint template
///
/// # Arguments
/// * `template` - Endpoint URL, possibly containing `{wallet}`
/// * `wallet` - The wallet address to substitute
pub fn expand_wallet(template: &str, wallet: &str) -> String {
    template.replace("{wallet}", wallet)
}

fn default_poll_interval() -> u64 {
    300
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    5
}

fn default_fallback_price() -> f64 {
    155.0
}

fn default_payout_threshold() -> f64 {
    0.1
}

fn default_price_url() -> String {
    "https://api.coingecko.com/api/v3/simple/price?ids=monero&vs_currencies=usd".into()
}

fn default_network_url() -> String {
    "https://supportxmr.com/api/network/stats".into()
}

fn default_pools() -> Vec<PoolConfig> {
    vec![PoolConfig {
        name: "SupportXMR".into(),
        stats_url: "https://supportxmr.com/api/miner/{wallet}/stats".into(),
        identifiers_url: "https://supportxmr.com/api/miner/{wallet}/identifiers".into(),
        chart_url: "https://supportxmr.com/api/miner/{wallet}/chart/hashrate/allWorkers".into(),
        payout_threshold: default_payout_threshold(),
    }]
}

impl Config {
    /// Loads configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(MonitorError)` - If the file couldn't be read, parsed, or validated
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, MonitorError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path).map_err(|e| {
            MonitorError::ConfigError(format!(
                "Failed to read config at {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_str)
            .map_err(|e| MonitorError::ConfigError(format!("Invalid config format: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the wallet address and every configured endpoint URL
    ///
    /// # Returns
    /// * `Ok(())` - All endpoints parse as URLs after wallet substitution
    /// * `Err(MonitorError)` - Describes the first invalid field
    pub fn validate(&self) -> Result<(), MonitorError> {
        if self.wallet_address.trim().is_empty() {
            return Err(MonitorError::ConfigError(
                "wallet_address must not be empty".into(),
            ));
        }
        if self.pools.is_empty() {
            return Err(MonitorError::ConfigError(
                "at least one [[pools]] entry is required".into(),
            ));
        }

        let mut endpoints = vec![
            self.oracle.price_url.clone(),
            self.oracle.network_url.clone(),
        ];
        for pool in &self.pools {
            endpoints.push(expand_wallet(&pool.stats_url, &self.wallet_address));
            endpoints.push(expand_wallet(&pool.identifiers_url, &self.wallet_address));
            endpoints.push(expand_wallet(&pool.chart_url, &self.wallet_address));
        }
        for endpoint in endpoints {
            Url::parse(&endpoint).map_err(|e| {
                MonitorError::ConfigError(format!("Invalid endpoint URL '{}': {}", endpoint, e))
            })?;
        }
        Ok(())
    }

    /// Generates a configuration template string
    ///
    /// # Returns
    /// String containing a commented TOML configuration template
    pub fn generate_template() -> String {
        let mut template = String::new();
        template.push_str("# XMR Monitor Configuration\n\n");
        template.push_str("# Wallet address whose pool accounts are watched\n");
        template.push_str("wallet_address = \"your_wallet_address\"\n");
        template.push_str("# Seconds between polling cycles\n");
        template.push_str("poll_interval_secs = 300\n");
        template.push_str("# Attempts for the primary stats call\n");
        template.push_str("max_retries = 3\n");
        template.push_str("# Seconds between retry attempts\n");
        template.push_str("retry_delay_secs = 5\n");
        template.push_str("# USD/XMR rate used when the price oracle is unreachable\n");
        template.push_str("fallback_price_usd = 155.0\n\n");

        template.push_str("[oracle]\n");
        template.push_str(
            "price_url = \"https://api.coingecko.com/api/v3/simple/price?ids=monero&vs_currencies=usd\"\n",
        );
        template.push_str("network_url = \"https://supportxmr.com/api/network/stats\"\n\n");

        template.push_str("# One [[pools]] table per pool to watch.\n");
        template.push_str("# {wallet} is replaced with wallet_address in each URL.\n");
        template.push_str("[[pools]]\n");
        template.push_str("name = \"SupportXMR\"\n");
        template.push_str("stats_url = \"https://supportxmr.com/api/miner/{wallet}/stats\"\n");
        template.push_str(
            "identifiers_url = \"https://supportxmr.com/api/miner/{wallet}/identifiers\"\n",
        );
        template.push_str(
            "chart_url = \"https://supportxmr.com/api/miner/{wallet}/chart/hashrate/allWorkers\"\n",
        );
        template.push_str("payout_threshold = 0.1\n");

        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_round_trips_through_the_parser() {
        let template = Config::generate_template();
        let config: Config = toml::from_str(&template).expect("template must parse");
        assert_eq!(config.poll_interval_secs, 300);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_secs, 5);
        assert_eq!(config.fallback_price_usd, 155.0);
        assert_eq!(config.pools.len(), 1);
        assert_eq!(config.pools[0].name, "SupportXMR");
        assert_eq!(config.pools[0].payout_threshold, 0.1);
    }

    #[test]
    fn minimal_config_fills_defaults() {
        let config: Config = toml::from_str("wallet_address = \"44abc\"").unwrap();
        assert_eq!(config.poll_interval_secs, 300);
        assert_eq!(config.pools.len(), 1);
        assert!(config.oracle.price_url.contains("coingecko"));
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn wallet_placeholder_expansion() {
        let url = expand_wallet("https://pool.example/api/miner/{wallet}/stats", "44abc");
        assert_eq!(url, "https://pool.example/api/miner/44abc/stats");
        // No placeholder: unchanged.
        assert_eq!(expand_wallet("https://pool.example/x", "44abc"), "https://pool.example/x");
    }

    #[test]
    fn empty_wallet_is_rejected() {
        let config: Config = toml::from_str("wallet_address = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_endpoint_url_is_rejected() {
        let toml_src = r#"
wallet_address = "44abc"
[[pools]]
name = "Broken"
stats_url = "not a url"
identifiers_url = "https://pool.example/ids"
chart_url = "https://pool.example/chart"
"#;
        let config: Config = toml::from_str(toml_src).unwrap();
        assert!(config.validate().is_err());
    }
}
