// src/network/oracle.rs

//! Price and network-info oracle client
//!
//! Two independent once-per-cycle queries: the current USD/XMR exchange
//! rate and the current network difficulty/height/reward. Both are
//! best-effort from the caller's perspective - the price query falls
//! back to a configured constant and the network query reports absence,
//! so neither ever errors.
use crate::config::OracleConfig;
use crate::network::pool::FetchError;
use crate::types::{NetworkInfo, atomic_to_xmr};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Timeout for the price endpoint, deliberately longer than the data
/// endpoints since public rate APIs are the slowest call of a cycle
const PRICE_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for the network-info endpoint
const NETWORK_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the exchange-rate and network-info queries
pub struct OracleClient {
    /// Price-quote endpoint URL
    price_url: String,
    /// Network-info endpoint URL
    network_url: String,
    /// Rate returned when the price endpoint is unreachable
    fallback_price_usd: f64,
    /// HTTP client for both queries
    client: Client,
}

impl OracleClient {
    /// Creates a new OracleClient
    ///
    /// # Arguments
    /// * `config` - Oracle endpoint URLs
    /// * `fallback_price_usd` - Rate used when the price fetch fails
    pub fn new(config: &OracleConfig, fallback_price_usd: f64) -> Self {
        OracleClient {
            price_url: config.price_url.clone(),
            network_url: config.network_url.clone(),
            fallback_price_usd,
            client: Client::new(),
        }
    }

    /// Fetches the current USD/XMR rate
    ///
    /// Never fails: any transport or parse problem yields the configured
    /// fallback constant, logged at warn.
    pub async fn fetch_price(&self) -> f64 {
        match self.try_fetch_price().await {
            Ok(price) => price,
            Err(e) => {
                log::warn!(
                    "price oracle unavailable, using fallback ${}: {}",
                    self.fallback_price_usd,
                    e
                );
                self.fallback_price_usd
            }
        }
    }

    /// Fetches current network difficulty, height, and block reward
    ///
    /// Never fails: any transport or parse problem yields `None`, logged
    /// at warn, and the estimator selects its difficulty-agnostic
    /// fallback formula.
    pub async fn fetch_network(&self) -> Option<NetworkInfo> {
        match self.try_fetch_network().await {
            Ok(info) => Some(info),
            Err(e) => {
                log::warn!("network oracle unavailable: {}", e);
                None
            }
        }
    }

    async fn try_fetch_price(&self) -> Result<f64, FetchError> {
        let response = self
            .client
            .get(&self.price_url)
            .timeout(PRICE_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "price endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        parse_price(&body)
            .ok_or_else(|| FetchError::Api("price quote missing from response".into()))
    }

    async fn try_fetch_network(&self) -> Result<NetworkInfo, FetchError> {
        let response = self
            .client
            .get(&self.network_url)
            .timeout(NETWORK_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "network endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        parse_network(&body)
            .ok_or_else(|| FetchError::Api("network stats missing from response".into()))
    }
}

/// Extracts the USD/XMR rate from a price-quote body
///
/// Expects the CoinGecko simple-price shape
/// (`{"monero": {"usd": <rate>}}`).
pub fn parse_price(body: &Value) -> Option<f64> {
    body.get("monero")?.get("usd")?.as_f64()
}

/// Extracts difficulty, height, and block reward from a network-stats body
///
/// Expects the SupportXMR network-stats shape: `difficulty` and `height`
/// as numbers, `value` as the last block reward in atomic units. A
/// missing or non-positive difficulty makes the whole result absent,
/// since the estimator cannot use it.
pub fn parse_network(body: &Value) -> Option<NetworkInfo> {
    let difficulty = body.get("difficulty")?.as_f64()?;
    if difficulty <= 0.0 {
        return None;
    }
    let height = body.get("height")?.as_u64()?;
    let reward_atomic = body.get("value")?.as_u64()?;

    Some(NetworkInfo {
        difficulty,
        height,
        block_reward: atomic_to_xmr(reward_atomic),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_parses_from_simple_price_shape() {
        let body = json!({ "monero": { "usd": 162.37 } });
        assert_eq!(parse_price(&body), Some(162.37));
    }

    #[test]
    fn price_absent_on_unexpected_shape() {
        assert_eq!(parse_price(&json!({})), None);
        assert_eq!(parse_price(&json!({ "monero": {} })), None);
        assert_eq!(parse_price(&json!({ "monero": { "usd": "162" } })), None);
    }

    #[test]
    fn network_parses_and_converts_reward() {
        let body = json!({
            "difficulty": 414_969_536_386.0f64,
            "height": 3_456_789,
            "value": 600_000_000_000u64,
        });
        let info = parse_network(&body).unwrap();
        assert_eq!(info.height, 3_456_789);
        assert_eq!(info.block_reward, 0.6);
    }

    #[test]
    fn network_absent_without_usable_difficulty() {
        assert_eq!(parse_network(&json!({ "height": 1, "value": 1 })), None);
        assert_eq!(
            parse_network(&json!({ "difficulty": 0.0, "height": 1, "value": 1 })),
            None
        );
    }
}
