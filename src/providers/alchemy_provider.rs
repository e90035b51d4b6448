use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::price_provider::PriceProvider;

#[derive(Debug, Serialize)]
struct PriceRequest<'a> {
    addresses: Vec<PriceRequestAddress<'a>>,
}

#[derive(Debug, Serialize)]
struct PriceRequestAddress<'a> {
    network: &'a str,
    address: &'a str,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    data: Vec<TokenPriceEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenPriceEntry {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    prices: Vec<PriceQuote>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PriceQuote {
    #[serde(default)]
    currency: Option<String>,
    value: serde_json::Value,
}

impl PriceQuote {
    fn as_f64(&self) -> Option<f64> {
        match &self.value {
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            serde_json::Value::Number(n) => n.as_f64(),
            _ => None,
        }
        .filter(|price| price.is_finite())
    }

    fn is_usd(&self) -> bool {
        self.currency
            .as_deref()
            .map_or(false, |c| c.eq_ignore_ascii_case("usd"))
    }
}

/// Price oracle client for the Alchemy "tokens by address" prices API
pub struct AlchemyPriceProvider {
    client: Client,
    endpoint: String,
    network: String,
}

impl AlchemyPriceProvider {
    /// Default API root
    pub const DEFAULT_BASE_URL: &'static str = "https://api.g.alchemy.com/prices/v1";

    /// Default network qualifier for Solana mints
    pub const DEFAULT_NETWORK: &'static str = "solana-mainnet";

    /// Create a new provider; every request is bounded by `timeout`
    pub fn new(
        base_url: &str,
        api_key: &str,
        network: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}/tokens/by-address", base_url.trim_end_matches('/'), api_key),
            network: network.into(),
        })
    }

    /// Pick the USD quote for `asset_id` out of a response
    fn extract_price(asset_id: &str, response: PriceResponse) -> Option<f64> {
        let entry = response
            .data
            .into_iter()
            .find(|entry| entry.address.as_deref().map_or(true, |a| a == asset_id))?;

        if let Some(error) = &entry.error {
            if !error.is_null() {
                debug!("Oracle reported error for {}: {}", asset_id, error);
            }
        }

        entry
            .prices
            .iter()
            .find(|quote| quote.is_usd())
            .or_else(|| entry.prices.first())
            .and_then(PriceQuote::as_f64)
    }
}

#[async_trait]
impl PriceProvider for AlchemyPriceProvider {
    async fn get_price(&self, asset_id: &str) -> Result<Option<f64>, ProviderError> {
        let request = PriceRequest {
            addresses: vec![PriceRequestAddress {
                network: &self.network,
                address: asset_id,
            }],
        };

        let response: PriceResponse = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let price = Self::extract_price(asset_id, response);
        debug!("Price for {}: {:?}", asset_id, price);
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> PriceResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_usd_quote() {
        let response = parse(json!({
            "data": [{
                "network": "solana-mainnet",
                "address": "mint",
                "prices": [
                    { "currency": "eur", "value": "0.90" },
                    { "currency": "usd", "value": "1.0001", "lastUpdatedAt": "2025-01-01T00:00:00Z" }
                ],
                "error": null
            }]
        }));
        assert_eq!(AlchemyPriceProvider::extract_price("mint", response), Some(1.0001));
    }

    #[test]
    fn missing_or_bad_prices_are_none() {
        let unlisted = parse(json!({
            "data": [{ "network": "solana-mainnet", "address": "mint", "prices": [], "error": "Token not found" }]
        }));
        assert_eq!(AlchemyPriceProvider::extract_price("mint", unlisted), None);

        let garbage = parse(json!({
            "data": [{ "address": "mint", "prices": [{ "currency": "usd", "value": "n/a" }] }]
        }));
        assert_eq!(AlchemyPriceProvider::extract_price("mint", garbage), None);

        assert_eq!(AlchemyPriceProvider::extract_price("mint", parse(json!({}))), None);
    }
}
