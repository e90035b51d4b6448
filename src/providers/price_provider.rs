use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::price_provider::PriceProvider;

/// Price provider backed by a fixed table
pub struct StaticPriceProvider {
    prices: HashMap<String, f64>,
}

impl StaticPriceProvider {
    /// Create a provider that prices nothing
    pub fn new() -> Self {
        Self { prices: HashMap::new() }
    }

    /// USD stablecoins pegged at one dollar
    pub fn stablecoins() -> Self {
        Self::new()
            .with_price("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 1.0) // USDC
            .with_price("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 1.0) // USDT
    }

    pub fn with_price(mut self, asset_id: impl Into<String>, price: f64) -> Self {
        self.prices.insert(asset_id.into(), price);
        self
    }
}

impl Default for StaticPriceProvider {
    fn default() -> Self {
        Self::stablecoins()
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn get_price(&self, asset_id: &str) -> Result<Option<f64>, ProviderError> {
        let price = self.prices.get(asset_id).copied();
        if let Some(price) = price {
            debug!("Found known price for {}: ${}", asset_id, price);
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_only_known_assets() {
        let provider = StaticPriceProvider::stablecoins().with_price("mint-x", 0.25);
        let ids = vec![
            "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            "mint-x".to_string(),
            "unlisted".to_string(),
        ];

        let prices = provider.resolve_prices(&ids).await;

        assert_eq!(prices.len(), 2);
        assert_eq!(prices.get("mint-x"), Some(0.25));
        assert_eq!(prices.get("unlisted"), None);
    }
}
