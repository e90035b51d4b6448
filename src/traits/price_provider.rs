use std::collections::HashSet;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::debug;

use crate::error::ProviderError;
use crate::models::PriceTable;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// USD unit price for one asset; `Ok(None)` when the oracle does not list it
    async fn get_price(&self, asset_id: &str) -> Result<Option<f64>, ProviderError>;

    /// Resolve prices for many assets. Never fails.
    ///
    /// One request per distinct identifier is issued concurrently and all are
    /// joined; a failed request only leaves its own identifier unpriced.
    async fn resolve_prices(&self, asset_ids: &[String]) -> PriceTable {
        let mut seen = HashSet::new();
        let distinct: Vec<&str> = asset_ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();

        let results = join_all(distinct.iter().map(|id| self.get_price(id))).await;

        let mut prices = PriceTable::new();
        for (id, result) in distinct.into_iter().zip(results) {
            match result {
                Ok(Some(price)) => prices.insert(id, price),
                Ok(None) => debug!("No price listed for {}", id),
                Err(e) => debug!("Failed to fetch price for {}: {}", id, e),
            }
        }
        prices
    }
}
