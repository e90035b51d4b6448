use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::error::ValuationError;
use crate::models::{PortfolioSummary, WalletValuation};
use crate::traits::price_provider::PriceProvider;

use super::holdings::HoldingsFetcher;

/// Combines holdings and prices into USD valuations
pub struct WalletValuer {
    holdings: HoldingsFetcher,
    price_provider: Arc<dyn PriceProvider>,
}

impl WalletValuer {
    /// Create a new wallet valuer
    pub fn new(holdings: HoldingsFetcher, price_provider: Arc<dyn PriceProvider>) -> Self {
        Self {
            holdings,
            price_provider,
        }
    }

    /// Value one wallet.
    ///
    /// Fails only when the holdings cannot be fetched; unpriced assets count as zero.
    pub async fn value_wallet(&self, address: &str) -> Result<WalletValuation, ValuationError> {
        let holdings = self
            .holdings
            .fetch_holdings(address)
            .await
            .map_err(|e| ValuationError::new(address.trim(), e))?;

        let asset_ids = holdings.asset_ids();
        let prices = self.price_provider.resolve_prices(&asset_ids).await;
        info!(
            "Resolved {}/{} prices for {}",
            prices.len(),
            asset_ids.len(),
            holdings.address
        );

        let valuation = holdings.value(&prices);
        info!(
            "Total value of {}: ${:.2}",
            valuation.address, valuation.total_usd_value
        );
        Ok(valuation)
    }

    /// Value every address concurrently. Wallets that fail are logged and left out.
    pub async fn value_wallets(&self, addresses: &[String]) -> PortfolioSummary {
        let results = join_all(addresses.iter().map(|address| self.value_wallet(address))).await;

        let wallets = results
            .into_iter()
            .filter_map(|result| match result {
                Ok(valuation) => Some(valuation),
                Err(e) => {
                    warn!("Omitting wallet from portfolio: {}", e);
                    None
                }
            })
            .collect();

        PortfolioSummary::new(wallets)
    }
}
