use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::WalletValuation;

/// Aggregate view over every wallet that could be valued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub timestamp: DateTime<Utc>,
    pub wallets: Vec<WalletValuation>,
    pub total_value_usd: f64,
}

impl PortfolioSummary {
    /// Create a summary; the total is the sum of the included wallets
    pub fn new(wallets: Vec<WalletValuation>) -> Self {
        let total_value_usd = wallets.iter().map(|w| w.total_usd_value).sum();
        Self {
            timestamp: Utc::now(),
            wallets,
            total_value_usd,
        }
    }

    /// Get the valuation for a specific address
    pub fn get_wallet(&self, address: &str) -> Option<&WalletValuation> {
        self.wallets.iter().find(|w| w.address == address)
    }

    /// Check if no wallet could be valued
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Number of valued wallets
    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }

    /// Token holdings across all wallets
    pub fn token_count(&self) -> usize {
        self.wallets.iter().map(|w| w.token_count()).sum()
    }
}
