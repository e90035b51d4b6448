use async_trait::async_trait;

use crate::error::ValuationError;
use crate::models::{PortfolioSummary, Transaction, WalletValuation};

/// Receives valuation results for presentation
#[async_trait]
pub trait ValuationEventHandler: Send + Sync {
    /// Handle a single wallet valuation
    async fn handle_valuation(&self, valuation: &WalletValuation);

    /// Handle an aggregate over several wallets
    async fn handle_portfolio(&self, summary: &PortfolioSummary) {
        for wallet in &summary.wallets {
            self.handle_valuation(wallet).await;
        }
    }

    /// Handle recent transactions of an address
    async fn handle_transactions(&self, address: &str, transactions: &[Transaction]);

    /// Handle a wallet that could not be valued
    async fn handle_error(&self, error: &ValuationError);
}
