use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::models::{SignatureInfo, Transaction, TransactionDirection};
use crate::traits::data_provider::ChainDataProvider;
use crate::utils::helper::lamport_delta_to_sol;
use crate::utils::parse_address;

/// Balance changes at or below this many SOL are treated as fee-only entries
pub const DEFAULT_NEGLIGIBLE_DELTA_SOL: f64 = 0.000001;

/// Entries returned when the caller does not ask for a specific count
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Best-effort recent transaction history
pub struct TransactionHistory {
    data_provider: Arc<dyn ChainDataProvider>,
    negligible_delta_sol: f64,
}

impl TransactionHistory {
    pub fn new(data_provider: Arc<dyn ChainDataProvider>) -> Self {
        Self {
            data_provider,
            negligible_delta_sol: DEFAULT_NEGLIGIBLE_DELTA_SOL,
        }
    }

    /// Override the fee-only threshold; non-finite values keep the current one
    pub fn with_negligible_delta(mut self, negligible_delta_sol: f64) -> Self {
        if negligible_delta_sol.is_finite() {
            self.negligible_delta_sol = negligible_delta_sol.abs();
        } else {
            warn!("Ignoring non-finite negligible delta {}", negligible_delta_sol);
        }
        self
    }

    pub fn negligible_delta(&self) -> f64 {
        self.negligible_delta_sol
    }

    /// Up to `limit` recent transactions of `address`, newest first.
    ///
    /// Never fails: a failed signature lookup yields an empty list and a
    /// transaction that cannot be fetched or attributed is skipped.
    pub async fn recent_transactions(&self, address: &str, limit: usize) -> Vec<Transaction> {
        if limit == 0 {
            return Vec::new();
        }

        let wallet = match parse_address(address) {
            Ok(wallet) => wallet,
            Err(e) => {
                warn!("Skipping history lookup: {}", e);
                return Vec::new();
            }
        };

        let mut signatures = match self.data_provider.fetch_signatures(&wallet, limit).await {
            Ok(signatures) => signatures,
            Err(e) => {
                warn!("Failed to get signatures for address {}: {}", wallet, e);
                return Vec::new();
            }
        };
        signatures.truncate(limit);
        debug!("Found {} signatures for {}", signatures.len(), wallet);

        let wallet_key = wallet.to_string();
        let entries = join_all(
            signatures
                .iter()
                .map(|info| self.fetch_entry(info, &wallet_key)),
        )
        .await;

        let transactions: Vec<Transaction> = entries.into_iter().flatten().collect();
        info!("Processed {} transactions for {}", transactions.len(), wallet);
        transactions
    }

    /// Fetch one signature and reduce it to the wallet's perspective
    async fn fetch_entry(&self, info: &SignatureInfo, wallet: &str) -> Option<Transaction> {
        let record = match self.data_provider.fetch_transaction(&info.signature).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("Transaction {} not available", info.signature);
                return None;
            }
            Err(e) => {
                warn!("Failed to process transaction {}: {}", info.signature, e);
                return None;
            }
        };

        let Some((pre, post)) = record.balances_of(wallet) else {
            debug!("No balance metadata for {} in {}", wallet, info.signature);
            return None;
        };

        let delta = lamport_delta_to_sol(pre, post);
        if delta.abs() <= self.negligible_delta_sol {
            return None;
        }

        Some(Transaction {
            signature: info.signature.clone(),
            timestamp: record.block_time.or(info.block_time).unwrap_or(0),
            direction: TransactionDirection::from_delta(delta),
            amount: delta.abs(),
        })
    }
}
