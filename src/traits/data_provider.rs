use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::error::ProviderError;
use crate::models::{SignatureInfo, TokenAccountBalance, TransactionRecord};

/// Read access to chain state for one address
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    /// Fetch SOL balance for a wallet, in SOL
    async fn fetch_native_balance(&self, wallet: &Pubkey) -> Result<f64, ProviderError>;

    /// Fetch the token accounts owned by `wallet` under `program_id`, in provider order
    async fn fetch_token_accounts(
        &self,
        wallet: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, ProviderError>;

    /// Fetch up to `limit` signatures involving `wallet`, newest first
    async fn fetch_signatures(
        &self,
        wallet: &Pubkey,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ProviderError>;

    /// Fetch one transaction; `Ok(None)` when the node does not have it
    async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionRecord>, ProviderError>;
}
