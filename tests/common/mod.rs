#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use solana_net_worth::error::ProviderError;
use solana_net_worth::models::{
    BalanceChanges, SignatureInfo, TokenAccountBalance, TransactionRecord,
};
use solana_net_worth::{ChainDataProvider, PriceProvider};
use solana_sdk::pubkey::Pubkey;

pub const WALLET_A: &str = "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1";
pub const WALLET_B: &str = "Vote111111111111111111111111111111111111111";
pub const WALLET_C: &str = "Stake11111111111111111111111111111111111111";

pub const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";
pub const JUP: &str = "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN";
pub const BONK: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

pub const LAMPORTS: u64 = 1_000_000_000;

/// Chain state of one wallet as seen by `FakeChain`
#[derive(Debug, Clone, Default)]
pub struct WalletFixture {
    pub native_balance: f64,
    pub token_accounts: Vec<TokenAccountBalance>,
    pub fail_holdings: bool,
    /// `None` makes the signature lookup fail
    pub signatures: Option<Vec<SignatureInfo>>,
}

/// In-memory chain data provider
#[derive(Default)]
pub struct FakeChain {
    wallets: HashMap<String, WalletFixture>,
    transactions: HashMap<String, TransactionRecord>,
    failing_transactions: HashSet<String>,
    pub token_program_calls: Mutex<Vec<Pubkey>>,
}

impl FakeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallet(mut self, address: &str, fixture: WalletFixture) -> Self {
        self.wallets.insert(address.to_string(), fixture);
        self
    }

    pub fn with_transaction(mut self, record: TransactionRecord) -> Self {
        self.transactions.insert(record.signature.clone(), record);
        self
    }

    pub fn with_failing_transaction(mut self, signature: &str) -> Self {
        self.failing_transactions.insert(signature.to_string());
        self
    }

    fn wallet(&self, wallet: &Pubkey) -> WalletFixture {
        self.wallets.get(&wallet.to_string()).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ChainDataProvider for FakeChain {
    async fn fetch_native_balance(&self, wallet: &Pubkey) -> Result<f64, ProviderError> {
        let fixture = self.wallet(wallet);
        if fixture.fail_holdings {
            return Err(ProviderError::Rpc("simulated balance failure".to_string()));
        }
        Ok(fixture.native_balance)
    }

    async fn fetch_token_accounts(
        &self,
        wallet: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, ProviderError> {
        self.token_program_calls.lock().unwrap().push(*program_id);
        let fixture = self.wallet(wallet);
        if fixture.fail_holdings {
            return Err(ProviderError::Rpc("simulated token failure".to_string()));
        }
        Ok(fixture.token_accounts)
    }

    // Ignores `limit` so callers have to enforce it themselves
    async fn fetch_signatures(
        &self,
        wallet: &Pubkey,
        _limit: usize,
    ) -> Result<Vec<SignatureInfo>, ProviderError> {
        self.wallet(wallet)
            .signatures
            .ok_or_else(|| ProviderError::Rpc("simulated signature failure".to_string()))
    }

    async fn fetch_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionRecord>, ProviderError> {
        if self.failing_transactions.contains(signature) {
            return Err(ProviderError::MalformedResponse("simulated bad record".to_string()));
        }
        Ok(self.transactions.get(signature).cloned())
    }
}

/// Fixed prices, with selected identifiers failing outright
#[derive(Default)]
pub struct FlakyPrices {
    prices: HashMap<String, f64>,
    failing: HashSet<String>,
    pub requested: Mutex<Vec<String>>,
}

impl FlakyPrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, asset_id: &str, price: f64) -> Self {
        self.prices.insert(asset_id.to_string(), price);
        self
    }

    pub fn with_failure(mut self, asset_id: &str) -> Self {
        self.failing.insert(asset_id.to_string());
        self
    }
}

#[async_trait]
impl PriceProvider for FlakyPrices {
    async fn get_price(&self, asset_id: &str) -> Result<Option<f64>, ProviderError> {
        self.requested.lock().unwrap().push(asset_id.to_string());
        if self.failing.contains(asset_id) {
            return Err(ProviderError::Rpc(format!("oracle timed out for {}", asset_id)));
        }
        Ok(self.prices.get(asset_id).copied())
    }
}

pub fn token_account(mint: &str, ui_amount: &str, decimals: u8) -> TokenAccountBalance {
    TokenAccountBalance {
        mint: mint.to_string(),
        ui_amount_string: Some(ui_amount.to_string()),
        ui_amount: ui_amount.parse().ok(),
        decimals,
    }
}

pub fn signature(signature: &str, block_time: Option<i64>) -> SignatureInfo {
    SignatureInfo {
        signature: signature.to_string(),
        block_time,
    }
}

/// Two-party transfer record with `wallet` at index 1
pub fn transfer(
    signature: &str,
    wallet: &str,
    pre_lamports: u64,
    post_lamports: u64,
    block_time: Option<i64>,
) -> TransactionRecord {
    TransactionRecord {
        signature: signature.to_string(),
        block_time,
        account_keys: vec![WALLET_C.to_string(), wallet.to_string()],
        balances: Some(BalanceChanges {
            pre_balances: vec![50 * LAMPORTS, pre_lamports],
            post_balances: vec![50 * LAMPORTS, post_lamports],
        }),
    }
}
