use serde::{Deserialize, Serialize};

use super::price::PriceTable;
use super::token::{TokenHolding, NATIVE_MINT};

/// Native balance and non-zero token holdings of one address, not yet priced
#[derive(Debug, Clone, PartialEq)]
pub struct Holdings {
    pub address: String,
    /// SOL balance in display units
    pub native_balance: f64,
    /// Token holdings in provider order
    pub tokens: Vec<TokenHolding>,
}

impl Holdings {
    /// Asset identifiers to price: the native mint first, then each token mint once
    pub fn asset_ids(&self) -> Vec<String> {
        let mut ids = vec![NATIVE_MINT.to_string()];
        for token in &self.tokens {
            if !ids.contains(&token.mint) {
                ids.push(token.mint.clone());
            }
        }
        ids
    }

    /// Value these holdings against `prices`
    pub fn value(&self, prices: &PriceTable) -> WalletValuation {
        let native_price = prices.get(NATIVE_MINT);
        let tokens = self
            .tokens
            .iter()
            .map(|token| token.priced(prices.get(&token.mint)))
            .collect();

        WalletValuation::new(
            self.address.clone(),
            self.native_balance,
            native_price,
            tokens,
        )
    }
}

/// USD summary of one address at query time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletValuation {
    pub address: String,
    pub native_balance: f64,
    pub native_price_usd: Option<f64>,
    pub native_usd_value: f64,
    pub tokens: Vec<TokenHolding>,
    pub total_usd_value: f64,
}

impl WalletValuation {
    /// Build a valuation; the total is always derived from the parts
    pub fn new(
        address: String,
        native_balance: f64,
        native_price_usd: Option<f64>,
        tokens: Vec<TokenHolding>,
    ) -> Self {
        let native_usd_value = native_balance * native_price_usd.unwrap_or(0.0);
        let tokens_usd: f64 = tokens.iter().map(|t| t.usd_value).sum();

        Self {
            address,
            native_balance,
            native_price_usd,
            native_usd_value,
            tokens,
            total_usd_value: native_usd_value + tokens_usd,
        }
    }

    /// Combined USD value of the token holdings
    pub fn tokens_usd_value(&self) -> f64 {
        self.tokens.iter().map(|t| t.usd_value).sum()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
