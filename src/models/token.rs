use serde::{Deserialize, Serialize};

/// Wrapped SOL mint, used as the price-oracle identifier for the native coin
pub const NATIVE_MINT: &str = "So11111111111111111111111111111111111111112";

/// Raw token account balance as reported by the chain data provider
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAccountBalance {
    pub mint: String,
    /// Decimal-adjusted amount as a string (`uiAmountString`)
    pub ui_amount_string: Option<String>,
    /// Decimal-adjusted amount as a float (`uiAmount`)
    pub ui_amount: Option<f64>,
    pub decimals: u8,
}

impl TokenAccountBalance {
    /// Human-readable amount; `None` when neither field parses to a finite number
    pub fn parsed_amount(&self) -> Option<f64> {
        self.ui_amount_string
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .or(self.ui_amount)
            .filter(|amount| amount.is_finite())
    }
}

/// A fungible token balance held by a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolding {
    pub mint: String,
    pub symbol: String,
    pub amount: f64,
    pub decimals: u8,
    /// Unit price used for `usd_value`, if the oracle had one
    pub price_usd: Option<f64>,
    pub usd_value: f64,
}

impl TokenHolding {
    /// Create an unpriced holding
    pub fn new(mint: impl Into<String>, symbol: impl Into<String>, amount: f64, decimals: u8) -> Self {
        Self {
            mint: mint.into(),
            symbol: symbol.into(),
            amount,
            decimals,
            price_usd: None,
            usd_value: 0.0,
        }
    }

    /// Copy of this holding valued at `price`; a missing price values it at zero
    pub fn priced(&self, price: Option<f64>) -> Self {
        Self {
            price_usd: price,
            usd_value: self.amount * price.unwrap_or(0.0),
            ..self.clone()
        }
    }
}
