use serde::{Deserialize, Serialize};

/// Direction of value flow relative to the tracked address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    Inbound,
    Outbound,
}

impl TransactionDirection {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            TransactionDirection::Inbound
        } else {
            TransactionDirection::Outbound
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionDirection::Inbound => "inbound",
            TransactionDirection::Outbound => "outbound",
        }
    }
}

/// One ledger entry seen from a single address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub signature: String,
    /// Unix seconds, 0 when the block time is unknown
    pub timestamp: i64,
    pub direction: TransactionDirection,
    /// Absolute SOL amount
    pub amount: f64,
}

/// Signature entry returned by the provider, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureInfo {
    pub signature: String,
    pub block_time: Option<i64>,
}

/// Native balance metadata of a fetched transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub signature: String,
    pub block_time: Option<i64>,
    /// Account keys in message order, loaded lookup-table addresses appended
    pub account_keys: Vec<String>,
    /// Lamport balances per account, `None` when the record carries no metadata
    pub balances: Option<BalanceChanges>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChanges {
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
}

impl TransactionRecord {
    /// Pre and post lamport balances of `address`, if it took part in the transaction
    pub fn balances_of(&self, address: &str) -> Option<(u64, u64)> {
        let balances = self.balances.as_ref()?;
        let index = self.account_keys.iter().position(|key| key == address)?;
        let pre = *balances.pre_balances.get(index)?;
        let post = *balances.post_balances.get(index)?;
        Some((pre, post))
    }
}
