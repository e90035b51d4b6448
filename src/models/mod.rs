//! Data models for wallet valuation and history

pub mod portfolio;
pub mod price;
pub mod symbols;
pub mod token;
pub mod transaction;
pub mod wallet;

// Re-export for convenience
pub use portfolio::PortfolioSummary;
pub use price::PriceTable;
pub use symbols::SymbolTable;
pub use token::{TokenAccountBalance, TokenHolding, NATIVE_MINT};
pub use transaction::{
    BalanceChanges, SignatureInfo, Transaction, TransactionDirection, TransactionRecord,
};
pub use wallet::{Holdings, WalletValuation};
