//! Solana Net Worth Library
//!
//! Values Solana wallets in USD by combining on-chain balances with
//! price-oracle quotes, and reports recent native-balance transactions.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod tracker;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::AppConfig;
pub use error::{ConfigError, FetchError, InvalidAddress, ProviderError, StoreError, ValuationError};
pub use handlers::ConsoleEventHandler;
pub use models::{
    Holdings, PortfolioSummary, PriceTable, SymbolTable, TokenHolding, Transaction,
    TransactionDirection, WalletValuation, NATIVE_MINT,
};
pub use providers::{
    AlchemyPriceProvider, JsonFileAddressStore, MemoryAddressStore, RpcDataProvider,
    StaticPriceProvider,
};
pub use tracker::{HoldingsFetcher, TrackedWallets, TransactionHistory, WalletValuer};
pub use traits::{AddressStore, ChainDataProvider, PriceProvider, ValuationEventHandler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
