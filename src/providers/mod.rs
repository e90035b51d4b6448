//! Concrete chain, price and storage backends

pub mod alchemy_provider;
pub mod file_store;
pub mod memory_store;
pub mod price_provider;
pub mod rpc_provider;

// Re-export for convenience
pub use alchemy_provider::AlchemyPriceProvider;
pub use file_store::{JsonFileAddressStore, DEFAULT_WALLETS_FILE};
pub use memory_store::MemoryAddressStore;
pub use price_provider::StaticPriceProvider;
pub use rpc_provider::RpcDataProvider;
