//! Seams between the valuation core and its collaborators

pub mod address_store;
pub mod data_provider;
pub mod event_handler;
pub mod price_provider;

// Re-export for convenience
pub use address_store::AddressStore;
pub use data_provider::ChainDataProvider;
pub use event_handler::ValuationEventHandler;
pub use price_provider::PriceProvider;
