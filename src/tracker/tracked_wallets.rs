use std::sync::Arc;

use tracing::info;

use crate::error::StoreError;
use crate::traits::address_store::AddressStore;
use crate::utils::parse_address;

/// The user's list of tracked wallet addresses
pub struct TrackedWallets {
    store: Arc<dyn AddressStore>,
}

impl TrackedWallets {
    pub fn new(store: Arc<dyn AddressStore>) -> Self {
        Self { store }
    }

    /// Tracked addresses in the order they were added
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        self.store.load().await
    }

    /// Validate and append an address. Returns the stored form.
    pub async fn add(&self, address: &str) -> Result<String, StoreError> {
        let wallet = parse_address(address)?.to_string();

        let mut addresses = self.store.load().await?;
        if addresses.contains(&wallet) {
            return Err(StoreError::DuplicateAddress(wallet));
        }

        addresses.push(wallet.clone());
        self.store.save(&addresses).await?;
        info!("Tracking wallet {}", wallet);
        Ok(wallet)
    }

    /// Stop tracking an address. Returns whether it was tracked.
    pub async fn remove(&self, address: &str) -> Result<bool, StoreError> {
        let target = address.trim();
        let addresses = self.store.load().await?;
        let before = addresses.len();

        let remaining: Vec<String> = addresses.into_iter().filter(|a| a != target).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        if remaining.is_empty() {
            self.store.clear().await?;
        } else {
            self.store.save(&remaining).await?;
        }
        info!("Stopped tracking wallet {}", target);
        Ok(true)
    }
}
