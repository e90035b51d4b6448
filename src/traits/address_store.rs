use async_trait::async_trait;

use crate::error::StoreError;

/// Persistence of the tracked-address list
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Stored addresses in insertion order; an absent list is empty
    async fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Replace the stored list
    async fn save(&self, addresses: &[String]) -> Result<(), StoreError>;

    /// Delete the stored list
    async fn clear(&self) -> Result<(), StoreError>;
}
