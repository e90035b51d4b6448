use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::traits::address_store::AddressStore;

/// Tracked addresses kept in process memory
#[derive(Default)]
pub struct MemoryAddressStore {
    addresses: Mutex<Vec<String>>,
}

impl MemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: Mutex::new(addresses.into_iter().map(Into::into).collect()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned list is still a valid list of strings
        self.addresses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl AddressStore for MemoryAddressStore {
    async fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock().clone())
    }

    async fn save(&self, addresses: &[String]) -> Result<(), StoreError> {
        *self.lock() = addresses.to_vec();
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.lock().clear();
        Ok(())
    }
}
