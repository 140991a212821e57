//! localStorage-backed profile store for the web platform.

use super::{ProfileStore, StoreError};

/// Browser localStorage [`ProfileStore`].
///
/// The storage handle is looked up per operation rather than held, since the
/// browser can revoke access (private browsing, storage pressure) between
/// calls.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window object".into()))?
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("localStorage access failed: {:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl ProfileStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("read of {:?} failed: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("write of {:?} failed: {:?}", key, e)))
    }
}
