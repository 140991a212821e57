//! Persistent storage for profile-page state.
//!
//! The [`ProfileStore`] trait is a small key-value interface with
//! platform-specific implementations:
//!
//! - **Web (WASM)**: [`LocalStorageStore`] backed by browser localStorage,
//!   surviving page refreshes
//! - **Native**: [`InMemoryProfileStore`], used by desktop builds and tests
//!
//! Only one key is ever written by the application: the sanitized Scholar
//! identifier under [`crate::scholar::SCHOLAR_ID_KEY`]. Keeping the interface
//! behind a trait lets the submit/restore logic run against the in-memory
//! store in unit tests.
//!
//! # Error Handling
//!
//! All operations return `Result<T, StoreError>` with variants:
//! - `Unavailable` - no window, or localStorage disabled
//! - `Backend` - backend-specific read/write failure

pub use crate::error::StoreError;

mod memory;
pub use memory::InMemoryProfileStore;

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Key-value storage for profile-page state.
pub trait ProfileStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
