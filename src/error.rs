//! Error types for the Lectern application.

use thiserror::Error;

/// Errors that can occur when reading or writing the profile store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Storage backend is not available in this context (no window, or
    /// localStorage disabled by the browser)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// Backend-specific read/write failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Errors that can occur when submitting a Scholar identifier.
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// Identifier was empty after trimming and sanitization
    #[error("Scholar ID is empty after sanitization")]
    EmptyId,
    /// Persisting the identifier failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
