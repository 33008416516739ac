//! Storage-specific error type for the in-memory adapter.

use staffhub_domain::error::StaffHubError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A previous holder of the store lock panicked.
    #[error("employee store lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for StaffHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
