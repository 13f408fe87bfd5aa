//! Typed error enum for the service layer.

use cellarmatch_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage failures with input validation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (bad threshold, short id list).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Referenced records do not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Storage(StorageError::NotFound { .. }))
    }
}
