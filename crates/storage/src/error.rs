//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (not found, transient DB
//! errors) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }
}

/// `RowNotFound` maps to `NotFound` (callers remap with entity context);
/// everything else is a `Database` failure.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            _ => Self::Database(err),
        }
    }
}
