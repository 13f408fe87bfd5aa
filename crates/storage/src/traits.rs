//! Storage collaborator interface for the matching engine's drivers.

use async_trait::async_trait;
use cellarmatch_core::WineRecord;
use serde::Serialize;

use crate::error::StorageError;

/// One record's recomputed normalization fields, persisted as a page.
#[derive(Debug, Clone)]
pub struct NormalizationUpdate {
    pub id: i64,
    pub norm_producer: String,
    pub norm_cuvee: String,
    pub dedupe_block: String,
}

/// Aggregate dedupe counters for one catalog table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DedupeStats {
    pub total: u64,
    pub active: u64,
    pub duplicates: u64,
    pub normalized: u64,
}

impl DedupeStats {
    /// Share of records with normalization applied, rounded to two
    /// decimals. 0.0 for an empty table.
    pub fn normalization_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let pct = self.normalized as f64 / self.total as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// Everything the dedupe pipeline needs from a catalog table.
///
/// Object-safe so the service layer can hold one store per table behind
/// `Arc<dyn RecordStore>`; tests substitute an in-memory double.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All active records in one blocking bucket, ordered by id.
    async fn fetch_block(&self, block: &str) -> Result<Vec<WineRecord>, StorageError>;

    /// Records by id list. Missing ids are simply absent from the
    /// result — callers decide whether that is an error.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<WineRecord>, StorageError>;

    /// Distinct blocking keys present among active records.
    async fn distinct_blocks(&self) -> Result<Vec<String>, StorageError>;

    /// One page of active records, ordered by id.
    async fn fetch_active_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<WineRecord>, StorageError>;

    /// Persist one page of recomputed normalization fields in a single
    /// transaction.
    async fn update_normalization(
        &self,
        updates: &[NormalizationUpdate],
    ) -> Result<(), StorageError>;

    /// Mark every listed record except the master as merged away
    /// (`is_active = false`, `duplicate_of = master_id`), atomically per
    /// call. Ids that no longer exist are skipped silently. Returns the
    /// number of rows actually changed; the master is never counted.
    async fn mark_merged(&self, ids: &[i64], master_id: i64) -> Result<u64, StorageError>;

    /// Aggregate dedupe counters.
    async fn stats(&self) -> Result<DedupeStats, StorageError>;
}
