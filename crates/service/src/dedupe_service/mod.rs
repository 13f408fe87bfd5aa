//! Dedupe orchestration over a single catalog table.

mod normalize;
#[cfg(test)]
mod test_store;

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use cellarmatch_core::{
    cluster, find_candidates, select_master, CandidatePair, MAX_CANDIDATE_LIMIT,
};
use cellarmatch_storage::{DedupeStats, RecordStore};

use crate::ServiceError;

/// A likely-duplicate pair enriched for operator review.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateCandidate {
    pub record1_id: i64,
    pub record2_id: i64,
    pub score: f64,
    pub record1_name: String,
    pub record2_name: String,
    pub block: String,
}

/// Result of merging one explicit id list.
#[derive(Debug, Clone, Serialize)]
pub struct MergeOutcome {
    pub master_id: i64,
    pub merged_count: u64,
    pub merged_ids: Vec<i64>,
}

/// Result of applying merges over a candidate list.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MergeSummary {
    pub clusters: usize,
    pub merged: u64,
}

/// Dedupe pipeline driver for one catalog table.
///
/// Holds the table's store; a second table means a second service
/// instance, never a runtime type switch.
pub struct DedupeService {
    store: Arc<dyn RecordStore>,
}

impl DedupeService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Scan every blocking bucket for likely-duplicate pairs.
    ///
    /// Buckets are disjoint, so each is compared independently; the scan
    /// stops as soon as `limit` pairs are collected. Scores round to two
    /// decimals for display.
    pub async fn find_candidates(
        &self,
        threshold: f64,
        limit: usize,
    ) -> Result<Vec<DuplicateCandidate>, ServiceError> {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ServiceError::InvalidInput(format!(
                "threshold must be between 0 and 100, got {threshold}"
            )));
        }
        if limit == 0 || limit > MAX_CANDIDATE_LIMIT {
            return Err(ServiceError::InvalidInput(format!(
                "limit must be between 1 and {MAX_CANDIDATE_LIMIT}, got {limit}"
            )));
        }

        let blocks = self.store.distinct_blocks().await?;
        let mut candidates = Vec::new();

        'blocks: for block in &blocks {
            let records = self.store.fetch_block(block).await?;
            if records.len() < 2 {
                continue;
            }

            for pair in find_candidates(&records, threshold) {
                if candidates.len() >= limit {
                    break 'blocks;
                }
                // Pairs come straight out of this block's records.
                let record1 = records.iter().find(|r| r.id == pair.id1);
                let record2 = records.iter().find(|r| r.id == pair.id2);
                let (Some(record1), Some(record2)) = (record1, record2) else {
                    continue;
                };
                candidates.push(DuplicateCandidate {
                    record1_id: pair.id1,
                    record2_id: pair.id2,
                    score: round2(pair.score),
                    record1_name: record1.display_name(),
                    record2_name: record2.display_name(),
                    block: block.clone(),
                });
            }
        }

        tracing::info!(
            blocks = blocks.len(),
            pairs = candidates.len(),
            threshold,
            "duplicate candidate scan complete"
        );
        Ok(candidates)
    }

    /// Cluster candidate pairs and merge each cluster under its selected
    /// master, one transaction per cluster.
    ///
    /// Not safe to run concurrently with itself over overlapping ids:
    /// two racing runs could pick different masters. Single-writer,
    /// operator-triggered.
    pub async fn apply_merges(
        &self,
        candidates: &[DuplicateCandidate],
    ) -> Result<MergeSummary, ServiceError> {
        let pairs: Vec<CandidatePair> = candidates
            .iter()
            .map(|c| CandidatePair { id1: c.record1_id, id2: c.record2_id, score: c.score })
            .collect();
        let clusters = cluster(&pairs);

        let mut merged_total: u64 = 0;
        for members in &clusters {
            let records = self.store.get_by_ids(members).await?;
            let master_id = select_master(&records).unwrap_or(members[0]);
            let merged = self.store.mark_merged(members, master_id).await?;
            merged_total += merged;
            tracing::info!(master = master_id, merged, "merged duplicate cluster");
        }

        Ok(MergeSummary { clusters: clusters.len(), merged: merged_total })
    }

    /// Merge an explicit id list under an explicit or auto-selected
    /// master.
    ///
    /// The id list is validated up front (at least two ids, all present,
    /// master among them); the merge itself still tolerates rows deleted
    /// between validation and commit.
    pub async fn merge_explicit(
        &self,
        ids: &[i64],
        master_id: Option<i64>,
    ) -> Result<MergeOutcome, ServiceError> {
        if ids.len() < 2 {
            return Err(ServiceError::InvalidInput(
                "need at least two record ids to merge".to_owned(),
            ));
        }

        let records = self.store.get_by_ids(ids).await?;
        let found: HashSet<i64> = records.iter().map(|r| r.id).collect();
        if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
            return Err(ServiceError::NotFound(format!("record {missing} not found")));
        }

        let master_id = match master_id {
            Some(master) => {
                if !ids.contains(&master) {
                    return Err(ServiceError::InvalidInput(
                        "master id must be one of the listed record ids".to_owned(),
                    ));
                }
                master
            }
            None => select_master(&records).unwrap_or(ids[0]),
        };

        let merged_count = self.store.mark_merged(ids, master_id).await?;
        let merged_ids: Vec<i64> = ids.iter().copied().filter(|id| *id != master_id).collect();

        tracing::info!(master = master_id, merged = merged_count, "explicit merge complete");
        Ok(MergeOutcome { master_id, merged_count, merged_ids })
    }

    /// Aggregate dedupe counters for this table.
    pub async fn stats(&self) -> Result<DedupeStats, ServiceError> {
        Ok(self.store.stats().await?)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
