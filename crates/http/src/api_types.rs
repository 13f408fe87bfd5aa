//! Request and response types for the admin API.

use serde::{Deserialize, Serialize};

use cellarmatch_core::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_NORMALIZE_BATCH_SIZE, DEFAULT_SIMILARITY_THRESHOLD,
};
use cellarmatch_service::DuplicateCandidate;
use cellarmatch_storage::TableKind;

const fn default_batch_size() -> usize {
    DEFAULT_NORMALIZE_BATCH_SIZE
}

const fn default_limit() -> usize {
    DEFAULT_CANDIDATE_LIMIT
}

const fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

#[derive(Debug, Deserialize)]
pub struct TableQuery {
    pub table: TableKind,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeQuery {
    pub table: TableKind,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct CandidatesQuery {
    pub table: TableKind,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    pub record_ids: Vec<i64>,
    #[serde(default)]
    pub master_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub table: TableKind,
    pub processed: u64,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub total: usize,
    pub candidates: Vec<DuplicateCandidate>,
}

#[derive(Debug, Serialize)]
pub struct MergeResponse {
    pub master_id: i64,
    pub merged_count: u64,
    pub merged_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub table: TableKind,
    pub total_records: u64,
    pub active_records: u64,
    pub duplicate_records: u64,
    pub normalized_records: u64,
    pub normalization_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
