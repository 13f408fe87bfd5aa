//! Handlers for the four dedupe admin operations.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api_error::ApiError;
use crate::api_types::{
    CandidatesQuery, CandidatesResponse, MergeRequest, MergeResponse, NormalizeQuery,
    NormalizeResponse, StatsResponse, TableQuery,
};
use crate::AppState;

/// Recompute normalization fields and blocking keys for a whole table.
///
/// Runs synchronously within the request and answers 202 on completion;
/// large catalogs are expected to use the CLI instead.
pub async fn normalize(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NormalizeQuery>,
) -> Result<(StatusCode, Json<NormalizeResponse>), ApiError> {
    let processed = state.service_for(query.table).normalize_all(query.batch_size).await?;
    Ok((StatusCode::ACCEPTED, Json(NormalizeResponse { table: query.table, processed })))
}

/// List likely-duplicate pairs across all blocking buckets.
pub async fn candidates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CandidatesQuery>,
) -> Result<Json<CandidatesResponse>, ApiError> {
    let candidates = state
        .service_for(query.table)
        .find_candidates(query.threshold, query.limit)
        .await?;
    Ok(Json(CandidatesResponse { total: candidates.len(), candidates }))
}

/// Merge an explicit id list, auto-selecting the master unless one is
/// given.
pub async fn merge(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
    Json(request): Json<MergeRequest>,
) -> Result<Json<MergeResponse>, ApiError> {
    let outcome = state
        .service_for(query.table)
        .merge_explicit(&request.record_ids, request.master_id)
        .await?;
    Ok(Json(MergeResponse {
        master_id: outcome.master_id,
        merged_count: outcome.merged_count,
        merged_ids: outcome.merged_ids,
    }))
}

/// Dedupe counters for one table.
pub async fn stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.service_for(query.table).stats().await?;
    Ok(Json(StatsResponse {
        table: query.table,
        total_records: stats.total,
        active_records: stats.active,
        duplicate_records: stats.duplicates,
        normalized_records: stats.normalized,
        normalization_percentage: stats.normalization_percentage(),
    }))
}
