//! HTTP API server for cellarmatch.
//!
//! Administrative surface over the dedupe pipeline: trigger batch
//! normalization, list duplicate candidates, execute merges, read stats.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use cellarmatch_service::DedupeService;
use cellarmatch_storage::{RecordStore, TableKind};

pub use api_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// One dedupe service per catalog table; the `table` query parameter
/// selects between them.
pub struct AppState {
    wines: Arc<DedupeService>,
    scraped_wines: Arc<DedupeService>,
}

impl AppState {
    pub fn new(wines: Arc<dyn RecordStore>, scraped_wines: Arc<dyn RecordStore>) -> Self {
        Self {
            wines: Arc::new(DedupeService::new(wines)),
            scraped_wines: Arc::new(DedupeService::new(scraped_wines)),
        }
    }

    pub fn service_for(&self, table: TableKind) -> &DedupeService {
        match table {
            TableKind::Wines => &self.wines,
            TableKind::ScrapedWines => &self.scraped_wines,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/dedupe/normalize", post(handlers::dedupe::normalize))
        .route("/api/dedupe/candidates", get(handlers::dedupe::candidates))
        .route("/api/dedupe/merge", post(handlers::dedupe::merge))
        .route("/api/dedupe/stats", get(handlers::dedupe::stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
