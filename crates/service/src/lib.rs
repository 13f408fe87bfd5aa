//! Service layer for cellarmatch
//!
//! Centralizes dedupe business logic between the HTTP/CLI surfaces and
//! storage: batch normalization, the all-blocks candidate scan, and the
//! cluster → select-master → merge pipeline.

mod dedupe_service;
mod error;

pub use dedupe_service::{DedupeService, DuplicateCandidate, MergeOutcome, MergeSummary};
pub use error::ServiceError;
