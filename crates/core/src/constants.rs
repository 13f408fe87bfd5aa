//! Shared constants for cellarmatch.
//!
//! Centralizes thresholds and limits used across the engine, service,
//! HTTP, and CLI layers.

/// Similarity score at or above which a pair is treated as a likely
/// duplicate when the caller does not override it (0–100 scale).
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 87.5;

/// Page size for batch normalization runs.
pub const DEFAULT_NORMALIZE_BATCH_SIZE: usize = 500;

/// Default number of candidate pairs returned by admin queries.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 100;

/// Maximum number of candidate pairs for any query (DoS protection).
pub const MAX_CANDIDATE_LIMIT: usize = 1000;

/// Blocking keys truncate the producer's first word to this many chars.
pub const BLOCK_PREFIX_MAX_CHARS: usize = 20;

/// Sentinel used in blocking keys when a record has no vintage.
pub const NON_VINTAGE_SENTINEL: &str = "nv";
