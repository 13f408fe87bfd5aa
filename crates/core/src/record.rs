//! Wine-like record types shared across the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record from either catalog table (`wines` or `scraped_wines`).
///
/// The two tables are near-identical; columns absent from one table
/// (the user catalog has no structured `cuvee`, the scraped catalog has
/// no bare `name`) surface here as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    pub id: i64,
    pub producer: Option<String>,
    pub cuvee: Option<String>,
    /// Raw label name; the user catalog stores this instead of a cuvée.
    pub name: Option<String>,
    /// Free text, or the `"NV"` sentinel. Exact-match field — never
    /// fuzzy-compared.
    pub vintage: Option<String>,
    pub region: Option<String>,
    pub appellation: Option<String>,
    pub grapes: Option<String>,
    pub volume_ml: Option<i32>,
    /// Derived by normalization; null until `normalize_all` has run.
    pub norm_producer: Option<String>,
    pub norm_cuvee: Option<String>,
    pub dedupe_block: Option<String>,
    /// False means "merged away: hidden from listings and from any
    /// future comparison".
    pub is_active: bool,
    /// Master record absorbing this one; set only when `is_active` is
    /// false, never self-referential.
    pub duplicate_of: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl WineRecord {
    /// Structured cuvée with fallback to the raw label name.
    pub fn cuvee_or_name(&self) -> Option<&str> {
        self.cuvee.as_deref().or(self.name.as_deref())
    }

    /// Display label for admin listings: `"Producer - Cuvee (Vintage)"`.
    pub fn display_name(&self) -> String {
        format!(
            "{} - {} ({})",
            self.producer.as_deref().unwrap_or("Unknown"),
            self.cuvee_or_name().unwrap_or("N/A"),
            self.vintage.as_deref().unwrap_or("NV"),
        )
    }
}

/// Capability the matching engine needs from a record.
///
/// Both catalog tables satisfy this through [`WineRecord`]; the engine
/// stays generic over the capability so adding a record source never
/// means runtime type switching inside the pipeline.
pub trait Matchable {
    /// Unique, immutable identifier.
    fn record_id(&self) -> i64;

    /// Exact-match vintage field (`None` and `None` compare equal).
    fn vintage(&self) -> Option<&str>;

    fn norm_producer(&self) -> Option<&str>;

    fn norm_cuvee(&self) -> Option<&str>;

    /// Count of populated descriptive fields, the most significant key
    /// in master ranking.
    fn completeness(&self) -> usize;

    fn created_at(&self) -> Option<DateTime<Utc>>;
}

impl Matchable for WineRecord {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn vintage(&self) -> Option<&str> {
        self.vintage.as_deref()
    }

    fn norm_producer(&self) -> Option<&str> {
        self.norm_producer.as_deref()
    }

    fn norm_cuvee(&self) -> Option<&str> {
        self.norm_cuvee.as_deref()
    }

    fn completeness(&self) -> usize {
        [
            self.producer.is_some(),
            self.cuvee_or_name().is_some(),
            self.vintage.is_some(),
            self.region.is_some(),
            self.appellation.is_some(),
            self.grapes.is_some(),
            self.volume_ml.is_some(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
