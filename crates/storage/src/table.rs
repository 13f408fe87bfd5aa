//! Catalog table selection.
//!
//! The two tables are near-identical but not identical: the user catalog
//! (`wines`) stores a raw label `name` and has no structured `cuvee`,
//! `appellation`, or `volume_ml`; the scraped catalog (`scraped_wines`)
//! is the reverse. Marker types reconcile both shapes onto one
//! `WineRecord` row layout with typed NULL projections, so the engine
//! never switches on the table at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compile-time marker for one catalog table.
pub trait WineTable: Send + Sync + 'static {
    /// SQL table name.
    const TABLE: &'static str;

    /// Projection yielding the full `WineRecord` column set, with typed
    /// NULLs for columns this table does not have.
    const SELECT_COLUMNS: &'static str;
}

/// The user catalog.
#[derive(Debug, Clone, Copy)]
pub struct Wines;

/// The scraper's master catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScrapedWines;

impl WineTable for Wines {
    const TABLE: &'static str = "wines";
    const SELECT_COLUMNS: &'static str = "id, producer, NULL::text AS cuvee, name, vintage, \
         region, NULL::text AS appellation, grapes, NULL::integer AS volume_ml, \
         norm_producer, norm_cuvee, dedupe_block, is_active, duplicate_of, created_at";
}

impl WineTable for ScrapedWines {
    const TABLE: &'static str = "scraped_wines";
    const SELECT_COLUMNS: &'static str = "id, producer, cuvee, NULL::text AS name, vintage, \
         region, appellation, grapes, volume_ml, \
         norm_producer, norm_cuvee, dedupe_block, is_active, duplicate_of, created_at";
}

/// Runtime table selector used by the HTTP and CLI surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Wines,
    ScrapedWines,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wines => "wines",
            Self::ScrapedWines => "scraped_wines",
        }
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wines" => Ok(Self::Wines),
            "scraped_wines" => Ok(Self::ScrapedWines),
            other => Err(format!("unknown table '{other}' (expected wines or scraped_wines)")),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
