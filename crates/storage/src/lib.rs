//! Storage layer for cellarmatch
//!
//! PostgreSQL-backed persistence for the two near-identical catalog
//! tables (`wines`, `scraped_wines`), behind the [`RecordStore`] trait
//! the matching engine's drivers consume. The trait keeps the service
//! layer backend-agnostic and mockable in tests.

mod error;
mod pg_migrations;
mod pg_store;
mod table;
mod traits;

pub use error::StorageError;
pub use pg_migrations::run_pg_migrations;
pub use pg_store::{connect, PgRecordStore};
pub use table::{ScrapedWines, TableKind, WineTable, Wines};
pub use traits::{DedupeStats, NormalizationUpdate, RecordStore};
