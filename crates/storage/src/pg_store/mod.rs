//! PostgreSQL record store, generic over the catalog table.

mod records;

use std::marker::PhantomData;
use std::time::Duration;

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use cellarmatch_core::WineRecord;

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::table::WineTable;

/// Admin workload: short bursts, few concurrent callers.
const POOL_MAX_CONNECTIONS: u32 = 10;
const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Connect a pool and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(POOL_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
        .test_before_acquire(true)
        .connect(database_url)
        .await?;
    run_pg_migrations(&pool).await?;
    tracing::info!("record store connected");
    Ok(pool)
}

/// Store over one catalog table. The marker type fixes the table at
/// compile time; both markers share this implementation.
#[derive(Debug, Clone)]
pub struct PgRecordStore<T: WineTable> {
    pool: PgPool,
    _table: PhantomData<T>,
}

impl<T: WineTable> PgRecordStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, _table: PhantomData }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub(crate) fn row_to_record(row: &PgRow) -> Result<WineRecord, StorageError> {
    Ok(WineRecord {
        id: row.try_get("id")?,
        producer: row.try_get("producer")?,
        cuvee: row.try_get("cuvee")?,
        name: row.try_get("name")?,
        vintage: row.try_get("vintage")?,
        region: row.try_get("region")?,
        appellation: row.try_get("appellation")?,
        grapes: row.try_get("grapes")?,
        volume_ml: row.try_get("volume_ml")?,
        norm_producer: row.try_get("norm_producer")?,
        norm_cuvee: row.try_get("norm_cuvee")?,
        dedupe_block: row.try_get("dedupe_block")?,
        is_active: row.try_get("is_active")?,
        duplicate_of: row.try_get("duplicate_of")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Convert `usize` to `i64` for SQL LIMIT/OFFSET binds.
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}
