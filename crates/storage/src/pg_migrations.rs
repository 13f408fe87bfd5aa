//! PostgreSQL schema migrations for cellarmatch storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS wines (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            producer TEXT,
            price_usd DOUBLE PRECISION,
            url TEXT,
            region TEXT,
            grapes TEXT,
            vintage TEXT,
            notes TEXT,
            norm_producer TEXT,
            norm_cuvee TEXT,
            dedupe_block TEXT,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            duplicate_of BIGINT REFERENCES wines(id) ON DELETE SET NULL,
            created_at TIMESTAMPTZ DEFAULT NOW(),
            updated_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS scraped_wines (
            id BIGSERIAL PRIMARY KEY,
            producer TEXT,
            cuvee TEXT,
            vintage TEXT,
            country TEXT,
            region TEXT,
            appellation TEXT,
            style TEXT,
            grapes TEXT,
            volume_ml INTEGER,
            norm_producer TEXT,
            norm_cuvee TEXT,
            dedupe_block TEXT,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            duplicate_of BIGINT REFERENCES scraped_wines(id) ON DELETE SET NULL,
            created_at TIMESTAMPTZ DEFAULT NOW(),
            updated_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    // Indexes the block scan and merge paths lean on.
    for stmt in [
        "CREATE INDEX IF NOT EXISTS ix_wines_norm_producer ON wines (norm_producer)",
        "CREATE INDEX IF NOT EXISTS ix_wines_dedupe_block ON wines (dedupe_block)",
        "CREATE INDEX IF NOT EXISTS ix_wines_is_active ON wines (is_active)",
        "CREATE INDEX IF NOT EXISTS ix_wines_duplicate_of ON wines (duplicate_of)",
        "CREATE INDEX IF NOT EXISTS ix_scraped_wines_norm_producer ON scraped_wines (norm_producer)",
        "CREATE INDEX IF NOT EXISTS ix_scraped_wines_dedupe_block ON scraped_wines (dedupe_block)",
        "CREATE INDEX IF NOT EXISTS ix_scraped_wines_is_active ON scraped_wines (is_active)",
        "CREATE INDEX IF NOT EXISTS ix_scraped_wines_duplicate_of ON scraped_wines (duplicate_of)",
    ] {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}
