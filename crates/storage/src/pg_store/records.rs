//! RecordStore implementation for PgRecordStore.

use async_trait::async_trait;
use cellarmatch_core::WineRecord;

use super::{row_to_record, usize_to_i64, PgRecordStore};
use crate::error::StorageError;
use crate::table::WineTable;
use crate::traits::{DedupeStats, NormalizationUpdate, RecordStore};

#[async_trait]
impl<T: WineTable> RecordStore for PgRecordStore<T> {
    async fn fetch_block(&self, block: &str) -> Result<Vec<WineRecord>, StorageError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE dedupe_block = $1 AND is_active = TRUE ORDER BY id",
            T::SELECT_COLUMNS,
            T::TABLE,
        );
        let rows = sqlx::query(&sql).bind(block).fetch_all(self.pool()).await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<WineRecord>, StorageError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ANY($1) ORDER BY id",
            T::SELECT_COLUMNS,
            T::TABLE,
        );
        let rows = sqlx::query(&sql).bind(ids).fetch_all(self.pool()).await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn distinct_blocks(&self) -> Result<Vec<String>, StorageError> {
        let sql = format!(
            "SELECT DISTINCT dedupe_block FROM {} \
             WHERE is_active = TRUE AND dedupe_block IS NOT NULL ORDER BY dedupe_block",
            T::TABLE,
        );
        let blocks = sqlx::query_scalar(&sql).fetch_all(self.pool()).await?;
        Ok(blocks)
    }

    async fn fetch_active_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<WineRecord>, StorageError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE is_active = TRUE ORDER BY id LIMIT $1 OFFSET $2",
            T::SELECT_COLUMNS,
            T::TABLE,
        );
        let rows = sqlx::query(&sql)
            .bind(usize_to_i64(limit))
            .bind(usize_to_i64(offset))
            .fetch_all(self.pool())
            .await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn update_normalization(
        &self,
        updates: &[NormalizationUpdate],
    ) -> Result<(), StorageError> {
        let sql = format!(
            "UPDATE {} SET norm_producer = $1, norm_cuvee = $2, dedupe_block = $3 WHERE id = $4",
            T::TABLE,
        );
        let mut tx = self.pool().begin().await?;
        for update in updates {
            sqlx::query(&sql)
                .bind(&update.norm_producer)
                .bind(&update.norm_cuvee)
                .bind(&update.dedupe_block)
                .bind(update.id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn mark_merged(&self, ids: &[i64], master_id: i64) -> Result<u64, StorageError> {
        if ids.is_empty() {
            return Ok(0);
        }
        // Single statement, so the whole cluster commits or rolls back
        // together. `id <> master` keeps the master active; ids that no
        // longer exist simply match nothing.
        let sql = format!(
            "UPDATE {} SET is_active = FALSE, duplicate_of = $1 WHERE id = ANY($2) AND id <> $1",
            T::TABLE,
        );
        let result = sqlx::query(&sql).bind(master_id).bind(ids).execute(self.pool()).await?;
        Ok(result.rows_affected())
    }

    async fn stats(&self) -> Result<DedupeStats, StorageError> {
        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", T::TABLE))
            .fetch_one(self.pool())
            .await?;
        let active: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE is_active = TRUE",
            T::TABLE
        ))
        .fetch_one(self.pool())
        .await?;
        let duplicates: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE is_active = FALSE",
            T::TABLE
        ))
        .fetch_one(self.pool())
        .await?;
        let normalized: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE norm_producer IS NOT NULL",
            T::TABLE
        ))
        .fetch_one(self.pool())
        .await?;

        Ok(DedupeStats {
            total: u64::try_from(total).unwrap_or(0),
            active: u64::try_from(active).unwrap_or(0),
            duplicates: u64::try_from(duplicates).unwrap_or(0),
            normalized: u64::try_from(normalized).unwrap_or(0),
        })
    }
}
