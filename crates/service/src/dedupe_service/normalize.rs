//! Batch normalization driver.

use cellarmatch_core::{blocking_key, normalize};
use cellarmatch_storage::NormalizationUpdate;

use super::DedupeService;
use crate::ServiceError;

impl DedupeService {
    /// Recompute `norm_producer`, `norm_cuvee`, and `dedupe_block` for
    /// every active record, in fixed-size pages.
    ///
    /// Each page commits on its own, so a killed run loses at most the
    /// in-flight page. Normalization is idempotent — re-running over
    /// already-normalized records writes the same values back.
    ///
    /// Returns the number of records processed.
    pub async fn normalize_all(&self, batch_size: usize) -> Result<u64, ServiceError> {
        if batch_size == 0 {
            return Err(ServiceError::InvalidInput("batch size must be positive".to_owned()));
        }

        let mut offset = 0usize;
        let mut total: u64 = 0;

        loop {
            let page = self.store.fetch_active_page(offset, batch_size).await?;
            if page.is_empty() {
                break;
            }

            let updates: Vec<NormalizationUpdate> = page
                .iter()
                .map(|record| NormalizationUpdate {
                    id: record.id,
                    norm_producer: normalize(record.producer.as_deref()),
                    norm_cuvee: normalize(record.cuvee_or_name()),
                    dedupe_block: blocking_key(
                        record.producer.as_deref(),
                        record.vintage.as_deref(),
                    ),
                })
                .collect();
            self.store.update_normalization(&updates).await?;

            total += page.len() as u64;
            offset += batch_size;
            tracing::info!(processed = total, "normalization progress");
        }

        tracing::info!(processed = total, "normalization complete");
        Ok(total)
    }
}
