//! In-memory `RecordStore` double for service tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use cellarmatch_core::WineRecord;
use cellarmatch_storage::{DedupeStats, NormalizationUpdate, RecordStore, StorageError};

#[derive(Default)]
pub struct MemoryRecordStore {
    records: Mutex<HashMap<i64, WineRecord>>,
}

impl MemoryRecordStore {
    pub fn new(records: Vec<WineRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id, r)).collect();
        Self { records: Mutex::new(map) }
    }

    pub fn get(&self, id: i64) -> Option<WineRecord> {
        self.records.lock().unwrap().get(&id).cloned()
    }

    fn sorted_active(&self) -> Vec<WineRecord> {
        let mut records: Vec<WineRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch_block(&self, block: &str) -> Result<Vec<WineRecord>, StorageError> {
        Ok(self
            .sorted_active()
            .into_iter()
            .filter(|r| r.dedupe_block.as_deref() == Some(block))
            .collect())
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<WineRecord>, StorageError> {
        let map = self.records.lock().unwrap();
        let mut records: Vec<WineRecord> =
            ids.iter().filter_map(|id| map.get(id).cloned()).collect();
        records.sort_by_key(|r| r.id);
        records.dedup_by_key(|r| r.id);
        Ok(records)
    }

    async fn distinct_blocks(&self) -> Result<Vec<String>, StorageError> {
        let blocks: BTreeSet<String> = self
            .sorted_active()
            .into_iter()
            .filter_map(|r| r.dedupe_block)
            .collect();
        Ok(blocks.into_iter().collect())
    }

    async fn fetch_active_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<WineRecord>, StorageError> {
        Ok(self.sorted_active().into_iter().skip(offset).take(limit).collect())
    }

    async fn update_normalization(
        &self,
        updates: &[NormalizationUpdate],
    ) -> Result<(), StorageError> {
        let mut map = self.records.lock().unwrap();
        for update in updates {
            if let Some(record) = map.get_mut(&update.id) {
                record.norm_producer = Some(update.norm_producer.clone());
                record.norm_cuvee = Some(update.norm_cuvee.clone());
                record.dedupe_block = Some(update.dedupe_block.clone());
            }
        }
        Ok(())
    }

    async fn mark_merged(&self, ids: &[i64], master_id: i64) -> Result<u64, StorageError> {
        let mut map = self.records.lock().unwrap();
        let mut changed = 0u64;
        for id in ids {
            if *id == master_id {
                continue;
            }
            if let Some(record) = map.get_mut(id) {
                record.is_active = false;
                record.duplicate_of = Some(master_id);
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn stats(&self) -> Result<DedupeStats, StorageError> {
        let map = self.records.lock().unwrap();
        let total = map.len() as u64;
        let active = map.values().filter(|r| r.is_active).count() as u64;
        let normalized = map.values().filter(|r| r.norm_producer.is_some()).count() as u64;
        Ok(DedupeStats { total, active, duplicates: total - active, normalized })
    }
}
