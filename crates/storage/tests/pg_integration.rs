//! Integration tests for PgRecordStore.
//! Run with: DATABASE_URL=... cargo test -p cellarmatch-storage -- --ignored

#![allow(clippy::unwrap_used, reason = "integration test code")]

use cellarmatch_core::{blocking_key, normalize};
use cellarmatch_storage::{
    connect, NormalizationUpdate, PgRecordStore, RecordStore, ScrapedWines,
};
use sqlx::PgPool;

async fn create_store() -> (PgRecordStore<ScrapedWines>, PgPool) {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgRecordStore integration tests");
    let pool = connect(&url).await.expect("failed to connect to PostgreSQL");
    (PgRecordStore::new(pool.clone()), pool)
}

async fn insert_scraped(pool: &PgPool, producer: &str, cuvee: &str, vintage: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO scraped_wines (producer, cuvee, vintage) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(producer)
    .bind(cuvee)
    .bind(vintage)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn normalize_one(store: &PgRecordStore<ScrapedWines>, pool: &PgPool, id: i64) {
    let (producer, cuvee, vintage): (Option<String>, Option<String>, Option<String>) =
        sqlx::query_as("SELECT producer, cuvee, vintage FROM scraped_wines WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap();
    store
        .update_normalization(&[NormalizationUpdate {
            id,
            norm_producer: normalize(producer.as_deref()),
            norm_cuvee: normalize(cuvee.as_deref()),
            dedupe_block: blocking_key(producer.as_deref(), vintage.as_deref()),
        }])
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL (set DATABASE_URL)"]
async fn normalization_round_trip_and_block_fetch() {
    let (store, pool) = create_store().await;

    let id = insert_scraped(&pool, "Château Margaux", "Grand Vin", "2015").await;
    normalize_one(&store, &pool, id).await;

    let records = store.fetch_block("chateau_2015").await.unwrap();
    let record = records.iter().find(|r| r.id == id).expect("record in block");
    assert_eq!(record.norm_producer.as_deref(), Some("chateau margaux"));
    assert_eq!(record.norm_cuvee.as_deref(), Some("grand vin"));
    assert!(record.is_active);

    let blocks = store.distinct_blocks().await.unwrap();
    assert!(blocks.contains(&"chateau_2015".to_owned()));
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL (set DATABASE_URL)"]
async fn mark_merged_flags_everything_but_the_master() {
    let (store, pool) = create_store().await;

    let master = insert_scraped(&pool, "Domaine Leroy", "Musigny", "2019").await;
    let dup1 = insert_scraped(&pool, "Domaine Leroy", "Musigny", "2019").await;
    let dup2 = insert_scraped(&pool, "Leroy", "Musigny", "2019").await;
    let missing = dup2 + 1_000_000;

    let changed = store.mark_merged(&[master, dup1, dup2, missing], master).await.unwrap();
    assert_eq!(changed, 2);

    let records = store.get_by_ids(&[master, dup1, dup2]).await.unwrap();
    for record in &records {
        if record.id == master {
            assert!(record.is_active);
            assert_eq!(record.duplicate_of, None);
        } else {
            assert!(!record.is_active);
            assert_eq!(record.duplicate_of, Some(master));
        }
    }

    // Merged-away records leave the active scan entirely.
    let page: Vec<i64> = store
        .fetch_active_page(0, 10_000)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert!(page.contains(&master));
    assert!(!page.contains(&dup1));
}

#[tokio::test]
#[ignore = "requires a live PostgreSQL (set DATABASE_URL)"]
async fn stats_count_active_and_merged() {
    let (store, pool) = create_store().await;

    let a = insert_scraped(&pool, "Bollinger", "Special Cuvée", "NV").await;
    let b = insert_scraped(&pool, "Bollinger", "Special Cuvee", "NV").await;
    normalize_one(&store, &pool, a).await;
    normalize_one(&store, &pool, b).await;
    store.mark_merged(&[a, b], a).await.unwrap();

    let stats = store.stats().await.unwrap();
    assert!(stats.total >= 2);
    assert!(stats.duplicates >= 1);
    assert!(stats.normalized >= 2);
    assert_eq!(stats.total, stats.active + stats.duplicates);
}
