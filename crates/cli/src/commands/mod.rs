pub(crate) mod candidates;
pub(crate) mod merge;
pub(crate) mod normalize;
pub(crate) mod serve;
pub(crate) mod stats;

use std::sync::Arc;

use anyhow::Result;

use cellarmatch_service::DedupeService;
use cellarmatch_storage::{
    connect, PgRecordStore, RecordStore, ScrapedWines, TableKind, Wines,
};

/// Connect to the database and build the dedupe service for one table.
pub(crate) async fn open_service(database_url: &str, table: TableKind) -> Result<DedupeService> {
    let pool = connect(database_url).await?;
    let store: Arc<dyn RecordStore> = match table {
        TableKind::Wines => Arc::new(PgRecordStore::<Wines>::new(pool)),
        TableKind::ScrapedWines => Arc::new(PgRecordStore::<ScrapedWines>::new(pool)),
    };
    Ok(DedupeService::new(store))
}
