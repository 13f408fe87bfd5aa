use anyhow::Result;

use cellarmatch_storage::TableKind;

use super::open_service;

pub(crate) async fn run(database_url: &str, table: TableKind, batch_size: usize) -> Result<()> {
    let service = open_service(database_url, table).await?;

    println!("Normalizing {table}...");
    let processed = service.normalize_all(batch_size).await?;
    println!("Normalization complete: {processed} records processed");
    Ok(())
}
