use anyhow::Result;

use cellarmatch_storage::TableKind;

use super::open_service;

pub(crate) async fn run(database_url: &str, table: TableKind) -> Result<()> {
    let service = open_service(database_url, table).await?;
    let stats = service.stats().await?;

    let report = serde_json::json!({
        "table": table.as_str(),
        "total_records": stats.total,
        "active_records": stats.active,
        "duplicate_records": stats.duplicates,
        "normalized_records": stats.normalized,
        "normalization_percentage": stats.normalization_percentage(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
