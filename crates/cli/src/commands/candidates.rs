use std::path::{Path, PathBuf};

use anyhow::Result;

use cellarmatch_service::DuplicateCandidate;
use cellarmatch_storage::TableKind;

use super::open_service;

pub(crate) async fn run(
    database_url: &str,
    table: TableKind,
    threshold: f64,
    limit: usize,
    out_csv: Option<PathBuf>,
) -> Result<()> {
    let service = open_service(database_url, table).await?;

    println!("Finding duplicates in {table} (threshold: {threshold})...");
    let candidates = service.find_candidates(threshold, limit).await?;

    if candidates.is_empty() {
        println!("No duplicates found");
        return Ok(());
    }
    println!("Found {} duplicate pairs", candidates.len());

    if let Some(path) = out_csv {
        write_csv(&path, &candidates)?;
        println!("Saved {} candidates to {}", candidates.len(), path.display());
    }

    println!();
    println!("Sample duplicate pairs (showing first 10):");
    for candidate in candidates.iter().take(10) {
        println!("  score {:.2} [{}]", candidate.score, candidate.block);
        println!("    1. [{}] {}", candidate.record1_id, candidate.record1_name);
        println!("    2. [{}] {}", candidate.record2_id, candidate.record2_name);
        println!();
    }

    println!("To apply these merges, run the `merge` subcommand");
    Ok(())
}

fn write_csv(path: &Path, candidates: &[DuplicateCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for candidate in candidates {
        writer.serialize(candidate)?;
    }
    writer.flush()?;
    Ok(())
}
