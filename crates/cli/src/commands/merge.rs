use std::io::{self, Write};

use anyhow::Result;

use cellarmatch_storage::TableKind;

use super::open_service;

pub(crate) async fn run(
    database_url: &str,
    table: TableKind,
    threshold: f64,
    limit: usize,
    yes: bool,
) -> Result<()> {
    let service = open_service(database_url, table).await?;

    println!("Finding duplicates in {table} (threshold: {threshold})...");
    let candidates = service.find_candidates(threshold, limit).await?;

    if candidates.is_empty() {
        println!("No duplicates found");
        return Ok(());
    }
    println!("Found {} duplicate pairs", candidates.len());

    if !yes {
        let prompt = format!("Apply merges for {} candidate pairs?", candidates.len());
        if !confirm(&prompt)? {
            println!("Merge cancelled");
            return Ok(());
        }
    }

    let summary = service.apply_merges(&candidates).await?;
    println!("Merged {} records across {} clusters", summary.merged, summary.clusters);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} (yes/no): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
