use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cellarmatch_core::{
    DEFAULT_NORMALIZE_BATCH_SIZE, DEFAULT_SIMILARITY_THRESHOLD, MAX_CANDIDATE_LIMIT,
};
use cellarmatch_storage::TableKind;

mod commands;

#[derive(Parser)]
#[command(name = "cellarmatch")]
#[command(about = "Wine-catalog deduplication tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the administrative HTTP server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Recompute normalization fields and blocking keys
    Normalize {
        #[arg(short, long, default_value = "wines")]
        table: TableKind,
        #[arg(short, long, default_value_t = DEFAULT_NORMALIZE_BATCH_SIZE)]
        batch_size: usize,
    },
    /// Preview duplicate candidates (no changes)
    Candidates {
        #[arg(short, long, default_value = "wines")]
        table: TableKind,
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f64,
        #[arg(short, long, default_value_t = MAX_CANDIDATE_LIMIT)]
        limit: usize,
        /// Write the full candidate list to a CSV file for review
        #[arg(long)]
        out_csv: Option<PathBuf>,
    },
    /// Cluster duplicate candidates and apply merges
    Merge {
        #[arg(short, long, default_value = "wines")]
        table: TableKind,
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f64,
        #[arg(short, long, default_value_t = MAX_CANDIDATE_LIMIT)]
        limit: usize,
        /// Skip the interactive confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print dedupe statistics as JSON
    Stats {
        #[arg(short, long, default_value = "wines")]
        table: TableKind,
    },
}

fn database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let url = database_url()?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&url, port, host).await,
        Commands::Normalize { table, batch_size } => {
            commands::normalize::run(&url, table, batch_size).await
        }
        Commands::Candidates { table, threshold, limit, out_csv } => {
            commands::candidates::run(&url, table, threshold, limit, out_csv).await
        }
        Commands::Merge { table, threshold, limit, yes } => {
            commands::merge::run(&url, table, threshold, limit, yes).await
        }
        Commands::Stats { table } => commands::stats::run(&url, table).await,
    }
}
