use std::sync::Arc;

use anyhow::Result;

use cellarmatch_http::{create_router, AppState};
use cellarmatch_storage::{connect, PgRecordStore, ScrapedWines, Wines};

pub(crate) async fn run(database_url: &str, port: u16, host: String) -> Result<()> {
    let pool = connect(database_url).await?;
    let wines = Arc::new(PgRecordStore::<Wines>::new(pool.clone()));
    let scraped_wines = Arc::new(PgRecordStore::<ScrapedWines>::new(pool));
    let state = Arc::new(AppState::new(wines, scraped_wines));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
