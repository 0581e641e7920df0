use std::sync::Arc;

use anyhow::Result;
use bankapi_http::{AppState, create_router};
use bankapi_storage::Database;

pub(crate) async fn run(db: Database, port: u16, host: &str) -> Result<()> {
    let state = Arc::new(AppState::new(db));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
