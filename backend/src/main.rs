use std::net::SocketAddr;

use tracing::{info, Level};

use dispute_dashboard_backend::{create_router, initialize_backend, ReportConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = ReportConfig::default();
    info!("Loading transaction sheet from {:?}", config.ledger_path);

    let state = initialize_backend(config)?;

    // An unreadable sheet is the one fatal startup condition
    state.report_service.snapshot()?;

    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
