use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use events_api::shell::config::AppConfig;
use events_api::shell::http::router;
use events_api::shell::shutdown::shutdown_signal;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // In-memory store for now, reset to the seed events on every start.
    let event_store = Arc::new(InMemoryEventStore::seeded());
    let app = router(AppState::new(event_store));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Events API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
