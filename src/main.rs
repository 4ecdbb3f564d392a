//! todomvc - REST server for the todo command/query API.
//!
//! Configuration comes from `TODOMVC__*` environment variables (and `.env`);
//! see `todomvc::config::AppConfig`.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todomvc::adapters::http::api_router;
use todomvc::adapters::storage::repository_from_config;
use todomvc::application::MessageHandler;
use todomvc::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let repository = repository_from_config(&config.storage);
    tracing::info!(backend = ?config.storage.backend, "Todo repository ready");

    let message_handling = MessageHandler::new(repository).with_source("http");
    let app = api_router(std::sync::Arc::new(message_handling), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("todomvc listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
