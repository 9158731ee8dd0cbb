use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use activity_roster::adapters::http::{app_router, apply_server_layers, AppState};
use activity_roster::adapters::{
    InMemoryActivityRepository, InMemorySessionStore, JsonFileCredentialStore,
};
use activity_roster::config::AppConfig;
use activity_roster::ports::CredentialStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let teachers = JsonFileCredentialStore::new(&config.auth.teachers_file)
        .load()
        .await?;
    let activities = InMemoryActivityRepository::seeded();
    tracing::info!(
        activities = activities.activity_count().await,
        teachers = teachers.len(),
        "Roster state initialized"
    );

    let state = AppState::new(
        Arc::new(activities),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(teachers),
    );
    let app = apply_server_layers(app_router(state, &config.static_files.dir), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
