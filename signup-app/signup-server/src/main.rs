use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};

use signup_api::{build_router, AppState};
use signup_core::repositories::UserRepository;
use signup_infrastructure::{create_client, MongoUserRepository};
use signup_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env included)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry
    signup_shared::telemetry::init_telemetry(&config.log)?;

    info!(env = %config.app.env, "{} starting...", config.app.name);

    // Connect to Database
    let client = create_client(&config.database)
        .await
        .context("Failed to build database client")?;
    let user_repo = Arc::new(MongoUserRepository::new(
        client.database(&config.database.name),
        &config.database.users_collection,
    ));

    match user_repo.ping().await {
        Ok(()) => info!("Database connection established."),
        Err(e) => warn!("Database not reachable yet, continuing: {}", e),
    }

    // Create App State and router
    let state = AppState::new(user_repo);
    let app = build_router(state, &config.cors);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Close database connections
    client.shutdown().await;
    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, starting graceful shutdown"),
        _ = terminate => info!("SIGTERM received, starting graceful shutdown"),
    }
}
