use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use investtrack_core::metadata::Metadata;
use investtrack_db::store::{MemoryProjectStore, PgProjectStore, ProjectStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investtrack_api::config::{ConfigError, ServerConfig, StoreBackend};
use investtrack_api::router::build_app_router;
use investtrack_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "investtrack_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Metadata ---
    let metadata = match &config.metadata_path {
        Some(path) => {
            let metadata = Metadata::from_json_file(path).context("Failed to load metadata")?;
            tracing::info!(path = %path.display(), "Loaded metadata override");
            metadata
        }
        None => Metadata::default(),
    };

    // --- Store ---
    let store = open_store(&config).await?;

    // --- App state ---
    let state = AppState::new(store, metadata);

    // --- Router ---
    let app = build_app_router(state, &config)?;

    // --- Start server ---
    let host = config.host.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
        key: "HOST",
        value: config.host.clone(),
        reason: "not an IP address".to_string(),
    })?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Open the configured store. Any failure here aborts startup.
async fn open_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn ProjectStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; records are lost on restart");
            Ok(Arc::new(MemoryProjectStore::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or(ConfigError::Missing("DATABASE_URL"))?;

            let pool =
                investtrack_db::create_pool(database_url, config.database_max_connections)
                    .await
                    .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            investtrack_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            investtrack_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgProjectStore::new(pool)))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
