//! Scholarship Dashboard Server
//!
//! Serves the dashboard REST API. Applications, renewals and the renewal
//! window are stored in PostgreSQL when `DATABASE_URL` is set and in memory
//! otherwise.

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use scholarship_server::auth::TokenService;
use scholarship_server::config::Config;
use scholarship_server::db::Database;
use scholarship_server::routes;
use scholarship_server::seed::SeedData;
use scholarship_server::state::{AppState, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_line_number(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting scholarship server");

    let backend = match &config.database_url {
        Some(url) => {
            let masked = config.database_url_masked().unwrap_or_default();
            tracing::info!(url = %masked, "Connecting to database...");
            let database = Database::connect(url, config.db_max_connections).await?;
            database.migrate().await?;
            StorageBackend::Postgres(database)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, data will not survive a restart");
            StorageBackend::Memory
        }
    };

    let seed = if config.seed_demo_data {
        SeedData::demo(config.bcrypt_cost).context("Failed to hash demo passwords")?
    } else {
        SeedData::default()
    };

    let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_seconds);
    let app_state = AppState::new(tokens, seed, backend, config.bcrypt_cost);

    let app = routes::create_router(app_state).layer(configure_cors(&config));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn configure_cors(config: &Config) -> CorsLayer {
    let Some(allowed_origins) = &config.cors_allowed_origins else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
