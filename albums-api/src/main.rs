//! albums-api - in-memory album catalog service
//!
//! Serves the album catalog over HTTP. Records live only in memory and start
//! from the four seed albums on every launch.

use std::path::PathBuf;

use albums_common::config::{ConfigFile, ServerConfigResolver};
use albums_api::{build_router, AlbumStore, AppState};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for albums-api
#[derive(Parser, Debug)]
#[command(name = "albums-api")]
#[command(about = "In-memory album catalog HTTP service")]
#[command(version)]
struct Args {
    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(short, long)]
    bind: Option<String>,

    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServerConfigResolver::new()
        .with_bind(args.bind)
        .with_config_path(args.config)
        .with_log_level(args.log_level)
        .resolve()
        .context("Failed to resolve configuration")?;

    // RUST_LOG wins over the configured level when set
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "albums_api={0},albums_common={0},tower_http={0}",
                config.log_level
            )
            .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting album catalog (albums-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Log level: {}", config.log_level);

    match &config.config_file {
        ConfigFile::Loaded(path) => info!("Loaded configuration from {}", path.display()),
        ConfigFile::Missing(path) => {
            warn!("Config file {} not found, using defaults", path.display())
        }
        ConfigFile::NotConfigured => info!("No config file location, using defaults"),
    }
    info!("Bind address: {} (from {})", config.bind_addr, config.bind_source);

    let store = AlbumStore::seeded();
    info!("Album store ready with {} albums", store.len().await);

    let app = build_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("albums-api listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
