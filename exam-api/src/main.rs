//! exam-api - Exam results lookup and statistics service
//!
//! Loads the results CSV in the background and serves lookup, band report
//! and leaderboard endpoints plus static files from the working directory.

use anyhow::{Context, Result};
use clap::Parser;
use exam_api::cli::Args;
use exam_api::{build_router, spawn_dataset_load, AppState};
use exam_common::config::{ServiceConfig, TomlConfig};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config file is read before tracing starts so its log level applies;
    // a bad file is reported once the subscriber is up.
    let file_config = args.config.as_deref().map(|path| (path, TomlConfig::load(path)));
    let toml = match &file_config {
        Some((_, Ok(toml))) => toml.clone(),
        _ => TomlConfig::default(),
    };
    let config = ServiceConfig::resolve(args.overrides(), toml);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &config.log_level;
                format!("exam_api={level},exam_common={level},tower_http={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting exam-api v{}", env!("CARGO_PKG_VERSION"));
    if let Some((path, Err(e))) = &file_config {
        warn!("Ignoring config file {}: {}", path.display(), e);
    }
    info!("Data file: {}", config.data_file.display());
    info!("Static directory: {}", config.static_dir.display());

    let addr = config.socket_addr()?;
    let state = AppState::new();
    spawn_dataset_load(state.clone(), config.data_file.clone());

    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server running at http://{}", addr);

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
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
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
