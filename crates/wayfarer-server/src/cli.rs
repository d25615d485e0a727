//! # Command Line Entry
//!
//! Parses flags, resolves configuration, wires logging and the API, then serves
//! HTTP until Ctrl+C or SIGTERM.
//!
//! Flags override every other configuration source. Each flag also reads an
//! environment variable, so `PORT=8080 wayfarer` behaves like `wayfarer --port 8080`:
//!
//! ```text
//! wayfarer --config-dir /etc/wayfarer --port 8080 --lists /var/lib/wayfarer/lists.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{error, info};
use wayfarer::{
    config::{ConfigOverrides, ServerConfig},
    init::initialize,
    store::StorageBackend,
};

use crate::{handlers::SharedApi, logging::init_logging, router::build_router};

#[derive(Parser, Debug)]
#[command(name = "wayfarer", version)]
#[command(about = "Browse travel destinations and curate destination lists over HTTP", long_about = None)]
pub struct Cli {
    /// Directory holding a wayfarer.toml
    #[arg(short, long)]
    pub config_dir: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "WAYFARER_HOST")]
    pub host: Option<String>,

    /// TCP port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// CSV dataset to load at startup
    #[arg(long, env = "WAYFARER_DATASET")]
    pub dataset: Option<PathBuf>,

    /// JSON document holding user lists
    #[arg(long, env = "WAYFARER_LISTS")]
    pub lists: Option<PathBuf>,

    /// Log output: pretty or json
    #[arg(long, env = "WAYFARER_LOG_FORMAT")]
    pub log_format: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            dataset_path: self.dataset.clone(),
            lists_path: self.lists.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;

    let config = ServerConfig::load(&cwd, cli.config_dir.as_deref(), &cli.overrides())
        .context("Failed to load configuration")?;

    init_logging(config.log_format());

    info!("Loading dataset...");
    let api = Arc::new(initialize(&config, &cwd)?);

    serve(api, &config.bind_address()).await
}

pub async fn serve<B: StorageBackend + 'static>(
    api: SharedApi<B>,
    address: &str,
) -> anyhow::Result<()> {
    let app = build_router(api);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => error!("Failed to install Ctrl+C handler: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
