//! Signcast server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use signcast_core::config::{AppConfig, ContentConfig, DirectoryConfig};
use signcast_directory::{MemoryDirectory, SystemDirectory};
use signcast_server::content::{ContentSource, FilesystemContent};
use signcast_server::pickups::{PickupSource, UnconfiguredPickups};
use signcast_server::{AppState, create_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Signcast - A differential content sync server for signage terminals
#[derive(Parser, Debug)]
#[command(name = "signcastd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "SIGNCAST_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Startup banner
    tracing::info!("Signcast v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file is optional, env vars can provide/override everything)
    let config_path = std::path::Path::new(&args.config);
    let mut figment = Figment::new();
    let has_config_file = config_path.exists();

    if has_config_file {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("SIGNCAST_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    // Initialize the system directory
    let directory: Arc<dyn SystemDirectory> = match &config.directory {
        DirectoryConfig::File { path } => {
            let directory = MemoryDirectory::from_json_file(path)
                .await
                .with_context(|| format!("failed to load system directory: {}", path.display()))?;
            tracing::info!(systems = directory.len(), "System directory loaded");
            Arc::new(directory)
        }
    };

    // Initialize the content source
    let content: Arc<dyn ContentSource> = match &config.content {
        ContentConfig::Filesystem { path } => {
            tracing::info!(root = %path.display(), "Filesystem content source initialized");
            Arc::new(FilesystemContent::new(path))
        }
    };

    if config.update.is_none() {
        tracing::warn!("No client update path configured, /v1/update will report an error");
    }

    // No municipal pickup client ships with the server; the seam stays open
    // until one is wired in.
    let pickups: Arc<dyn PickupSource> = Arc::new(UnconfiguredPickups);

    // Create application state
    let state = AppState::new(config.clone(), directory, content, pickups);

    // Create router
    let app = create_router(state);

    // Parse bind address
    let addr: SocketAddr = config.server.bind.parse().context("invalid bind address")?;

    tracing::info!("Listening on {}", addr);

    // Start server with ConnectInfo for source-address resolution
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
