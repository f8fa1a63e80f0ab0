//! Read-only spaceships catalog HTTP service.
//!
//! # Endpoints
//!
//! - `GET /spaceships` - List every spaceship in the catalog
//! - `GET /spaceships/{id}` - Fetch a single spaceship by id
//!
//! # Configuration
//!
//! - `SPACESHIPS_DATA_PATH` - Path to the spaceships.db file (default: ./spaceships.db)
//! - `SERVICE_PORT` - HTTP port (default: 8000)
//! - `SERVICE_ENABLED` - Feature gate for catalog reads (default: true)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};

use spaceships_lib::{Config, SpaceshipService, SqliteSpaceshipStore};
use spaceships_service::{init_logging, router, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT and RUST_LOG from environment)
    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config);

    // Load configuration from environment
    let config = Config::from_env();

    info!(
        database_path = %config.database_path().display(),
        port = config.port(),
        service_enabled = config.service_enabled(),
        "starting spaceships service"
    );

    // Construct the object graph in dependency order: store, service, state.
    // Any failure here is fatal before the listener starts.
    let store = SqliteSpaceshipStore::open(config.database_path()).map_err(|e| {
        error!(error = %e, path = %config.database_path().display(), "failed to open spaceships database");
        e
    })?;

    let port = config.port();
    let service = SpaceshipService::new(config, Arc::new(store));
    let state = AppState::new(service);

    // Build the router
    let app = router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
