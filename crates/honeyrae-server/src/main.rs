//! Dispatch server binary for the Honey Rae service business.
//!
//! Loads configuration, initializes logging, builds the in-memory entity
//! store, and serves the ticket API until shut down.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `honeyrae-config.yaml` (or `HONEYRAE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the entity store, seeded unless disabled
//! 4. Serve the HTTP API until `Ctrl-C` / `SIGTERM`

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use honeyrae_api::{AppState, ServerConfig};
use honeyrae_core::config::LoggingSection;
use honeyrae_core::seed::seed_store;
use honeyrae_core::{Clock, EntityStore, ServiceConfig, SystemClock};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ServiceError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "honeyrae-config.yaml";

/// Application entry point for the dispatch server.
///
/// # Errors
///
/// Returns an error if the configuration is malformed or the server
/// cannot bind.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Load configuration. Logging is not up yet, so remember whether
    //    defaults were used and report it afterwards.
    let config_path = config_path();
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("honeyrae-server starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        inactive_customer_days = config.reports.inactive_customer_days,
        employee_of_month_days = config.reports.employee_of_month_days,
        "Effective configuration"
    );

    // 3. Build the entity store.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = if config.seed.enabled {
        seed_store(clock.now())
    } else {
        EntityStore::new()
    };
    info!(
        customers = store.customers().len(),
        employees = store.employees().len(),
        tickets = store.tickets().len(),
        "Entity store ready"
    );

    // 4. Serve.
    let state = Arc::new(AppState::with_clock(store, clock).with_windows(config.reports));
    let server_config = ServerConfig::from(&config.server);
    honeyrae_api::start_server(&server_config, state).await?;

    info!("honeyrae-server exited cleanly");
    Ok(())
}

/// Resolve the configuration path from `HONEYRAE_CONFIG` or the default.
fn config_path() -> PathBuf {
    std::env::var_os("HONEYRAE_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration from `path`, falling back to defaults when absent.
///
/// Returns the config and whether it came from the file.
fn load_config(path: &Path) -> Result<(ServiceConfig, bool), ServiceError> {
    if path.exists() {
        Ok((ServiceConfig::from_file(path)?, true))
    } else {
        let mut config = ServiceConfig::default();
        config.server.apply_env_overrides()?;
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingSection) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
