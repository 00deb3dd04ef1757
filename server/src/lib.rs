mod config;
mod seed;
pub mod storage;

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use types::{DashboardSnapshot, Result, err};

pub use crate::config::Config;
pub use crate::storage::{Storage, storage};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the global tracing subscriber. Honours `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Load configuration and open the database. Must run before any server function.
///
/// Later calls are no-ops, so a dev server restarting its router keeps the open database.
pub fn init() -> Result<()> {
    if CONFIG.get().is_some() {
        return Ok(());
    }

    let config = Config::load()?;
    let path = config.database_path();
    tracing::info!(path = %path.display(), "opening database");

    let storage = Storage::open(&path)?;
    if config.seed_demo_data {
        seed::seed_demo_data(&storage)?;
    }

    storage::install(storage)?;
    CONFIG
        .set(config)
        .map_err(|_| err!("configuration is already loaded"))?;
    Ok(())
}

pub fn config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| err!("configuration has not been loaded").into())
}

/// Everything the dashboard needs, rendered in the configured time zone.
pub fn snapshot() -> Result<DashboardSnapshot> {
    storage()?.snapshot(&config()?.time_zone)
}
