use std::path::PathBuf;

use anyhow::Result;
use config::{ConfigBuilder, Environment, File, builder::DefaultState};
use jiff::tz::TimeZone;
use serde::Deserialize;
use types::format::DEFAULT_TIME_ZONE;

/// Optional config file, looked up relative to the working directory.
const CONFIG_FILE: &str = "restaurant";
const ENV_PREFIX: &str = "RESTAURANT";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the database file.
    pub data_dir: PathBuf,
    /// Insert a default configuration and a sample menu into an empty database.
    pub seed_demo_data: bool,
    /// IANA time zone order timestamps are shown in.
    pub time_zone: String,
}

impl Config {
    /// Defaults, then `restaurant.toml` if present, then `RESTAURANT_*` variables.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder
            .set_default("data_dir", "data")?
            .set_default("seed_demo_data", true)?
            .set_default("time_zone", DEFAULT_TIME_ZONE)?
            .build()?
            .try_deserialize()?;

        if TimeZone::get(&config.time_zone).is_err() {
            tracing::warn!(
                time_zone = %config.time_zone,
                "unknown time zone, order times will be shown in UTC"
            );
        }

        Ok(config)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("restaurant.redb")
    }
}
