use anyhow::Context;
use redb::{ReadableDatabase, ReadableTable};
use types::{RestaurantConfig, Result};

use super::{SETTINGS, Storage, decode, encode};

const RESTAURANT_CONFIG_KEY: &str = "restaurant_config";

/// Decode the configuration from an open settings table, in whichever
/// transaction the caller is running.
pub(super) fn stored_config(
    table: &impl ReadableTable<&'static str, &'static [u8]>,
) -> Result<Option<RestaurantConfig>> {
    match table
        .get(RESTAURANT_CONFIG_KEY)
        .context("failed to read restaurant config")?
    {
        Some(value) => decode(value.value()).map(Some),
        None => Ok(None),
    }
}

impl Storage {
    /// The stored configuration, or the default one if none was ever saved.
    pub fn restaurant_config(&self) -> Result<RestaurantConfig> {
        Ok(self.read_config()?.unwrap_or_default())
    }

    pub fn has_restaurant_config(&self) -> Result<bool> {
        Ok(self.read_config()?.is_some())
    }

    fn read_config(&self) -> Result<Option<RestaurantConfig>> {
        let txn = self
            .db
            .begin_read()
            .context("failed to begin read transaction")?;
        let table = txn.open_table(SETTINGS).context("failed to open settings")?;
        stored_config(&table)
    }

    /// Replace the configuration as a whole.
    pub fn update_restaurant_config(&self, config: RestaurantConfig) -> Result<RestaurantConfig> {
        self.write(|txn| {
            let mut table = txn.open_table(SETTINGS).context("failed to open settings")?;
            table
                .insert(RESTAURANT_CONFIG_KEY, encode(&config)?.as_slice())
                .context("failed to write restaurant config")?;
            Ok(())
        })?;

        tracing::info!(is_open = config.is_open, name = %config.name, "updated restaurant config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::test_support::{config, storage};

    #[test]
    fn replaces_config_wholesale() {
        let storage = storage();
        assert!(!storage.has_restaurant_config().unwrap());

        storage.update_restaurant_config(config(true)).unwrap();
        let closed = config(true).with_open(false);
        storage.update_restaurant_config(closed.clone()).unwrap();

        assert!(storage.has_restaurant_config().unwrap());
        assert_eq!(storage.restaurant_config().unwrap(), closed);
    }
}
