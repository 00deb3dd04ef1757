//! Persistent store for the restaurant's data.
//!
//! Every collection is a redb table keyed by an insertion sequence, so reads
//! return records in the order they were added. Values are postcard-encoded.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use redb::{
    Database, ReadableDatabase, ReadableTable, Table, TableDefinition, WriteTransaction,
};
use serde::{Serialize, de::DeserializeOwned};
use types::{DashboardSnapshot, Result, err};

mod menu;
mod orders;
mod reviews;
mod settings;

type SeqTable = TableDefinition<'static, u64, &'static [u8]>;

const MENU_ITEMS: SeqTable = TableDefinition::new("menu_items");
const REVIEWS: SeqTable = TableDefinition::new("reviews");
const ORDERS: SeqTable = TableDefinition::new("orders");
const SETTINGS: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");

static STORAGE: OnceLock<Storage> = OnceLock::new();

/// The process-wide store, available once [`crate::init`] has run.
pub fn storage() -> Result<&'static Storage> {
    STORAGE
        .get()
        .ok_or_else(|| err!("storage has not been initialised").into())
}

pub(crate) fn install(storage: Storage) -> Result<()> {
    STORAGE
        .set(storage)
        .map_err(|_| err!("storage is already initialised").into())
}

pub struct Storage {
    db: Database,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let db = Database::create(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        Self::with_database(db)
    }

    /// A throwaway store that lives only as long as the returned value.
    #[cfg(test)]
    pub(crate) fn in_memory() -> Result<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .context("failed to create in-memory database")?;
        Self::with_database(db)
    }

    fn with_database(db: Database) -> Result<Self> {
        let storage = Self { db };

        // Create every table up front so read transactions never miss one.
        storage.write(|txn| {
            for table in [MENU_ITEMS, REVIEWS, ORDERS] {
                txn.open_table(table).context("failed to create table")?;
            }
            txn.open_table(SETTINGS).context("failed to create settings table")?;
            Ok(())
        })?;

        Ok(storage)
    }

    pub fn snapshot(&self, time_zone: &str) -> Result<DashboardSnapshot> {
        Ok(DashboardSnapshot {
            menu_items: self.menu_items()?,
            reviews: self.reviews()?,
            orders: self.orders()?,
            restaurant_config: self.restaurant_config()?,
            time_zone: time_zone.to_string(),
        })
    }

    /// Run `f` in one write transaction, committing only if it succeeds.
    fn write<T>(&self, f: impl FnOnce(&WriteTransaction) -> Result<T>) -> Result<T> {
        let txn = self
            .db
            .begin_write()
            .context("failed to begin write transaction")?;
        let value = f(&txn)?;
        txn.commit().context("failed to commit transaction")?;
        Ok(value)
    }

    fn read_all<T: DeserializeOwned>(&self, definition: SeqTable) -> Result<Vec<T>> {
        let txn = self
            .db
            .begin_read()
            .context("failed to begin read transaction")?;
        let table = txn
            .open_table(definition)
            .context("failed to open table")?;

        let mut records = Vec::new();
        for entry in table.iter().context("failed to iterate table")? {
            let (_, value) = entry.context("failed to read entry")?;
            records.push(decode(value.value())?);
        }
        Ok(records)
    }
}

/// Append `value` after the current last record and return its key.
fn append<T: Serialize>(table: &mut Table<'_, u64, &'static [u8]>, value: &T) -> Result<u64> {
    let next = table
        .last()
        .context("failed to read last key")?
        .map(|(key, _)| key.value() + 1)
        .unwrap_or(0);
    table
        .insert(next, encode(value)?.as_slice())
        .context("failed to insert record")?;
    Ok(next)
}

/// Find the first record matching `pred`, returning its key alongside it.
fn find<T: DeserializeOwned>(
    table: &Table<'_, u64, &'static [u8]>,
    mut pred: impl FnMut(&T) -> bool,
) -> Result<Option<(u64, T)>> {
    for entry in table.iter().context("failed to iterate table")? {
        let (key, value) = entry.context("failed to read entry")?;
        let record: T = decode(value.value())?;
        if pred(&record) {
            return Ok(Some((key.value(), record)));
        }
    }
    Ok(None)
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(postcard::to_allocvec(value).context("failed to encode record")?)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(postcard::from_bytes(bytes).context("failed to decode record")?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use jiff::Timestamp;
    use types::{CustomerInfo, OrderLine, OrderPayload, OrderType, RestaurantConfig};

    use super::Storage;

    pub fn storage() -> Storage {
        Storage::in_memory().unwrap()
    }

    pub fn config(is_open: bool) -> RestaurantConfig {
        RestaurantConfig {
            name: "Al Sufra".into(),
            phone: "0112223333".into(),
            delivery_fee: 10.0,
            is_open,
        }
    }

    pub fn order(total: f64) -> OrderPayload {
        OrderPayload {
            customer: CustomerInfo {
                name: "Layla".into(),
                phone: "0551234567".into(),
                location_url: None,
            },
            order_type: OrderType::Pickup,
            items: vec![OrderLine {
                name: "Kabsa".into(),
                quantity: 1,
                total_price: total,
            }],
            total,
            timestamp: Timestamp::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use types::{MenuItem, RestaurantConfig};

    #[test]
    fn fresh_store_is_empty() {
        let storage = storage();
        let snapshot = storage.snapshot("UTC").unwrap();

        assert!(snapshot.menu_items.is_empty());
        assert!(snapshot.reviews.is_empty());
        assert!(snapshot.orders.is_empty());
        assert_eq!(snapshot.restaurant_config, RestaurantConfig::default());
        assert_eq!(snapshot.time_zone, "UTC");
    }

    #[test]
    fn snapshot_collects_every_collection() {
        let storage = storage();
        storage.update_restaurant_config(config(true)).unwrap();
        let item = storage
            .add_menu_item(MenuItem::draft("Kabsa", 35.0, "Mains"))
            .unwrap();
        storage.submit_review(&item.id, 5, None).unwrap();
        storage.place_order(order(35.0)).unwrap();

        let snapshot = storage.snapshot("Asia/Riyadh").unwrap();
        assert_eq!(snapshot.menu_items, [item]);
        assert_eq!(snapshot.reviews.len(), 1);
        assert_eq!(snapshot.orders, [order(35.0)]);
        assert_eq!(snapshot.restaurant_config, config(true));
    }
}
