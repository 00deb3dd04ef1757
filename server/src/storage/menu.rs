use anyhow::Context;
use types::{Error, MenuItem, Result, menu::is_valid_price};
use uuid::Uuid;

use super::{MENU_ITEMS, Storage, append, find};

impl Storage {
    pub fn menu_items(&self) -> Result<Vec<MenuItem>> {
        self.read_all(MENU_ITEMS)
    }

    /// Store a new item at the end of the menu. Items without an id get a UUIDv7.
    pub fn add_menu_item(&self, mut item: MenuItem) -> Result<MenuItem> {
        if !is_valid_price(item.price) {
            return Err(Error::invalid(format!(
                "'{}' needs a price of zero or more.",
                item.name
            )));
        }
        if !item.has_id() {
            item.id = Uuid::now_v7().to_string();
        }

        self.write(|txn| {
            let mut table = txn.open_table(MENU_ITEMS).context("failed to open menu")?;
            if find::<MenuItem>(&table, |existing| existing.id == item.id)?.is_some() {
                return Err(Error::duplicate_menu_item(&item.id));
            }
            append(&mut table, &item)?;
            Ok(())
        })?;

        tracing::info!(item_id = %item.id, name = %item.name, "added menu item");
        Ok(item)
    }

    pub fn delete_menu_item(&self, id: &str) -> Result<()> {
        self.write(|txn| {
            let mut table = txn.open_table(MENU_ITEMS).context("failed to open menu")?;
            let (key, _) = find::<MenuItem>(&table, |item| item.id == id)?
                .ok_or_else(|| Error::unknown_menu_item(id))?;
            table.remove(key).context("failed to remove menu item")?;
            Ok(())
        })?;

        tracing::info!(item_id = %id, "deleted menu item");
        Ok(())
    }

    pub fn update_menu_item_price(&self, id: &str, price: f64) -> Result<MenuItem> {
        if !is_valid_price(price) {
            tracing::warn!(item_id = %id, price, "rejected invalid price");
            return Err(Error::invalid("Prices must be zero or more."));
        }

        let item = self.modify_menu_item(id, |item| item.price = price)?;
        tracing::info!(item_id = %id, price, "updated menu item price");
        Ok(item)
    }

    pub fn toggle_item_visibility(&self, id: &str) -> Result<MenuItem> {
        let item = self.modify_menu_item(id, |item| item.is_visible = !item.is_visible)?;
        tracing::info!(item_id = %id, visible = item.is_visible, "toggled menu item visibility");
        Ok(item)
    }

    fn modify_menu_item(&self, id: &str, f: impl FnOnce(&mut MenuItem)) -> Result<MenuItem> {
        self.write(|txn| {
            let mut table = txn.open_table(MENU_ITEMS).context("failed to open menu")?;
            let (key, mut item) = find::<MenuItem>(&table, |item| item.id == id)?
                .ok_or_else(|| Error::unknown_menu_item(id))?;
            f(&mut item);
            table
                .insert(key, super::encode(&item)?.as_slice())
                .context("failed to update menu item")?;
            Ok(item)
        })
    }
}
