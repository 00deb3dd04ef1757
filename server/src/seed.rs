use types::{MenuItem, RestaurantConfig, Result};

use crate::storage::Storage;

/// Fill an empty store with a default configuration and a small menu.
///
/// Does nothing when the store already holds a configuration or menu items.
pub fn seed_demo_data(storage: &Storage) -> Result<bool> {
    if storage.has_restaurant_config()? || !storage.menu_items()?.is_empty() {
        return Ok(false);
    }

    storage.update_restaurant_config(RestaurantConfig {
        name: "Al Sufra".into(),
        phone: "0112223333".into(),
        delivery_fee: 10.0,
        is_open: true,
    })?;

    for item in [
        MenuItem::draft("Chicken Kabsa", 35.0, "Mains"),
        MenuItem::draft("Lamb Mandi", 55.0, "Mains"),
        MenuItem::draft("Falafel Wrap", 12.0, "Sandwiches"),
        MenuItem::draft("Hummus", 10.0, "Sides"),
        MenuItem::draft("Kunafa", 18.0, "Desserts"),
        MenuItem::draft("Mint Tea", 5.0, "Drinks"),
    ] {
        storage.add_menu_item(item)?;
    }

    tracing::info!("seeded demo data");
    Ok(true)
}
