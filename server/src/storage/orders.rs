use anyhow::Context;
use types::{Error, OrderPayload, Result};

use super::{ORDERS, SETTINGS, Storage, append, settings::stored_config};

impl Storage {
    pub fn orders(&self) -> Result<Vec<OrderPayload>> {
        self.read_all(ORDERS)
    }

    /// Record a placed order. Orders are refused while the store is closed.
    ///
    /// The open flag is read in the same write transaction that appends the
    /// order, so a concurrent close either lands first and refuses the order or
    /// lands after it.
    pub fn place_order(&self, order: OrderPayload) -> Result<()> {
        if order.items.is_empty() {
            return Err(Error::invalid("An order needs at least one item."));
        }

        let key = self.write(|txn| {
            let settings = txn.open_table(SETTINGS).context("failed to open settings")?;
            let is_open = stored_config(&settings)?.unwrap_or_default().is_open;
            drop(settings);

            if !is_open {
                return Err(Error::store_closed());
            }

            let mut table = txn.open_table(ORDERS).context("failed to open orders")?;
            append(&mut table, &order)
        });

        let key = match key {
            Ok(key) => key,
            Err(e) => {
                if !e.is_internal() {
                    tracing::warn!(customer = %order.customer.name, error = %e, "rejected order");
                }
                return Err(e);
            }
        };

        tracing::info!(
            order = key,
            customer = %order.customer.name,
            total = order.total,
            "placed order"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::test_support::{config, order, storage};
    use types::ErrorKind;

    #[test]
    fn orders_keep_arrival_order() {
        let storage = storage();
        storage.update_restaurant_config(config(true)).unwrap();
        storage.place_order(order(50.0)).unwrap();
        storage.place_order(order(120.0)).unwrap();

        let totals: Vec<_> = storage.orders().unwrap().iter().map(|o| o.total).collect();
        assert_eq!(totals, [50.0, 120.0]);
    }

    #[test]
    fn closed_store_refuses_orders() {
        let storage = storage();
        storage.update_restaurant_config(config(false)).unwrap();

        let err = storage.place_order(order(50.0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreClosed);
        assert!(storage.orders().unwrap().is_empty());
    }

    #[test]
    fn open_flag_is_read_inside_the_order_transaction() {
        let storage = storage();

        // No stored config yet: the default is open.
        storage.place_order(order(10.0)).unwrap();

        storage.update_restaurant_config(config(true).with_open(false)).unwrap();
        assert!(storage.place_order(order(20.0)).is_err());

        storage.update_restaurant_config(config(true)).unwrap();
        storage.place_order(order(30.0)).unwrap();

        let totals: Vec<_> = storage.orders().unwrap().iter().map(|o| o.total).collect();
        assert_eq!(totals, [10.0, 30.0]);
    }

    #[test]
    fn empty_order_is_refused() {
        let storage = storage();
        let mut empty = order(0.0);
        empty.items.clear();

        let err = storage.place_order(empty).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn keeps_location_url() {
        let storage = storage();
        let mut delivery = order(30.0);
        delivery.customer.location_url =
            Some(url::Url::parse("https://maps.example.com/?q=24.71,46.67").unwrap());
        storage.place_order(delivery.clone()).unwrap();

        assert_eq!(storage.orders().unwrap(), [delivery]);
    }
}
