//! Aggregates the dashboard derives from its inputs at render time.

use serde::{Deserialize, Serialize};

use crate::{MenuItem, OrderPayload, Review};

/// A menu item together with the ratings it has received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithStats {
    pub item: MenuItem,
    /// Mean rating, `0.0` when the item has no reviews.
    pub average_rating: f64,
    pub review_count: usize,
}

/// Pair every menu item with the average and count of its reviews, keeping menu order.
pub fn item_stats(menu_items: &[MenuItem], reviews: &[Review]) -> Vec<ItemWithStats> {
    menu_items
        .iter()
        .map(|item| {
            let (sum, count) = reviews
                .iter()
                .filter(|r| r.item_id == item.id)
                .fold((0u64, 0usize), |(sum, count), r| {
                    (sum + u64::from(r.rating), count + 1)
                });
            let average_rating = if count > 0 {
                sum as f64 / count as f64
            } else {
                0.0
            };

            ItemWithStats {
                item: item.clone(),
                average_rating,
                review_count: count,
            }
        })
        .collect()
}

/// Sum of every order's total. An empty slice sums to zero.
pub fn sales_total(orders: &[OrderPayload]) -> f64 {
    orders.iter().map(|o| o.total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CustomerInfo, OrderType};
    use jiff::Timestamp;

    fn item(id: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: format!("item {id}"),
            price: 10.0,
            category: "Mains".into(),
            is_visible: true,
        }
    }

    fn review(item_id: &str, rating: u8) -> Review {
        Review {
            id: format!("{item_id}-{rating}"),
            item_id: item_id.into(),
            rating,
            comment: None,
        }
    }

    fn order(total: f64) -> OrderPayload {
        OrderPayload {
            customer: CustomerInfo {
                name: "Omar".into(),
                phone: "0550000000".into(),
                location_url: None,
            },
            order_type: OrderType::Delivery,
            items: vec![],
            total,
            timestamp: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn item_without_reviews_has_zero_average() {
        let stats = item_stats(&[item("a")], &[review("b", 5)]);
        assert_eq!(stats[0].average_rating, 0.0);
        assert_eq!(stats[0].review_count, 0);
    }

    #[test]
    fn average_is_mean_of_matching_reviews() {
        let reviews = [review("a", 4), review("b", 1), review("a", 2)];
        let stats = item_stats(&[item("a"), item("b")], &reviews);

        assert_eq!(stats[0].average_rating, 3.0);
        assert_eq!(stats[0].review_count, 2);
        assert_eq!(stats[1].average_rating, 1.0);
        assert_eq!(stats[1].review_count, 1);
    }

    #[test]
    fn keeps_menu_order() {
        let stats = item_stats(&[item("z"), item("a"), item("m")], &[]);
        let ids: Vec<_> = stats.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn fractional_average() {
        let reviews = [review("a", 5), review("a", 4), review("a", 4)];
        let stats = item_stats(&[item("a")], &reviews);
        assert!((stats[0].average_rating - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn ratings_above_five_are_averaged_as_given() {
        let reviews: Vec<_> = (0..1000).map(|_| review("a", u8::MAX)).collect();
        let stats = item_stats(&[item("a")], &reviews);
        assert_eq!(stats[0].average_rating, 255.0);
        assert_eq!(stats[0].review_count, 1000);
    }

    #[test]
    fn sales_total_sums_orders() {
        assert_eq!(sales_total(&[order(50.0), order(120.0)]), 170.0);
    }

    #[test]
    fn sales_total_of_nothing_is_zero() {
        assert_eq!(sales_total(&[]), 0.0);
    }
}
