use serde::{Deserialize, Serialize};

use crate::{MenuItem, OrderPayload, RestaurantConfig, Review};

/// Everything the dashboard shows, fetched in one round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub menu_items: Vec<MenuItem>,
    pub reviews: Vec<Review>,
    pub orders: Vec<OrderPayload>,
    pub restaurant_config: RestaurantConfig,
    /// IANA name of the restaurant's time zone, used to render order times.
    pub time_zone: String,
}
