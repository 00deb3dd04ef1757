use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn label(self) -> &'static str {
        match self {
            OrderType::Delivery => "🛵 Delivery",
            OrderType::Pickup => "🏠 Pickup",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            OrderType::Delivery => "badge badge-delivery",
            OrderType::Pickup => "badge badge-pickup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub location_url: Option<Url>,
}

/// One line of an order. `total_price` is computed by the ordering flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub total_price: f64,
}

/// A placed order, as submitted by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer: CustomerInfo,
    pub order_type: OrderType,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub timestamp: Timestamp,
}

impl OrderPayload {
    /// Label shown in place of the location when the customer gave none.
    pub const NO_LOCATION_LABEL: &'static str = "Pickup from branch";

    pub fn location_label(&self) -> String {
        self.customer
            .location_url
            .as_ref()
            .map(|url| url.to_string())
            .unwrap_or_else(|| Self::NO_LOCATION_LABEL.to_string())
    }
}
