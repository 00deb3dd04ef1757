use serde::{Deserialize, Serialize};

/// A sellable item on the restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub is_visible: bool,
}

impl MenuItem {
    /// A visible item that has not been stored yet. Storage assigns the id.
    pub fn draft(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            price,
            category: category.into(),
            is_visible: true,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Prices must be finite and non-negative.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_visible_without_id() {
        let item = MenuItem::draft("Shawarma", 18.0, "Sandwiches");
        assert!(item.is_visible);
        assert!(!item.has_id());
    }

    #[test]
    fn rejects_negative_and_nan_prices() {
        assert!(is_valid_price(0.0));
        assert!(is_valid_price(12.5));
        assert!(!is_valid_price(-1.0));
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_price(f64::INFINITY));
    }
}
