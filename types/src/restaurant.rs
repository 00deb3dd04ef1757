use serde::{Deserialize, Serialize};

/// Store-wide settings. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub phone: String,
    pub delivery_fee: f64,
    pub is_open: bool,
}

impl RestaurantConfig {
    /// A copy of this configuration with only the open flag changed.
    pub fn with_open(&self, is_open: bool) -> Self {
        Self {
            is_open,
            ..self.clone()
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_open { "Open" } else { "Closed" }
    }
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "Restaurant".into(),
            phone: String::new(),
            delivery_fee: 0.0,
            is_open: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(is_open: bool) -> RestaurantConfig {
        RestaurantConfig {
            name: "Bait Al Mandi".into(),
            phone: "0112223333".into(),
            delivery_fee: 10.0,
            is_open,
        }
    }

    #[test]
    fn open_only_changes_the_flag() {
        let before = config(false);
        let after = before.with_open(true);
        assert!(after.is_open);
        assert_eq!(after, RestaurantConfig { is_open: true, ..before });
    }

    #[test]
    fn close_only_changes_the_flag() {
        for start in [true, false] {
            let before = config(start);
            let after = before.with_open(false);
            assert!(!after.is_open);
            assert_eq!(after.name, before.name);
            assert_eq!(after.phone, before.phone);
            assert_eq!(after.delivery_fee, before.delivery_fee);
        }
    }

    #[test]
    fn status_label_follows_flag() {
        assert_eq!(config(true).status_label(), "Open");
        assert_eq!(config(false).status_label(), "Closed");
    }
}
