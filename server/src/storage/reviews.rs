use anyhow::Context;
use types::{Error, MenuItem, Result, Review, review::is_valid_rating};
use uuid::Uuid;

use super::{MENU_ITEMS, REVIEWS, Storage, append, find};

impl Storage {
    pub fn reviews(&self) -> Result<Vec<Review>> {
        self.read_all(REVIEWS)
    }

    /// Record a customer's rating of a menu item.
    pub fn submit_review(&self, item_id: &str, rating: u8, comment: Option<String>) -> Result<Review> {
        if !is_valid_rating(rating) {
            return Err(Error::invalid(format!(
                "Ratings go from 1 to 5, got {rating}."
            )));
        }

        let review = Review {
            id: Uuid::now_v7().to_string(),
            item_id: item_id.to_string(),
            rating,
            comment: comment.filter(|c| !c.trim().is_empty()),
        };

        self.write(|txn| {
            let menu = txn.open_table(MENU_ITEMS).context("failed to open menu")?;
            if find::<MenuItem>(&menu, |item| item.id == item_id)?.is_none() {
                return Err(Error::unknown_menu_item(item_id));
            }
            drop(menu);

            let mut table = txn.open_table(REVIEWS).context("failed to open reviews")?;
            append(&mut table, &review)?;
            Ok(())
        })?;

        tracing::info!(item_id = %item_id, rating, "recorded review");
        Ok(review)
    }
}
