use dioxus::prelude::*;
use types::{DashboardSnapshot, MenuItem, OrderPayload, RestaurantConfig, Review};

#[post("/api/dashboard")]
pub async fn load_dashboard() -> ServerFnResult<DashboardSnapshot> {
    Ok(server::snapshot()?)
}

#[post("/api/menu/add")]
pub async fn add_menu_item(item: MenuItem) -> ServerFnResult<MenuItem> {
    Ok(server::storage()?.add_menu_item(item)?)
}

#[post("/api/menu/delete")]
pub async fn delete_menu_item(id: String) -> ServerFnResult<()> {
    server::storage()?.delete_menu_item(&id)?;
    Ok(())
}

#[post("/api/menu/price")]
pub async fn update_menu_item_price(id: String, price: f64) -> ServerFnResult<MenuItem> {
    Ok(server::storage()?.update_menu_item_price(&id, price)?)
}

#[post("/api/menu/visibility")]
pub async fn toggle_item_visibility(id: String) -> ServerFnResult<MenuItem> {
    Ok(server::storage()?.toggle_item_visibility(&id)?)
}

#[post("/api/restaurant")]
pub async fn update_restaurant_config(config: RestaurantConfig) -> ServerFnResult<RestaurantConfig> {
    Ok(server::storage()?.update_restaurant_config(config)?)
}

#[post("/api/orders")]
pub async fn place_order(order: OrderPayload) -> ServerFnResult<()> {
    server::storage()?.place_order(order)?;
    Ok(())
}

#[post("/api/reviews")]
pub async fn submit_review(
    item_id: String,
    rating: u8,
    comment: Option<String>,
) -> ServerFnResult<Review> {
    Ok(server::storage()?.submit_review(&item_id, rating, comment)?)
}
