use crate::{Route, use_error};
use dioxus::prelude::*;
use types::{MenuItem, OrderPayload, RestaurantConfig, Review, format::DEFAULT_TIME_ZONE};
use ui::Dashboard;

/// Where the host page is in fetching the dashboard snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    fn after_fetch<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() { Self::Ready } else { Self::Failed }
    }

    /// Only a loaded snapshot may reach the dashboard. Its open/close actions
    /// replace the stored configuration, so placeholder data must never be shown.
    fn shows_dashboard(self) -> bool {
        self == Self::Ready
    }
}

/// Hosts the dashboard: owns the restaurant's data and carries its intents to the server.
#[component]
pub fn AdminDashboard() -> Element {
    let mut menu_items = use_signal(Vec::<MenuItem>::new);
    let mut reviews = use_signal(Vec::<Review>::new);
    let mut orders = use_signal(Vec::<OrderPayload>::new);
    let mut restaurant_config = use_signal(RestaurantConfig::default);
    let mut time_zone = use_signal(|| DEFAULT_TIME_ZONE.to_string());
    let mut load_state = use_signal(|| LoadState::Loading);
    let mut attempt = use_signal(|| 0u32);
    let mut error_state = use_error();

    // Fetch everything on mount, and again whenever a retry bumps `attempt`
    use_effect(move || {
        attempt();
        spawn(async move {
            load_state.set(LoadState::Loading);
            let result = api::load_dashboard().await;
            let next = LoadState::after_fetch(&result);
            match result {
                Ok(snapshot) => {
                    menu_items.set(snapshot.menu_items);
                    reviews.set(snapshot.reviews);
                    orders.set(snapshot.orders);
                    restaurant_config.set(snapshot.restaurant_config);
                    time_zone.set(snapshot.time_zone);
                }
                Err(e) => error_state.set_server_error(&e),
            }
            load_state.set(next);
        });
    });

    let delete_menu_item = move |id: String| {
        spawn(async move {
            match api::delete_menu_item(id.clone()).await {
                Ok(()) => menu_items.write().retain(|item| item.id != id),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    let add_menu_item = move |item: MenuItem| {
        spawn(async move {
            match api::add_menu_item(item).await {
                Ok(stored) => menu_items.write().push(stored),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    let update_menu_item_price = move |(id, price): (String, f64)| {
        spawn(async move {
            match api::update_menu_item_price(id, price).await {
                Ok(updated) => replace_item(&mut menu_items.write(), updated),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    let toggle_item_visibility = move |id: String| {
        spawn(async move {
            match api::toggle_item_visibility(id).await {
                Ok(updated) => replace_item(&mut menu_items.write(), updated),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    let update_restaurant_config = move |config: RestaurantConfig| {
        spawn(async move {
            match api::update_restaurant_config(config).await {
                Ok(saved) => restaurant_config.set(saved),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    let state = *load_state.read();
    if !state.shows_dashboard() {
        return rsx! {
            if state == LoadState::Loading {
                div { class: "loading", "Loading dashboard..." }
            } else {
                div { class: "load-failed",
                    p { "The dashboard could not be loaded." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            error_state.clear();
                            *attempt.write() += 1;
                        },
                        "Try again"
                    }
                    Link { to: Route::Home {}, class: "btn btn-link", "Back" }
                }
            }
        };
    }

    rsx! {
        Dashboard {
            menu_items,
            delete_menu_item,
            add_menu_item,
            update_menu_item_price,
            toggle_item_visibility,
            restaurant_config,
            update_restaurant_config,
            reviews,
            orders,
            on_close: move |_| {
                navigator().push(Route::Home {});
            },
            time_zone: time_zone(),
        }
    }
}

/// Swap in the server's copy of an item, leaving its position unchanged.
fn replace_item(items: &mut [MenuItem], updated: MenuItem) {
    if let Some(slot) = items.iter_mut().find(|item| item.id == updated.id) {
        *slot = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadState, replace_item};
    use types::MenuItem;

    #[test]
    fn failed_load_keeps_the_dashboard_hidden() {
        let failed: Result<(), &str> = Err("connection refused");
        let state = LoadState::after_fetch(&failed);

        assert_eq!(state, LoadState::Failed);
        assert!(!state.shows_dashboard());
    }

    #[test]
    fn dashboard_waits_for_the_snapshot() {
        assert!(!LoadState::Loading.shows_dashboard());
        assert!(LoadState::after_fetch(&Ok::<_, ()>(())).shows_dashboard());
    }

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            ..MenuItem::draft(id, price, "Mains")
        }
    }

    #[test]
    fn replaces_in_place() {
        let mut items = vec![item("a", 1.0), item("b", 2.0), item("c", 3.0)];
        replace_item(&mut items, item("b", 9.0));

        let prices: Vec<_> = items.iter().map(|i| i.price).collect();
        assert_eq!(prices, [1.0, 9.0, 3.0]);
    }

    #[test]
    fn ignores_unknown_item() {
        let mut items = vec![item("a", 1.0)];
        replace_item(&mut items, item("z", 5.0));
        assert_eq!(items, [item("a", 1.0)]);
    }
}
