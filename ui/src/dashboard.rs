use dioxus::prelude::*;
use types::{
    MenuItem, OrderPayload, RestaurantConfig, Review,
    dashboard::{ADMIN_PASSCODE, AdminGate, Tab, TabSelector},
    format::DEFAULT_TIME_ZONE,
    stats::item_stats,
};

use crate::{admin::AdminPanel, orders::OrdersPanel, overview::OverviewPanel, reviews::ReviewsPanel};

#[component]
pub fn Dashboard(
    menu_items: ReadSignal<Vec<MenuItem>>,
    delete_menu_item: EventHandler<String>,
    add_menu_item: EventHandler<MenuItem>,
    update_menu_item_price: EventHandler<(String, f64)>,
    toggle_item_visibility: EventHandler<String>,
    restaurant_config: ReadSignal<RestaurantConfig>,
    update_restaurant_config: EventHandler<RestaurantConfig>,
    reviews: ReadSignal<Vec<Review>>,
    orders: ReadSignal<Vec<OrderPayload>>,
    on_close: EventHandler<()>,
    #[props(default = ADMIN_PASSCODE.to_string())] admin_passcode: String,
    #[props(default = DEFAULT_TIME_ZONE.to_string())] time_zone: String,
) -> Element {
    let mut tabs = use_signal(TabSelector::default);
    // Owned here so unlocking outlives the admin panel being unmounted.
    let gate = use_signal(AdminGate::default);
    let passcode = use_signal(String::new);

    let items_with_stats = use_memo(move || item_stats(&menu_items.read(), &reviews.read()));

    let active = tabs.read().active();
    let order_count = orders.read().len();

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                div { class: "dashboard-brand",
                    div { class: "dashboard-logo", "🛠️" }
                    h1 { class: "page-title", "Dashboard" }
                }

                nav { class: "tab-bar",
                    for tab in Tab::ALL {
                        button {
                            key: "{tab:?}",
                            class: if tab == active { "tab active" } else { "tab" },
                            onclick: move |_| tabs.write().select(tab),
                            {tab_label(tab, order_count)}
                        }
                    }
                }

                button {
                    class: "dashboard-close",
                    title: "Close dashboard",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            div { class: "dashboard-body",
                {match active {
                    Tab::Overview => rsx! {
                        OverviewPanel { orders, restaurant_config }
                    },
                    Tab::Orders => rsx! {
                        OrdersPanel { orders, time_zone: time_zone.clone() }
                    },
                    Tab::Reviews => rsx! {
                        ReviewsPanel { stats: items_with_stats() }
                    },
                    Tab::Admin => rsx! {
                        AdminPanel {
                            gate,
                            passcode,
                            admin_passcode: admin_passcode.clone(),
                            restaurant_config,
                            update_restaurant_config,
                            menu_items,
                            add_menu_item,
                            delete_menu_item,
                            update_menu_item_price,
                            toggle_item_visibility,
                        }
                    },
                }}
            }
        }
    }
}

fn tab_label(tab: Tab, order_count: usize) -> String {
    match tab {
        Tab::Orders => format!("{} ({})", tab.label(), order_count),
        other => other.label().to_string(),
    }
}
