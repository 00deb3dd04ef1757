use dioxus::prelude::*;
use types::{OrderPayload, RestaurantConfig, format, stats::sales_total};

#[component]
pub fn OverviewPanel(
    orders: ReadSignal<Vec<OrderPayload>>,
    restaurant_config: ReadSignal<RestaurantConfig>,
) -> Element {
    let total = sales_total(&orders.read());
    let count = orders.read().len();
    let config = restaurant_config.read();

    rsx! {
        div { class: "dashboard-grid stats-grid",
            div { class: "card stat-card",
                span { class: "stat-label", "Total sales" }
                span { class: "stat-value text-success", {format::price(total)} }
            }
            div { class: "card stat-card",
                span { class: "stat-label", "Orders" }
                span { class: "stat-value", "{count}" }
            }
            div { class: "card stat-card",
                span { class: "stat-label", "Store status" }
                span {
                    class: if config.is_open { "stat-value text-success" } else { "stat-value text-danger" },
                    {config.status_label()}
                }
            }
        }
    }
}
