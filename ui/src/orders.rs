use dioxus::prelude::*;
use types::{OrderPayload, format};

#[component]
pub fn OrdersPanel(orders: ReadSignal<Vec<OrderPayload>>, time_zone: String) -> Element {
    rsx! {
        div { class: "orders-grid",
            for (idx, order) in orders.read().iter().enumerate() {
                OrderCard {
                    key: "{idx}",
                    order: order.clone(),
                    time_zone: time_zone.clone(),
                }
            }
            if orders.read().is_empty() {
                p { class: "text-muted", "No orders yet" }
            }
        }
    }
}

#[component]
fn OrderCard(order: OrderPayload, time_zone: String) -> Element {
    let placed_at = format::timestamp(order.timestamp, &time_zone);
    let location = order.location_label();

    rsx! {
        div { class: "card order-card",
            div { class: "order-card-header",
                div {
                    h3 { class: "order-customer", "{order.customer.name}" }
                    span { class: order.order_type.badge_class(), {order.order_type.label()} }
                }
                span { class: "order-time", "{placed_at}" }
            }
            ul { class: "order-lines",
                for (i, line) in order.items.iter().enumerate() {
                    li { key: "{i}", class: "order-line",
                        span { "{line.quantity}x {line.name}" }
                        span { {format::price(line.total_price)} }
                    }
                }
            }
            div { class: "order-contact",
                div { class: "section-header", "Customer details" }
                div { "📱 {order.customer.phone}" }
                div { "📍 {location}" }
                div { class: "order-total",
                    span { "Total:" }
                    span { {format::price(order.total)} }
                }
            }
        }
    }
}
