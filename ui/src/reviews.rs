use dioxus::prelude::*;
use types::{ItemWithStats, format};

#[component]
pub fn ReviewsPanel(stats: Vec<ItemWithStats>) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Ratings by item" }
            }
            if stats.is_empty() {
                p { class: "text-muted", "No menu items" }
            } else {
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Item" }
                                th { "Average" }
                                th { "Reviews" }
                            }
                        }
                        tbody {
                            for entry in stats.iter() {
                                tr { key: "{entry.item.id}",
                                    td { "{entry.item.name}" }
                                    td {
                                        span { class: "stars", {format::stars(entry.average_rating)} }
                                        " "
                                        {format::rating(entry.average_rating)}
                                    }
                                    td { "{entry.review_count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
