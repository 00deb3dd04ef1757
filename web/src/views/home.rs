use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Restaurant" }
                p { class: "page-subtitle", "Orders, ratings and store settings in one place." }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::AdminDashboard {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Open Dashboard" }
                    p { class: "dashboard-card-desc",
                        "See sales and incoming orders, check item ratings, and open or close the store."
                    }
                }
            }
        }
    }
}
