use dioxus::prelude::*;
use types::{
    MenuItem, RestaurantConfig,
    dashboard::AdminGate,
    format,
    menu::is_valid_price,
};

#[component]
pub fn AdminPanel(
    gate: Signal<AdminGate>,
    passcode: Signal<String>,
    admin_passcode: String,
    restaurant_config: ReadSignal<RestaurantConfig>,
    update_restaurant_config: EventHandler<RestaurantConfig>,
    menu_items: ReadSignal<Vec<MenuItem>>,
    add_menu_item: EventHandler<MenuItem>,
    delete_menu_item: EventHandler<String>,
    update_menu_item_price: EventHandler<(String, f64)>,
    toggle_item_visibility: EventHandler<String>,
) -> Element {
    if !gate.read().is_authenticated() {
        return rsx! {
            AdminLogin { gate, passcode, admin_passcode }
        };
    }

    let is_open = restaurant_config.read().is_open;

    rsx! {
        div { class: "admin-panel",
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Store settings" }
                }
                div { class: "card-body store-toggle",
                    button {
                        class: if is_open { "btn btn-open active" } else { "btn btn-open" },
                        onclick: move |_| {
                            update_restaurant_config.call(restaurant_config.read().with_open(true));
                        },
                        "Open store"
                    }
                    button {
                        class: if !is_open { "btn btn-close active" } else { "btn btn-close" },
                        onclick: move |_| {
                            update_restaurant_config.call(restaurant_config.read().with_open(false));
                        },
                        "Close store"
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Menu" }
                }
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { {format!("Price ({})", format::CURRENCY)} }
                                th { "" }
                            }
                        }
                        tbody {
                            for item in menu_items.read().iter() {
                                MenuItemRow {
                                    key: "{item.id}",
                                    item: item.clone(),
                                    on_price: update_menu_item_price,
                                    on_toggle: toggle_item_visibility,
                                    on_delete: delete_menu_item,
                                }
                            }
                        }
                    }
                }
                AddMenuItemForm { on_add: add_menu_item }
            }
        }
    }
}

#[component]
fn AdminLogin(gate: Signal<AdminGate>, passcode: Signal<String>, admin_passcode: String) -> Element {
    let has_error = gate.read().has_error();

    rsx! {
        div { class: "login-card",
            form {
                class: "admin-login",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    gate.write().submit(&passcode.read(), &admin_passcode);
                },
                h2 { class: "login-title", "Admin sign in" }
                input {
                    r#type: "password",
                    placeholder: "Passcode",
                    class: if has_error { "form-input form-input-error" } else { "form-input" },
                    value: "{passcode}",
                    oninput: move |e| passcode.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary login-btn",
                    "Sign in"
                }
            }
        }
    }
}

#[component]
fn MenuItemRow(
    item: MenuItem,
    on_price: EventHandler<(String, f64)>,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    // `None` shows the stored price, so a rejected update falls back to it.
    let mut price_draft = use_signal(|| None::<String>);
    let mut price_invalid = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    let id = item.id.clone();
    let current_price = item.price;
    let shown_price = price_field_value(price_draft.read().as_deref(), current_price);

    rsx! {
        tr { class: if !item.is_visible { "row-hidden" },
            td { "{item.name}" }
            td { "{item.category}" }
            td {
                input {
                    class: if *price_invalid.read() { "form-input price-input form-input-error" } else { "form-input price-input" },
                    r#type: "text",
                    value: "{shown_price}",
                    oninput: move |e| price_draft.set(Some(e.value())),
                    onchange: {
                        let id = id.clone();
                        move |_| {
                            let parsed = price_draft.read().as_deref().map(parse_price);
                            match parsed {
                                None => {}
                                Some(Some(price)) => {
                                    price_draft.set(None);
                                    price_invalid.set(false);
                                    if price != current_price {
                                        on_price.call((id.clone(), price));
                                    }
                                }
                                Some(None) => price_invalid.set(true),
                            }
                        }
                    },
                }
            }
            td { class: "row-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: {
                        let id = id.clone();
                        move |_| on_toggle.call(id.clone())
                    },
                    if item.is_visible { "Hide" } else { "Show" }
                }
                if *confirm_delete.read() {
                    button {
                        class: "btn btn-danger",
                        onclick: {
                            let id = id.clone();
                            move |_| {
                                confirm_delete.set(false);
                                on_delete.call(id.clone());
                            }
                        },
                        "Confirm"
                    }
                    button {
                        class: "btn btn-link",
                        onclick: move |_| confirm_delete.set(false),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "btn btn-link text-danger",
                        onclick: move |_| confirm_delete.set(true),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn AddMenuItemForm(on_add: EventHandler<MenuItem>) -> Element {
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    rsx! {
        form {
            class: "add-item-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                let item_name = name.read().trim().to_string();
                let parsed = parse_price(&price.read());
                match parsed {
                    Some(value) if !item_name.is_empty() => {
                        on_add.call(MenuItem::draft(item_name, value, category.read().trim()));
                        name.set(String::new());
                        price.set(String::new());
                        category.set(String::new());
                        invalid.set(false);
                    }
                    _ => invalid.set(true),
                }
            },
            h3 { class: "section-header", "Add item" }
            div { class: "form-row",
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Category",
                    value: "{category}",
                    oninput: move |e| category.set(e.value()),
                }
                input {
                    class: "form-input price-input",
                    r#type: "text",
                    placeholder: "Price",
                    value: "{price}",
                    oninput: move |e| price.set(e.value()),
                }
                button { r#type: "submit", class: "btn btn-primary", "Add" }
            }
            if *invalid.read() {
                p { class: "text-danger", "Enter a name and a valid price." }
            }
        }
    }
}

/// Text for a price input: the unsaved draft if there is one, else the stored price.
fn price_field_value(draft: Option<&str>, stored: f64) -> String {
    draft.map_or_else(|| format::amount(stored), str::to_string)
}

fn parse_price(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|p| is_valid_price(*p))
}

#[cfg(test)]
mod tests {
    use super::{parse_price, price_field_value};

    #[test]
    fn parses_plain_and_padded_prices() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price("  30 "), Some(30.0));
    }

    #[test]
    fn committed_price_shows_the_stored_value() {
        // After a commit the draft is cleared, so whatever the server kept is shown,
        // including the old price when the update was refused.
        assert_eq!(price_field_value(None, 20.0), "20");
        assert_eq!(price_field_value(None, 22.5), "22.5");
    }

    #[test]
    fn unsaved_draft_is_shown_as_typed() {
        assert_eq!(price_field_value(Some("22."), 20.0), "22.");
        assert_eq!(price_field_value(Some("abc"), 20.0), "abc");
    }

    #[test]
    fn rejects_garbage_and_negative_prices() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("-4"), None);
        assert_eq!(parse_price("NaN"), None);
    }
}
