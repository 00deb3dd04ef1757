use dioxus::prelude::*;

mod views;

use views::{AdminDashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        AdminDashboard {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            server::init()?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Restaurant Dashboard" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// A failed server call, split for display.
///
/// Refusals such as a closed store arrive as a single sentence and are shown
/// as-is. Internal failures arrive as anyhow's Debug output; those get a
/// generic headline with the cause chain and backtrace tucked under "Details".
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub headline: String,
    pub causes: Vec<String>,
    pub backtrace: Option<String>,
}

impl ErrorNotice {
    const INTERNAL_HEADLINE: &'static str = "Something went wrong on the server. Try again in a moment.";

    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError { message, .. } => Self::from_message(message),
            other => Self {
                headline: "The server could not be reached.".to_string(),
                causes: vec![other.to_string()],
                backtrace: None,
            },
        }
    }

    fn from_message(message: &str) -> Self {
        let (head, backtrace) = match message.split_once("\nStack backtrace:") {
            Some((head, bt)) => (head, Some(bt.trim().to_string())),
            None => (message, None),
        };
        let lines: Vec<&str> = head
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != "Caused by:")
            .collect();

        if lines.len() <= 1 && backtrace.is_none() {
            return Self {
                headline: lines.first().copied().unwrap_or(head).to_string(),
                causes: Vec::new(),
                backtrace: None,
            };
        }

        let causes = lines
            .iter()
            .map(|l| {
                l.trim_start_matches(|c: char| c.is_ascii_digit() || c == ':')
                    .trim()
                    .to_string()
            })
            .collect();

        Self {
            headline: Self::INTERNAL_HEADLINE.to_string(),
            causes,
            backtrace,
        }
    }

    pub fn has_details(&self) -> bool {
        !self.causes.is_empty() || self.backtrace.is_some()
    }
}

/// The page-wide notice slot - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorNotice>>);

impl ErrorState {
    pub fn set_server_error(&mut self, err: &ServerFnError) {
        tracing::warn!(error = %err, "server function failed");
        self.0.set(Some(ErrorNotice::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let mut show_details = use_signal(|| false);

    let Some(notice) = error_state.0.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-banner", role: "alert",
            div { class: "error-banner-content",
                div { class: "error-banner-header",
                    span { class: "error-banner-message", "{notice.headline}" }
                    div { class: "error-banner-actions",
                        if notice.has_details() {
                            button {
                                class: "btn btn-link",
                                onclick: move |_| show_details.toggle(),
                                if *show_details.read() { "Hide details" } else { "Details" }
                            }
                        }
                        button {
                            class: "error-banner-close",
                            title: "Dismiss",
                            onclick: move |_| {
                                show_details.set(false);
                                error_state.clear();
                            },
                            "×"
                        }
                    }
                }
                if *show_details.read() {
                    div { class: "error-details",
                        if !notice.causes.is_empty() {
                            ol { class: "error-chain-list",
                                for (i, cause) in notice.causes.iter().enumerate() {
                                    li { key: "{i}", "{cause}" }
                                }
                            }
                        }
                        if let Some(backtrace) = &notice.backtrace {
                            pre { class: "error-backtrace-content", "{backtrace}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AppLayout() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));

    rsx! {
        main { class: "main-content",
            ErrorBanner {}
            Outlet::<Route> {}
        }
    }
}
