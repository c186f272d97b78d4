use dioxus::prelude::*;

use crate::routes::Route;

/// Any path without a route lands here.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    use_hook(|| tracing::error!(%path, "404: user attempted to access non-existent route"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Dashboard {}, class: "not-found-link", "Back to Dashboard" }
            }
        }
    }
}
