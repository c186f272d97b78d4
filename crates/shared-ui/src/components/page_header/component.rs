use dioxus::prelude::*;

/// Title row at the top of each portal page: heading, subtitle and an
/// action area on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    /// Buttons or badges placed at the right edge.
    #[props(default)]
    actions: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_subtitle() {
        let html = dioxus_ssr::render_element(rsx! {
            PageHeader {
                title: "Admin Panel",
                subtitle: "System administration and user management".to_string(),
            }
        });
        assert!(html.contains("page-title"));
        assert!(html.contains("Admin Panel"));
        assert!(html.contains("System administration and user management"));
        assert!(!html.contains("page-actions"));
    }
}
