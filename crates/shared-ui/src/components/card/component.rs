use dioxus::prelude::*;

/// Surface container used by every portal panel.
///
/// `elevated` adds the stronger drop shadow used by login and KPI cards.
#[component]
pub fn Card(
    #[props(default = false)] elevated: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "card", None, false),
        Attribute::new(
            "data-elevated",
            if elevated { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Card heading; lay an icon before the text as a child.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Headline number card: label, value, optional note and a decorative icon.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] note: Option<String>,
    /// Colour key for the value and icon (`primary`, `accent`, `success`, `warning`).
    #[props(default = "primary".to_string())]
    tone: String,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        Card { class: "stat-card", elevated: true,
            CardContent {
                div { class: "stat-card-body",
                    div {
                        p { class: "stat-card-label", "{label}" }
                        p { class: "stat-card-value", "data-tone": "{tone}", "{value}" }
                        if let Some(note) = note {
                            p { class: "stat-card-note", "{note}" }
                        }
                    }
                    if let Some(icon) = icon {
                        div { class: "stat-card-icon", "data-tone": "{tone}", {icon} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_card_renders_value_and_note() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard {
                label: "Total Athletes",
                value: "2,847",
                note: "+12% from last month".to_string(),
            }
        });
        assert!(html.contains("Total Athletes"));
        assert!(html.contains("2,847"));
        assert!(html.contains("+12% from last month"));
    }

    #[test]
    fn stat_card_without_note_omits_it() {
        let html = dioxus_ssr::render_element(rsx! {
            StatCard { label: "Active Users", value: "23", tone: "accent" }
        });
        assert!(!html.contains("stat-card-note"));
        assert!(html.contains("data-tone=\"accent\""));
    }
}
