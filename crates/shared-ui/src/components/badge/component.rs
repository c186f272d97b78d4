use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
    Success,
    Warning,
    Accent,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Accent => "accent",
        }
    }

    /// Map a tone name used by page data ("success", "warning", ...) to a variant.
    pub fn from_tone(tone: &str) -> Self {
        match tone {
            "secondary" => BadgeVariant::Secondary,
            "outline" => BadgeVariant::Outline,
            "destructive" => BadgeVariant::Destructive,
            "success" => BadgeVariant::Success,
            "warning" => BadgeVariant::Warning,
            "accent" => BadgeVariant::Accent,
            _ => BadgeVariant::Primary,
        }
    }
}

/// Inline label for statuses, roles and counts.
///
/// `tone` overrides the fill with one of the palette swatches
/// (`blue`, `red`, `green`, `orange`, `gray`) and is used for role badges.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] tone: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    if let Some(tone) = tone {
        base.push(Attribute::new("data-tone", tone, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_names_map_to_variants() {
        assert_eq!(BadgeVariant::from_tone("success"), BadgeVariant::Success);
        assert_eq!(BadgeVariant::from_tone("warning"), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::from_tone("primary"), BadgeVariant::Primary);
        assert_eq!(BadgeVariant::from_tone("unknown"), BadgeVariant::Primary);
    }

    #[test]
    fn renders_role_tone() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Secondary, tone: "red".to_string(), "System Admin" }
        });
        assert!(html.contains("data-tone=\"red\""));
        assert!(html.contains("System Admin"));
    }
}
