use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is expanded. Collapsed sidebars keep their icons
/// and hide labels, descriptions and group titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    fn data_state(&self) -> &'static str {
        if self.open {
            "expanded"
        } else {
            "collapsed"
        }
    }
}

#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-state": state().data_state(),
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", state().data_state(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}

// ─── Groups and menus ──────────────────────────────────────────────────

/// A titled block of menu entries ("Main Navigation", "Administration").
#[component]
pub fn SidebarGroup(label: String, children: Element) -> Element {
    rsx! {
        section { class: "sidebar-group",
            h4 { class: "sidebar-group-label", "{label}" }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Menu entry body: icon, label and an optional one-line description.
/// Wrap it in a router `Link`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    label: String,
    #[props(default)] description: Option<String>,
    icon: Element,
) -> Element {
    rsx! {
        div {
            class: "sidebar-menu-button",
            "data-active": if active { "true" } else { "false" },
            title: "{label}",
            span { class: "sidebar-menu-icon", {icon} }
            span { class: "sidebar-menu-text",
                span { class: "sidebar-menu-label", "{label}" }
                if let Some(description) = description {
                    span { class: "sidebar-menu-description", "{description}" }
                }
            }
        }
    }
}

/// Button that expands or collapses the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let next = state().toggled();
                state.set(next);
            },
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_open() {
        let open = SidebarState { open: true };
        assert!(!open.toggled().open);
        assert!(open.toggled().toggled().open);
        assert_eq!(open.data_state(), "expanded");
        assert_eq!(open.toggled().data_state(), "collapsed");
    }

    #[test]
    fn menu_button_marks_active_entry() {
        let html = dioxus_ssr::render_element(rsx! {
            SidebarMenuButton {
                active: true,
                label: "Benchmarking",
                description: "Performance Analysis".to_string(),
                icon: rsx! { span { "*" } },
            }
        });
        assert!(html.contains("data-active=\"true\""));
        assert!(html.contains("Performance Analysis"));
    }
}
