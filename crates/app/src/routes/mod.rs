pub mod admin;
pub mod athletes;
pub mod benchmarking;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod verification;

use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdFileText, LdLayoutDashboard, LdLogOut, LdSettings, LdShield, LdTrophy, LdUser,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{capabilities, is_active, NavIcon, NavItem, PortalConfig, Role};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Separator, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger, Switch, SwitchThumb,
};

use admin::Admin;
use athletes::Athletes;
use benchmarking::Benchmarking;
use dashboard::Dashboard;
use login::{AdminLogin, CoordinatorLogin, GovtLogin, Login, OriginalLogin, UserLogin};
use not_found::NotFound;
use reports::Reports;
use verification::Verification;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/login/user")]
    UserLogin {},
    #[route("/login/admin")]
    AdminLogin {},
    #[route("/login/govt")]
    GovtLogin {},
    #[route("/login/coordinator")]
    CoordinatorLogin {},
    #[route("/login/original")]
    OriginalLogin {},
    #[layout(RouteGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/athletes")]
    Athletes {},
    #[route("/verification")]
    Verification {},
    #[route("/benchmarking")]
    Benchmarking {},
    #[route("/reports")]
    Reports {},
    #[route("/admin")]
    Admin {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Heading shown in the top bar for protected pages.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::Athletes {} => "Athletes",
            Route::Verification {} => "Verification",
            Route::Benchmarking {} => "Benchmarking",
            Route::Reports {} => "Reports",
            Route::Admin {} => "Admin Panel",
            Route::NotFound { .. } => "Not Found",
            _ => "Login",
        }
    }
}

/// Whether a visitor must be sent to `/login` before seeing a protected page.
pub fn needs_login(route_guard: bool, role: Option<Role>) -> bool {
    route_guard && role.is_none()
}

/// Sends guests back to the role selection page when `route_guard` is on.
/// With the guard off every protected page renders for any visitor.
#[component]
fn RouteGuard() -> Element {
    let config: PortalConfig = use_context();
    let session = use_session();
    let guard_on = config.route_guard;
    let role = session.role;

    use_effect(move || {
        if needs_login(guard_on, *role.read()) {
            tracing::info!("no stored role, redirecting to login");
            navigator().replace(Route::Login {});
        }
    });

    let guarded = needs_login(guard_on, session.current());
    if guarded {
        rsx! {
            div { class: "route-guard-loading",
                p { "Redirecting to login..." }
            }
        }
    } else {
        rsx! { Outlet::<Route> {} }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Athletes => rsx! { Icon { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Verification => rsx! { Icon { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Benchmarking => rsx! { Icon { icon: LdTrophy, width: 18, height: 18 } },
        NavIcon::Reports => rsx! { Icon { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Admin => rsx! { Icon { icon: LdShield, width: 18, height: 18 } },
    }
}

#[component]
fn NavEntry(item: NavItem, current: String) -> Element {
    // Every path in the navigation tables is a declared route.
    let Ok(target) = item.path.parse::<Route>() else {
        tracing::warn!(path = item.path, "navigation entry does not match a route");
        return rsx! {};
    };

    rsx! {
        SidebarMenuItem {
            Link { to: target,
                SidebarMenuButton {
                    active: is_active(item.path, &current),
                    label: item.label,
                    description: item.description.to_string(),
                    icon: rsx! { NavGlyph { icon: item.icon } },
                }
            }
        }
    }
}

/// Sidebar, top bar and page outlet shared by every protected route.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let config: PortalConfig = use_context();
    let session = use_session();

    let mut theme_state = shared_ui::theme::use_theme_provider();

    let current = route.to_string();
    let caps = capabilities(session.current());

    let logout_session = session.clone();
    let handle_logout = move |_| {
        if let Err(e) = logout_session.logout() {
            tracing::warn!(error = %e, "failed to clear stored role");
        }
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        div { class: "sidebar-brand-mark",
                            Icon { icon: LdTrophy, width: 20, height: 20 }
                        }
                        div { class: "sidebar-brand-text",
                            span { class: "sidebar-brand-name", "SAI Portal" }
                            span { class: "sidebar-brand-tagline", "Sports Authority" }
                        }
                    }
                    Badge {
                        tone: session.badge_tone().to_string(),
                        class: "sidebar-role-badge",
                        "{session.display_name()}"
                    }
                }
                Separator {}
                SidebarContent {
                    SidebarGroup { label: "Main Navigation",
                        for item in caps.main_nav.iter().copied() {
                            NavEntry { key: "{item.path}", item, current: current.clone() }
                        }
                    }
                    if caps.admin_panel {
                        SidebarGroup { label: "Administration",
                            for item in caps.admin_nav().iter().copied() {
                                NavEntry { key: "{item.path}", item, current: current.clone() }
                            }
                        }
                    }
                }
                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark Mode" }
                        Switch {
                            checked: (theme_state.is_dark)(),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        full_width: true,
                        onclick: handle_logout,
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        span { class: "topbar-trigger-icon", "\u{2630}" }
                    }
                    div { class: "topbar-brand",
                        span { class: "topbar-title", "{config.app_name}" }
                        Badge { variant: BadgeVariant::Secondary, "{config.app_version}" }
                        span { class: "topbar-page", "{route.title()}" }
                    }
                    div { class: "topbar-spacer" }
                    div { class: "topbar-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            span { class: "topbar-bell",
                                Icon { icon: LdBell, width: 18, height: 18 }
                                span { class: "topbar-bell-count", "3" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            Icon { icon: LdSettings, width: 18, height: 18 }
                        }
                        div { class: "topbar-user",
                            div { class: "topbar-user-avatar",
                                Icon { icon: LdUser, width: 16, height: 16 }
                            }
                            span { class: "topbar-user-name", "Official Name" }
                        }
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ADMIN_NAV, MAIN_NAV};

    #[test]
    fn every_navigation_path_is_a_route() {
        for item in MAIN_NAV.iter().chain(ADMIN_NAV) {
            let route = item.path.parse::<Route>().unwrap();
            assert_eq!(route.to_string(), item.path);
            assert!(!matches!(route, Route::NotFound { .. }));
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/training/plans".parse::<Route>().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["training".to_string(), "plans".to_string()]
            }
        );
    }

    #[test]
    fn login_variants_parse() {
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!("/login/govt".parse::<Route>().unwrap(), Route::GovtLogin {});
        assert_eq!(
            "/login/coordinator".parse::<Route>().unwrap(),
            Route::CoordinatorLogin {}
        );
    }

    #[test]
    fn guard_only_stops_guests_when_enabled() {
        assert!(!needs_login(false, None));
        assert!(needs_login(true, None));
        assert!(!needs_login(true, Some(Role::Athlete)));
        assert!(!needs_login(false, Some(Role::SystemAdmin)));
    }

    #[test]
    fn titles_follow_navigation_labels() {
        assert_eq!(Route::Admin {}.title(), "Admin Panel");
        assert_eq!(Route::Benchmarking {}.title(), "Benchmarking");
        assert_eq!(Route::UserLogin {}.title(), "Login");
    }
}
