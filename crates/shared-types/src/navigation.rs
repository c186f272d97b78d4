use crate::Role;

/// Icon slot for a navigation entry; the UI layer maps each to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Athletes,
    Verification,
    Benchmarking,
    Reports,
    Admin,
}

/// A sidebar menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub description: &'static str,
}

const DASHBOARD: NavItem = NavItem {
    label: "Dashboard",
    path: "/",
    icon: NavIcon::Dashboard,
    description: "Overview & Analytics",
};

const ATHLETES: NavItem = NavItem {
    label: "Athletes",
    path: "/athletes",
    icon: NavIcon::Athletes,
    description: "Manage Athletes",
};

const VERIFICATION: NavItem = NavItem {
    label: "Verification",
    path: "/verification",
    icon: NavIcon::Verification,
    description: "Performance Review",
};

const BENCHMARKING: NavItem = NavItem {
    label: "Benchmarking",
    path: "/benchmarking",
    icon: NavIcon::Benchmarking,
    description: "Performance Analysis",
};

const REPORTS: NavItem = NavItem {
    label: "Reports",
    path: "/reports",
    icon: NavIcon::Reports,
    description: "Analytics & Reports",
};

const ADMIN_PANEL: NavItem = NavItem {
    label: "Admin Panel",
    path: "/admin",
    icon: NavIcon::Admin,
    description: "System Management",
};

/// The full "Main Navigation" group, in display order.
pub const MAIN_NAV: &[NavItem] = &[DASHBOARD, ATHLETES, VERIFICATION, BENCHMARKING, REPORTS];

/// The "Administration" group.
pub const ADMIN_NAV: &[NavItem] = &[ADMIN_PANEL];

/// Paths an athlete may see, in `MAIN_NAV` order.
const ATHLETE_PATHS: &[&str] = &["/", "/benchmarking"];

/// What a role is allowed to see in the layout shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub main_nav: Vec<NavItem>,
    pub admin_panel: bool,
}

impl Capabilities {
    /// Entries of the administration group, empty when the panel is hidden.
    pub fn admin_nav(&self) -> &'static [NavItem] {
        if self.admin_panel {
            ADMIN_NAV
        } else {
            &[]
        }
    }
}

/// Look up the capability set for a role.
///
/// A missing role gets the full main navigation without the admin section.
pub fn capabilities(role: Option<Role>) -> Capabilities {
    match role {
        Some(Role::Athlete) => Capabilities {
            main_nav: MAIN_NAV
                .iter()
                .filter(|item| ATHLETE_PATHS.contains(&item.path))
                .copied()
                .collect(),
            admin_panel: false,
        },
        Some(Role::SportsCoordinator) => Capabilities {
            main_nav: MAIN_NAV.to_vec(),
            admin_panel: false,
        },
        Some(Role::SystemAdmin) | Some(Role::GovernmentOfficial) => Capabilities {
            main_nav: MAIN_NAV.to_vec(),
            admin_panel: true,
        },
        None => Capabilities {
            main_nav: MAIN_NAV.to_vec(),
            admin_panel: false,
        },
    }
}

/// Main navigation entries visible to `role`, in display order.
pub fn visible_items(role: Option<Role>) -> Vec<NavItem> {
    capabilities(role).main_nav
}

/// Whether the administration section is shown for `role`.
pub fn show_admin_panel(role: Option<Role>) -> bool {
    capabilities(role).admin_panel
}

/// Whether a menu entry should be highlighted for the current path.
///
/// The dashboard root only matches exactly; other entries match any path
/// beneath them.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    if item_path == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(item_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths(items: &[NavItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.path).collect()
    }

    #[test]
    fn athlete_sees_dashboard_and_benchmarking_in_order() {
        let items = visible_items(Some(Role::Athlete));
        assert_eq!(paths(&items), vec!["/", "/benchmarking"]);
    }

    #[test]
    fn coordinator_sees_full_main_nav_without_admin() {
        let caps = capabilities(Some(Role::SportsCoordinator));
        assert_eq!(caps.main_nav, MAIN_NAV.to_vec());
        assert!(!caps.admin_panel);
        assert!(caps.admin_nav().is_empty());
    }

    #[test]
    fn admin_and_govt_see_everything() {
        for role in [Role::SystemAdmin, Role::GovernmentOfficial] {
            let caps = capabilities(Some(role));
            assert_eq!(caps.main_nav.len(), 5);
            assert_eq!(paths(caps.admin_nav()), vec!["/admin"]);
        }
    }

    #[test]
    fn guest_falls_through_to_full_main_nav() {
        assert_eq!(visible_items(None), MAIN_NAV.to_vec());
        assert!(!show_admin_panel(None));
    }

    #[test]
    fn admin_panel_flag_per_role() {
        assert!(show_admin_panel(Some(Role::SystemAdmin)));
        assert!(show_admin_panel(Some(Role::GovernmentOfficial)));
        assert!(!show_admin_panel(Some(Role::SportsCoordinator)));
        assert!(!show_admin_panel(Some(Role::Athlete)));
    }

    #[test]
    fn root_is_active_only_on_exact_match() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/athletes"));
        assert!(is_active("/reports", "/reports"));
        assert!(is_active("/athletes", "/athletes/ATH001"));
        assert!(!is_active("/admin", "/athletes"));
    }
}
