use pretty_assertions::assert_eq;
use shared_types::{capabilities, is_active, Role, ALL_ROLES};

fn main_paths(role: Option<Role>) -> Vec<&'static str> {
    capabilities(role).main_nav.iter().map(|item| item.path).collect()
}

#[test]
fn test_athlete_sees_dashboard_and_benchmarking_only() {
    assert_eq!(main_paths(Some(Role::Athlete)), vec!["/", "/benchmarking"]);
    assert!(!capabilities(Some(Role::Athlete)).admin_panel);
}

#[test]
fn test_coordinator_has_full_main_nav_without_admin() {
    let caps = capabilities(Some(Role::SportsCoordinator));
    assert_eq!(caps.main_nav.len(), 5);
    assert!(caps.admin_nav().is_empty());
}

#[test]
fn test_admin_and_govt_see_admin_panel() {
    for role in [Role::SystemAdmin, Role::GovernmentOfficial] {
        let caps = capabilities(Some(role));
        assert_eq!(caps.main_nav.len(), 5);
        assert_eq!(caps.admin_nav().len(), 1);
        assert_eq!(caps.admin_nav()[0].path, "/admin");
    }
}

#[test]
fn test_guest_falls_back_to_full_main_nav() {
    assert_eq!(
        main_paths(None),
        vec!["/", "/athletes", "/verification", "/benchmarking", "/reports"]
    );
    assert!(!capabilities(None).admin_panel);
}

#[test]
fn test_every_role_keeps_the_dashboard() {
    for role in ALL_ROLES {
        assert_eq!(main_paths(Some(*role))[0], "/");
    }
}

#[test]
fn test_active_entry_matches_exact_path() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/athletes"));
    assert!(is_active("/reports", "/reports"));
}
