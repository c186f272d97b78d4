use pretty_assertions::assert_eq;
use portal::Route;

use crate::common::render_path;

const ADMIN_GROUP: &str = ">Administration<";
const REDIRECTING: &str = "Redirecting to login...";

fn nav_links(html: &str) -> Vec<&'static str> {
    ["/", "/athletes", "/verification", "/benchmarking", "/reports", "/admin"]
        .into_iter()
        .filter(|path| html.contains(&format!("href=\"{path}\"")))
        .collect()
}

#[test]
fn test_protected_paths_resolve() {
    assert_eq!("/".parse::<Route>().unwrap(), Route::Dashboard {});
    assert_eq!("/athletes".parse::<Route>().unwrap(), Route::Athletes {});
    assert_eq!("/verification".parse::<Route>().unwrap(), Route::Verification {});
    assert_eq!("/benchmarking".parse::<Route>().unwrap(), Route::Benchmarking {});
    assert_eq!("/reports".parse::<Route>().unwrap(), Route::Reports {});
    assert_eq!("/admin".parse::<Route>().unwrap(), Route::Admin {});
}

#[test]
fn test_login_paths_resolve() {
    assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
    assert_eq!("/login/user".parse::<Route>().unwrap(), Route::UserLogin {});
    assert_eq!("/login/admin".parse::<Route>().unwrap(), Route::AdminLogin {});
    assert_eq!("/login/original".parse::<Route>().unwrap(), Route::OriginalLogin {});
}

#[test]
fn test_undeclared_path_is_not_found() {
    let route = "/settings".parse::<Route>().unwrap();
    assert_eq!(route, Route::NotFound { route: vec!["settings".to_string()] });
}

#[test]
fn test_unknown_login_variant_is_not_found() {
    let route = "/login/superuser".parse::<Route>().unwrap();
    assert!(matches!(route, Route::NotFound { .. }));
}

#[test]
fn test_routes_render_back_to_their_paths() {
    assert_eq!(Route::Dashboard {}.to_string(), "/");
    assert_eq!(Route::CoordinatorLogin {}.to_string(), "/login/coordinator");
    assert_eq!(Route::Reports {}.to_string(), "/reports");
}

#[test]
fn test_guest_opening_admin_gets_the_page_without_redirect() {
    let html = render_path(None, false, "/admin");
    assert!(html.contains("System Administration"));
    assert!(!html.contains(REDIRECTING));
    assert!(html.contains("Main Navigation"));
    assert!(!html.contains(ADMIN_GROUP));
    assert_eq!(
        nav_links(&html),
        vec!["/", "/athletes", "/verification", "/benchmarking", "/reports"]
    );
}

#[test]
fn test_athlete_sidebar_lists_dashboard_and_benchmarking_only() {
    let html = render_path(Some("user"), false, "/benchmarking");
    assert!(html.contains("Performance Benchmarking"));
    assert_eq!(nav_links(&html), vec!["/", "/benchmarking"]);
    assert!(!html.contains(ADMIN_GROUP));
}

#[test]
fn test_admin_sidebar_shows_administration_group() {
    let html = render_path(Some("admin"), false, "/");
    assert!(html.contains("Performance Dashboard"));
    assert!(html.contains(ADMIN_GROUP));
    assert!(nav_links(&html).contains(&"/admin"));
}

#[test]
fn test_enabled_guard_holds_back_guests() {
    let html = render_path(None, true, "/admin");
    assert!(html.contains(REDIRECTING));
    assert!(!html.contains("System Administration"));
}

#[test]
fn test_enabled_guard_lets_signed_in_roles_through() {
    let html = render_path(Some("govt"), true, "/admin");
    assert!(html.contains("System Administration"));
    assert!(!html.contains(REDIRECTING));
}

#[test]
fn test_undeclared_path_renders_not_found_for_any_role() {
    for stored in [None, Some("admin")] {
        let html = render_path(stored, false, "/settings");
        assert!(html.contains("Page Not Found"));
        assert!(!html.contains("Main Navigation"));
    }
}
