use dioxus::prelude::*;
use portal::routes::admin::Admin;
use portal::routes::athletes::Athletes;
use portal::routes::benchmarking::Benchmarking;
use portal::routes::dashboard::Dashboard;
use portal::routes::reports::Reports;
use portal::routes::verification::Verification;
use shared_types::{format_thousands, ATHLETES, TOTAL_ATHLETES};

use crate::common::render;

#[test]
fn test_dashboard_renders_headline_and_kpis() {
    let html = render(Some("admin"), rsx! { Dashboard {} });
    assert!(html.contains("Performance Dashboard"));
    assert!(html.contains("System Online"));
    assert!(html.contains("Generate Report"));
    assert!(!html.contains("Generating..."));
    assert!(html.contains(&format_thousands(TOTAL_ATHLETES)));
    assert!(html.contains("Recent Activity"));
}

#[test]
fn test_athletes_directory_lists_roster() {
    let html = render(Some("coordinator"), rsx! { Athletes {} });
    assert!(html.contains("Athletes Directory"));
    for athlete in ATHLETES {
        assert!(html.contains(athlete.name));
    }
}

#[test]
fn test_verification_starts_paused_without_decision() {
    let html = render(Some("govt"), rsx! { Verification {} });
    assert!(html.contains("Performance Video Analysis"));
    assert!(html.contains("Detection Alerts"));
    assert!(html.contains("0s /"));
}

#[test]
fn test_benchmarking_shows_profile_and_standards() {
    let html = render(None, rsx! { Benchmarking {} });
    assert!(html.contains("Performance Profile Analysis"));
    assert!(html.contains("Comparative Performance Standards"));
}

#[test]
fn test_reports_builder_starts_without_template() {
    let html = render(Some("admin"), rsx! { Reports {} });
    assert!(html.contains("Custom Report Builder"));
    assert!(!html.contains("Queued"));
}

#[test]
fn test_admin_panel_renders_health_and_officials() {
    let html = render(Some("admin"), rsx! { Admin {} });
    assert!(html.contains("System Administration"));
    assert!(html.contains("All Systems Operational"));
    assert!(html.contains("User Management"));
}
