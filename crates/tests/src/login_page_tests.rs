use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use portal::routes::login::{
    complete_login, AdminLogin, GovtLogin, Login, OriginalLogin, UserLogin,
};
use portal::{Route, Session};
use pretty_assertions::assert_eq;
use shared_types::{
    official_login_profile, LoginProfile, MemoryStorage, PortalConfig, Role, RoleStorage,
    RoleStore, ALL_ROLES,
};

use crate::common::{memory_store, render, StoreWatchingLatency, STORAGE_KEY};

#[test]
fn test_role_selection_lists_every_card() {
    let html = render(None, rsx! { Login {} });
    assert!(html.contains("Select Your Role"));
    for role in ALL_ROLES {
        let profile = role.login_profile();
        assert!(html.contains(&format!("Login as {}", profile.card_title)));
    }
}

#[test]
fn test_user_login_offers_sample_credentials() {
    let html = render(None, rsx! { UserLogin {} });
    assert!(html.contains("Athlete Login"));
    assert!(html.contains("athlete@example.com"));
    assert!(html.contains("Use Sample Credentials"));
}

#[test]
fn test_admin_login_shows_restricted_notice() {
    let html = render(None, rsx! { AdminLogin {} });
    assert!(html.contains("Restricted administrator access only"));
    assert!(html.contains("admin@sai.gov.in"));
}

#[test]
fn test_govt_login_placeholder() {
    let html = render(Some("user"), rsx! { GovtLogin {} });
    assert!(html.contains("official@gov.in"));
    assert!(html.contains(Role::GovernmentOfficial.login_profile().submit_label));
}

#[test]
fn test_original_login_has_no_sample_credentials() {
    let html = render(None, rsx! { OriginalLogin {} });
    assert!(html.contains("Need access? Contact your System Administrator"));
    assert!(!html.contains("Use Sample Credentials"));
}

#[derive(Clone)]
struct SubmitProps {
    backend: MemoryStorage,
    profile: LoginProfile,
    latency: StoreWatchingLatency,
    next: Rc<RefCell<Option<Route>>>,
}

/// Mounts a session over `backend` and runs one form submission to the end.
fn submit_form(props: SubmitProps) -> Element {
    use_hook(|| {
        let session = Session::new(RoleStore::new(props.backend.clone(), STORAGE_KEY));
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let next = runtime.block_on(complete_login(
            &session,
            props.profile.role,
            &props.latency,
            PortalConfig::default().login_delay(),
        ));
        *props.next.borrow_mut() = Some(next);
    });
    rsx! {}
}

/// Submit `profile`'s form over storage pre-seeded with `stored` and report
/// the next route, the stored value afterwards and what the delay observed.
fn run_submit(
    profile: LoginProfile,
    stored: Option<&str>,
) -> (Option<Route>, Option<String>, Vec<(Duration, Option<String>)>) {
    let (_, backend) = memory_store(stored);
    let latency = StoreWatchingLatency::new(backend.clone());
    let next = Rc::new(RefCell::new(None));
    let props = SubmitProps {
        backend: backend.clone(),
        profile,
        latency: latency.clone(),
        next: next.clone(),
    };
    let mut dom = VirtualDom::new_with_props(submit_form, props);
    dom.rebuild_in_place();

    let stored_after = backend.read(STORAGE_KEY).unwrap();
    let seen = latency.seen.borrow().clone();
    let next = next.borrow().clone();
    (next, stored_after, seen)
}

#[test]
fn test_each_role_form_stores_its_role_before_the_delay() {
    for role in ALL_ROLES {
        let (next, stored, seen) = run_submit(role.login_profile(), None);
        assert_eq!(next, Some(Route::Dashboard {}));
        assert_eq!(stored.as_deref(), Some(role.as_str()));
        assert_eq!(
            seen,
            vec![(Duration::from_millis(1500), Some(role.as_str().to_string()))]
        );
    }
}

#[test]
fn test_role_form_replaces_previous_role() {
    let (_, stored, _) = run_submit(Role::SystemAdmin.login_profile(), Some("user"));
    assert_eq!(stored.as_deref(), Some("admin"));
}

#[test]
fn test_original_form_leaves_stored_role_untouched() {
    let (next, stored, seen) = run_submit(official_login_profile(), Some("coordinator"));
    assert_eq!(next, Some(Route::Dashboard {}));
    assert_eq!(stored.as_deref(), Some("coordinator"));
    assert_eq!(seen.len(), 1);

    let (_, stored, _) = run_submit(official_login_profile(), None);
    assert_eq!(stored, None);
}
