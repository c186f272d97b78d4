use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use portal::Session;
use shared_types::{FileStorage, Role, RoleStorage, RoleStore};

use crate::common::{memory_store, STORAGE_KEY};

#[derive(Clone)]
struct LoginProps {
    store: Rc<RefCell<Option<RoleStore>>>,
    role: Role,
}

fn login_then_show(props: LoginProps) -> Element {
    let session = use_hook(|| {
        let store = props.store.borrow_mut().take();
        let session = Session::new(store.unwrap_or_else(|| memory_store(None).0));
        let _ = session.login(props.role);
        session
    });
    rsx! { span { "{session.display_name()}|{session.badge_tone()}" } }
}

/// Mount a session over `store`, log in as `role` and render the badge text.
fn render_login(store: RoleStore, role: Role) -> String {
    let props = LoginProps {
        store: Rc::new(RefCell::new(Some(store))),
        role,
    };
    let mut dom = VirtualDom::new_with_props(login_then_show, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_login_publishes_role_and_persists_identifier() {
    let (store, backend) = memory_store(None);
    let html = render_login(store, Role::GovernmentOfficial);
    assert!(html.contains("Government Official|green"));
    assert_eq!(backend.read(STORAGE_KEY).unwrap(), Some("govt".to_string()));
}

#[test]
fn test_login_replaces_previous_role() {
    let (store, backend) = memory_store(Some("user"));
    render_login(store, Role::SystemAdmin);
    let reloaded = RoleStore::new(backend, STORAGE_KEY);
    assert_eq!(reloaded.get(), Some(Role::SystemAdmin));
}

#[test]
fn test_file_backed_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = RoleStore::new(FileStorage::new(&path), STORAGE_KEY);
    render_login(store, Role::SportsCoordinator);

    let restarted = RoleStore::new(FileStorage::new(&path), STORAGE_KEY);
    assert_eq!(restarted.get(), Some(Role::SportsCoordinator));

    restarted.clear().unwrap();
    assert_eq!(RoleStore::new(FileStorage::new(&path), STORAGE_KEY).get(), None);
}

#[test]
fn test_missing_session_file_is_guest() {
    let dir = tempfile::tempdir().unwrap();
    let store = RoleStore::new(FileStorage::new(dir.path().join("absent.json")), STORAGE_KEY);
    assert_eq!(store.get(), None);
}
