use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{role_color, role_display_name, AppError, RoleStorage, RoleStore, Role};

/// Session state shared across all routes.
///
/// `role` mirrors the persisted value so that the sidebar, badge and guards
/// re-render when it changes; `store` owns the durable copy.
#[derive(Clone)]
pub struct Session {
    pub role: Signal<Option<Role>>,
    store: Rc<RoleStore>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Session {
    /// Read the stored role once and wrap the store for the app's lifetime.
    pub fn new(store: RoleStore) -> Self {
        let initial = store.get();
        tracing::debug!(role = ?initial, "session restored");
        Self {
            role: Signal::new(initial),
            store: Rc::new(store),
        }
    }

    pub fn current(&self) -> Option<Role> {
        *self.role.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    pub fn display_name(&self) -> &'static str {
        role_display_name(self.current())
    }

    pub fn badge_tone(&self) -> &'static str {
        role_color(self.current()).as_str()
    }

    /// Persist `role` and publish it to every subscriber.
    ///
    /// The in-memory role is updated even when the write fails so the
    /// current tab stays usable.
    pub fn login(&self, role: Role) -> Result<(), AppError> {
        let mut signal = self.role;
        let result = self.store.set(role);
        signal.set(Some(role));
        result
    }

    /// Remove the stored role; every consumer reverts to guest.
    pub fn logout(&self) -> Result<(), AppError> {
        let mut signal = self.role;
        let result = self.store.clear();
        signal.set(None);
        result
    }
}

/// Hook to access the session.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Browser builds keep the role in `window.localStorage`.
#[cfg(feature = "web")]
pub fn platform_storage() -> impl RoleStorage + 'static {
    browser::LocalStorage
}

/// Desktop builds keep it in a JSON file under the home directory.
#[cfg(all(not(feature = "web"), feature = "desktop"))]
pub fn platform_storage() -> impl RoleStorage + 'static {
    let base = std::env::var_os("HOME")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    shared_types::FileStorage::new(base.join(".sai-portal").join("session.json"))
}

#[cfg(all(not(feature = "web"), not(feature = "desktop")))]
pub fn platform_storage() -> impl RoleStorage + 'static {
    shared_types::MemoryStorage::new()
}

#[cfg(feature = "web")]
mod browser {
    use shared_types::{AppError, RoleStorage};

    /// `window.localStorage`.
    pub struct LocalStorage;

    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::storage("no window"))?
            .local_storage()
            .map_err(|e| AppError::storage(format!("localStorage unavailable: {e:?}")))?
            .ok_or_else(|| AppError::storage("localStorage disabled"))
    }

    impl RoleStorage for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, AppError> {
            storage()?
                .get_item(key)
                .map_err(|e| AppError::storage(format!("read {key}: {e:?}")))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
            storage()?
                .set_item(key, value)
                .map_err(|e| AppError::storage(format!("write {key}: {e:?}")))
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            storage()?
                .remove_item(key)
                .map_err(|e| AppError::storage(format!("remove {key}: {e:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MemoryStorage;

    fn seeded(value: &str) -> RoleStore {
        let backend = MemoryStorage::new();
        backend.insert_raw("userRole", value);
        RoleStore::new(backend, "userRole")
    }

    #[component]
    fn RestoredBadge() -> Element {
        let session = use_hook(|| Session::new(seeded("coordinator")));
        rsx! { span { "{session.display_name()}:{session.badge_tone()}" } }
    }

    #[component]
    fn UnknownRoleBadge() -> Element {
        let session = use_hook(|| Session::new(seeded("superuser")));
        rsx! { span { "{session.display_name()}" } }
    }

    #[component]
    fn LoggedOutBadge() -> Element {
        let session = use_hook(|| {
            let session = Session::new(seeded("admin"));
            let _ = session.logout();
            session
        });
        rsx! { span { "{session.display_name()}:{session.is_authenticated()}" } }
    }

    #[test]
    fn stored_role_is_restored_on_mount() {
        let html = dioxus_ssr::render_element(rsx! { RestoredBadge {} });
        assert!(html.contains("Sports Coordinator:orange"));
    }

    #[test]
    fn unrecognized_stored_role_reads_as_guest() {
        let html = dioxus_ssr::render_element(rsx! { UnknownRoleBadge {} });
        assert!(html.contains("Guest"));
    }

    #[test]
    fn logout_reverts_to_guest() {
        let html = dioxus_ssr::render_element(rsx! { LoggedOutBadge {} });
        assert!(html.contains("Guest:false"));
    }
}
