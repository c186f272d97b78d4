use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use portal::{Platform, Route, Session};
use shared_types::{
    AppError, ExportedFile, Latency, LatencyFuture, MemoryStorage, NoLatency, PortalConfig,
    ReportSink, RoleStorage, RoleStore,
};

pub const STORAGE_KEY: &str = "userRole";

/// Build a role store over shared in-memory storage, optionally pre-seeded
/// with a raw stored value.
pub fn memory_store(stored: Option<&str>) -> (RoleStore, MemoryStorage) {
    let backend = MemoryStorage::new();
    if let Some(value) = stored {
        backend.insert_raw(STORAGE_KEY, value);
    }
    (RoleStore::new(backend.clone(), STORAGE_KEY), backend)
}

/// Provides the contexts every page expects: config, session, platform
/// services and toasts. Simulated delays complete immediately.
#[component]
pub fn PortalHarness(
    #[props(default)] stored_role: Option<String>,
    #[props(default)] route_guard: bool,
    children: Element,
) -> Element {
    use_context_provider(move || PortalConfig {
        route_guard,
        ..PortalConfig::default()
    });
    use_context_provider(move || {
        let (store, _) = memory_store(stored_role.as_deref());
        Session::new(store)
    });
    use_context_provider(|| Platform::new(NoLatency, RecordingSink::default()));

    rsx! {
        shared_ui::ToastProvider { {children} }
    }
}

/// Render a page inside [`PortalHarness`] to an HTML string.
pub fn render(stored_role: Option<&str>, page: Element) -> String {
    let stored_role = stored_role.map(str::to_string);
    dioxus_ssr::render_element(rsx! {
        PortalHarness { stored_role, {page} }
    })
}

/// The full router opened at `path`, layouts included.
#[component]
pub fn RoutedPortal(path: String) -> Element {
    use_context_provider(move || -> Rc<dyn History> {
        Rc::new(MemoryHistory::with_initial_path(path.clone()))
    });

    rsx! { Router::<Route> {} }
}

/// Render the app as a visitor opening `path` would see it.
pub fn render_path(stored_role: Option<&str>, route_guard: bool, path: &str) -> String {
    let stored_role = stored_role.map(str::to_string);
    let path = path.to_string();
    dioxus_ssr::render_element(rsx! {
        PortalHarness { stored_role, route_guard,
            RoutedPortal { path }
        }
    })
}

/// Keeps every delivered export for inspection. Clones share the list.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub files: Rc<RefCell<Vec<ExportedFile>>>,
}

impl ReportSink for RecordingSink {
    fn deliver(&self, file: &ExportedFile) -> Result<(), AppError> {
        self.files.borrow_mut().push(file.clone());
        Ok(())
    }
}

/// Refuses every delivery, like a browser with downloads blocked.
pub struct BlockedSink;

impl ReportSink for BlockedSink {
    fn deliver(&self, _file: &ExportedFile) -> Result<(), AppError> {
        Err(AppError::export("downloads are blocked"))
    }
}

/// Completes immediately, noting what the role key held when each delay
/// started.
#[derive(Clone)]
pub struct StoreWatchingLatency {
    backend: MemoryStorage,
    pub seen: Rc<RefCell<Vec<(Duration, Option<String>)>>>,
}

impl StoreWatchingLatency {
    pub fn new(backend: MemoryStorage) -> Self {
        Self {
            backend,
            seen: Rc::default(),
        }
    }
}

impl Latency for StoreWatchingLatency {
    fn wait(&self, duration: Duration) -> LatencyFuture {
        let stored = self.backend.read(STORAGE_KEY).unwrap_or(None);
        self.seen.borrow_mut().push((duration, stored));
        Box::pin(std::future::ready(()))
    }
}
