use dioxus::prelude::*;
use shared_types::{PortalConfig, RoleStore};

pub mod platform;
pub mod routes;
pub mod session;

pub use platform::{use_platform, Platform};
pub use routes::Route;
pub use session::{use_session, Session};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Settings compiled in from the workspace `config.toml`.
pub const CONFIG_TOML: &str = include_str!("../../../config.toml");

pub fn portal_config() -> PortalConfig {
    PortalConfig::from_toml_or_default(CONFIG_TOML)
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(portal_config);

    let storage_key = config.storage_key.clone();
    use_context_provider(move || Session::new(RoleStore::new(session::platform_storage(), storage_key)));
    use_context_provider(Platform::host);

    use_hook(|| tracing::info!(platform = client_platform(), "portal started"));

    rsx! {
        document::Title { "{config.app_name}" }
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
