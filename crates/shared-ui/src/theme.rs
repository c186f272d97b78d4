use dioxus::prelude::*;

/// Colour mode of the portal. The `data-theme` attribute on `<html>`
/// selects the matching variable block in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Shared theme state provided as context. The sidebar footer switch writes
/// it and calls [`ThemeState::apply`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    pub fn apply(&self) {
        set_theme(self.mode());
    }
}

/// Theme named by the `theme=` entry of a `document.cookie` string.
pub fn mode_from_cookie(cookie: &str) -> ThemeMode {
    cookie
        .split(';')
        .find_map(|pair| pair.trim().strip_prefix("theme="))
        .map_or(ThemeMode::Light, ThemeMode::from_key)
}

/// Provide [`ThemeState`] to the subtree, seeded from the theme cookie so the
/// switch matches what [`ThemeSeed`] applied.
pub fn use_theme_provider() -> ThemeState {
    let state = use_context_provider(|| ThemeState {
        is_dark: Signal::new(false),
    });

    use_hook(move || {
        let mut is_dark = state.is_dark;
        spawn(async move {
            if let Ok(cookie) = document::eval("return document.cookie;").join::<String>().await {
                is_dark.set(mode_from_cookie(&cookie).is_dark());
            }
        });
    });

    state
}

/// Apply the persisted theme once at startup. Mount it in the root component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'light';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Persist `mode` in a cookie and apply it to the document.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn keys_parse_back() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_key(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::from_key("cyberpunk"), ThemeMode::Light);
    }

    #[test]
    fn cookie_seeds_the_mode() {
        assert_eq!(mode_from_cookie("session=abc; theme=dark"), ThemeMode::Dark);
        assert_eq!(mode_from_cookie("theme=light;path=/"), ThemeMode::Light);
        assert_eq!(mode_from_cookie("darktheme=dark"), ThemeMode::Light);
        assert_eq!(mode_from_cookie(""), ThemeMode::Light);
    }

    #[test]
    fn dark_flag_maps_to_mode() {
        assert!(ThemeMode::from_dark(true).is_dark());
        assert!(!ThemeMode::from_dark(false).is_dark());
    }
}
