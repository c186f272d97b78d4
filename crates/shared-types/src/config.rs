use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Portal settings, compiled in from `config.toml`.
///
/// Every field has a default so that a missing or partial file still
/// produces a working portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    pub app_name: String,
    pub app_version: String,
    /// Local storage key holding the role identifier.
    pub storage_key: String,
    /// Simulated latency between submitting a login form and entering the portal.
    pub login_delay_ms: u64,
    /// Simulated latency before a generated report is offered for download.
    pub report_delay_ms: u64,
    /// Redirect guests to `/login` when they open a protected page.
    /// Off by default: protected pages have always rendered without a role.
    pub route_guard: bool,
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            app_name: "SAI-AI Portal".to_string(),
            app_version: "v2.1".to_string(),
            storage_key: "userRole".to_string(),
            login_delay_ms: 1500,
            report_delay_ms: 3000,
            route_guard: false,
            log_level: "info".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub portal: PortalConfig,
}

impl PortalConfig {
    /// Parse a `config.toml` document.
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.portal)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }

    /// Parse a `config.toml` document, falling back to defaults on error.
    pub fn from_toml_or_default(contents: &str) -> Self {
        Self::from_toml(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid portal config, using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = PortalConfig::from_toml("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.storage_key, "userRole");
        assert_eq!(config.login_delay_ms, 1500);
        assert_eq!(config.report_delay_ms, 3000);
        assert!(!config.route_guard);
        assert_eq!(config.report_delay(), Duration::from_secs(3));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = PortalConfig::from_toml(
            r#"
            [portal]
            route_guard = true
            report_delay_ms = 10
            "#,
        )
        .unwrap();
        assert!(config.route_guard);
        assert_eq!(config.report_delay_ms, 10);
        assert_eq!(config.app_version, "v2.1");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = PortalConfig::from_toml("[portal\nroute_guard = ").unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::Config);
        assert_eq!(
            PortalConfig::from_toml_or_default("[portal\n"),
            PortalConfig::default()
        );
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(PortalConfig::from_toml("[portal]\nlogin_delay_ms = \"slow\"").is_err());
    }
}
