use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Durable role storage could not be read or written.
    Storage,
    InvalidRole,
    ValidationError,
    Serialization,
    /// A synthesized file could not be handed to the download sink.
    Export,
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::InvalidRole => write!(f, "InvalidRole"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Serialization => write!(f, "Serialization"),
            AppErrorKind::Export => write!(f, "Export"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured error shared by the portal crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn invalid_role(value: &str) -> Self {
        Self::new(
            AppErrorKind::InvalidRole,
            format!("'{value}' is not a recognized role"),
        )
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Serialization, message)
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Export, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    /// Message suitable for a toast description.
    ///
    /// Storage and serialization details are not meaningful to users, so
    /// those kinds collapse to a generic retry hint.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError | AppErrorKind::InvalidRole => self.message.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::storage(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_role_names_the_value() {
        let err = AppError::invalid_role("superuser");
        assert_eq!(err.kind, AppErrorKind::InvalidRole);
        assert!(err.message.contains("superuser"));
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "Email is required".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn friendly_message_hides_storage_details() {
        let err = AppError::storage("quota exceeded on key userRole");
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
        let err = AppError::validation("Name is required", HashMap::new());
        assert_eq!(err.friendly_message(), "Name is required");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::export("download blocked");
        assert_eq!(format!("{}", err), "Export: download blocked");
    }

    #[test]
    fn io_error_converts_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert_eq!(err.kind, AppErrorKind::Storage);
    }

    #[test]
    fn field_errors_omitted_from_json_when_empty() {
        let json = serde_json::to_string(&AppError::config("bad level")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
