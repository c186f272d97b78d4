use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// Access level of the signed-in user.
///
/// The absence of a role (`Option<Role>::None`) means the visitor is a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    Athlete,
    #[serde(rename = "admin")]
    SystemAdmin,
    #[serde(rename = "govt")]
    GovernmentOfficial,
    #[serde(rename = "coordinator")]
    SportsCoordinator,
}

/// All roles in the order the role selection page lists them.
pub const ALL_ROLES: &[Role] = &[
    Role::Athlete,
    Role::SystemAdmin,
    Role::GovernmentOfficial,
    Role::SportsCoordinator,
];

/// Colour used for a role's badge and login accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleColor {
    Blue,
    Red,
    Green,
    Orange,
    Gray,
}

impl RoleColor {
    /// CSS token appended to `role-color-` class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleColor::Blue => "blue",
            RoleColor::Red => "red",
            RoleColor::Green => "green",
            RoleColor::Orange => "orange",
            RoleColor::Gray => "gray",
        }
    }
}

impl Role {
    /// Identifier persisted in durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Athlete => "user",
            Role::SystemAdmin => "admin",
            Role::GovernmentOfficial => "govt",
            Role::SportsCoordinator => "coordinator",
        }
    }

    /// Parse a stored identifier. Unknown values yield `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::Athlete),
            "admin" => Some(Role::SystemAdmin),
            "govt" => Some(Role::GovernmentOfficial),
            "coordinator" => Some(Role::SportsCoordinator),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Athlete => "Athlete",
            Role::SystemAdmin => "System Admin",
            Role::GovernmentOfficial => "Government Official",
            Role::SportsCoordinator => "Sports Coordinator",
        }
    }

    pub fn color(&self) -> RoleColor {
        match self {
            Role::Athlete => RoleColor::Blue,
            Role::SystemAdmin => RoleColor::Red,
            Role::GovernmentOfficial => RoleColor::Green,
            Role::SportsCoordinator => RoleColor::Orange,
        }
    }
}

/// Badge label for an optional role; guests read as "Guest".
pub fn role_display_name(role: Option<Role>) -> &'static str {
    role.map(|r| r.display_name()).unwrap_or("Guest")
}

/// Badge colour for an optional role; guests are gray.
pub fn role_color(role: Option<Role>) -> RoleColor {
    role.map(|r| r.color()).unwrap_or(RoleColor::Gray)
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_key(s).ok_or_else(|| AppError::invalid_role(s))
    }
}

// ---------------------------------------------------------------------------
// Login presentation
// ---------------------------------------------------------------------------

/// Copy shown on the role selection card and the role's login form.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginProfile {
    /// `None` for the general official login, which leaves the stored role untouched.
    pub role: Option<Role>,
    /// Card title on the selection page, e.g. "Athlete/User".
    pub card_title: &'static str,
    pub card_description: &'static str,
    pub privileges: [&'static str; 3],
    /// Title of the login form card.
    pub form_title: &'static str,
    pub form_description: &'static str,
    /// Line under the portal name on the branding panel.
    pub tagline: &'static str,
    pub highlights: [&'static str; 2],
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub password_label: &'static str,
    pub password_placeholder: &'static str,
    pub access_notice: &'static str,
    /// Prefilled by "Use Sample Credentials"; empty hides the button.
    pub sample_email: &'static str,
    pub sample_password: &'static str,
    pub submit_label: &'static str,
    /// Submit button text while the login delay runs.
    pub pending_label: &'static str,
}

impl Role {
    pub fn login_profile(&self) -> LoginProfile {
        match self {
            Role::Athlete => LoginProfile {
                role: Some(*self),
                card_title: "Athlete/User",
                card_description: "Access your performance records and assessments",
                privileges: ["View personal records", "Submit assessments", "Track progress"],
                form_title: "Athlete Login",
                form_description: "Access your personal performance dashboard",
                tagline: "Athlete Portal - Track Your Performance Journey",
                highlights: ["Personal Records", "Progress Tracking"],
                email_label: "Email Address",
                email_placeholder: "athlete@example.com",
                password_label: "Password",
                password_placeholder: "Enter your password",
                access_notice: "Athlete access to personal records and benchmarks",
                sample_email: "athlete@example.com",
                sample_password: "athlete123",
                submit_label: "Access My Dashboard",
                pending_label: "Signing In...",
            },
            Role::SystemAdmin => LoginProfile {
                role: Some(*self),
                card_title: "System Admin",
                card_description: "Full system administration and management",
                privileges: ["Full system access", "User management", "System configuration"],
                form_title: "Admin Login",
                form_description: "Administrative access to system management",
                tagline: "System Administration - Full Platform Control",
                highlights: ["User Management", "System Configuration"],
                email_label: "Admin Email",
                email_placeholder: "admin@sai.gov.in",
                password_label: "Admin Password",
                password_placeholder: "Enter admin password",
                access_notice: "Restricted administrator access only",
                sample_email: "admin@sai.gov.in",
                sample_password: "admin123",
                submit_label: "Access Admin Panel",
                pending_label: "Authenticating...",
            },
            Role::GovernmentOfficial => LoginProfile {
                role: Some(*self),
                card_title: "Government Official",
                card_description: "Policy oversight and strategic decisions",
                privileges: ["Policy oversight", "Regional analytics", "Strategic reports"],
                form_title: "Government Login",
                form_description: "Official access for policy makers and government officials",
                tagline: "Government Dashboard - Policy & Strategic Overview",
                highlights: ["Policy Oversight", "Strategic Reports"],
                email_label: "Official Email",
                email_placeholder: "official@gov.in",
                password_label: "Secure Password",
                password_placeholder: "Enter government credentials",
                access_notice: "Authorized government official access only",
                sample_email: "official@gov.in",
                sample_password: "govt123",
                submit_label: "Access Dashboard",
                pending_label: "Verifying Credentials...",
            },
            Role::SportsCoordinator => LoginProfile {
                role: Some(*self),
                card_title: "Sports Coordinator",
                card_description: "Manage athletes and coordinate assessments",
                privileges: [
                    "Athlete management",
                    "Assessment coordination",
                    "Performance tracking",
                ],
                form_title: "Sports Coordinator",
                form_description: "Coordinate athletes and manage performance assessments",
                tagline: "Sports Coordinator - Manage Athletes & Assessments",
                highlights: ["Athlete Management", "Performance Tracking"],
                email_label: "Coordinator Email",
                email_placeholder: "coordinator@sai.gov.in",
                password_label: "Password",
                password_placeholder: "Enter coordinator password",
                access_notice: "Sports coordination and athlete management access",
                sample_email: "coordinator@sai.gov.in",
                sample_password: "coord123",
                submit_label: "Access Coordinator Panel",
                pending_label: "Authenticating...",
            },
        }
    }
}

/// The general official sign-in at `/login/original`.
pub fn official_login_profile() -> LoginProfile {
    LoginProfile {
        role: None,
        card_title: "Official Login",
        card_description: "Access your SAI-AI dashboard with authorized credentials",
        privileges: ["AI-Powered", "Secure Platform", "Real-time Analysis"],
        form_title: "Official Login",
        form_description: "Access your SAI-AI dashboard with authorized credentials",
        tagline: "Advanced Analytics Platform for Sports Talent Assessment",
        highlights: ["AI-Powered", "Secure Platform"],
        email_label: "Official Email",
        email_placeholder: "official@sai.gov.in",
        password_label: "Password",
        password_placeholder: "Enter secure password",
        access_notice: "Need access? Contact your System Administrator",
        sample_email: "",
        sample_password: "",
        submit_label: "Access Dashboard",
        pending_label: "Authenticating...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_key(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(Role::from_key("superuser"), None);
        assert_eq!(Role::from_key(""), None);
        // identifiers are case-sensitive, as stored
        assert_eq!(Role::from_key("Admin"), None);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        assert_eq!("govt".parse::<Role>().unwrap(), Role::GovernmentOfficial);
        let err = "coach".parse::<Role>().unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::InvalidRole);
    }

    #[test]
    fn guest_display_and_color() {
        assert_eq!(role_display_name(None), "Guest");
        assert_eq!(role_color(None), RoleColor::Gray);
        assert_eq!(role_display_name(Some(Role::SystemAdmin)), "System Admin");
        assert_eq!(role_color(Some(Role::SportsCoordinator)), RoleColor::Orange);
    }

    #[test]
    fn serde_uses_storage_identifiers() {
        let json = serde_json::to_string(&Role::GovernmentOfficial).unwrap();
        assert_eq!(json, "\"govt\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::Athlete);
    }

    #[test]
    fn login_profiles_match_their_role() {
        for role in ALL_ROLES {
            let profile = role.login_profile();
            assert_eq!(profile.role, Some(*role));
            assert!(!profile.sample_email.is_empty());
        }
        assert_eq!(Role::GovernmentOfficial.login_profile().form_title, "Government Login");
        assert_eq!(
            Role::GovernmentOfficial.login_profile().pending_label,
            "Verifying Credentials..."
        );
    }

    #[test]
    fn official_login_has_no_role_or_samples() {
        let profile = official_login_profile();
        assert_eq!(profile.role, None);
        assert!(profile.sample_email.is_empty());
        assert_eq!(profile.submit_label, "Access Dashboard");
    }
}
