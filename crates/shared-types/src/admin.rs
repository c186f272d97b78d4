use std::collections::HashMap;

use crate::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfficialStatus {
    Active,
    Inactive,
}

impl OfficialStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OfficialStatus::Active => "Active",
            OfficialStatus::Inactive => "Inactive",
        }
    }
}

/// A staff account listed in the admin panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Official {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub last_active: String,
    pub status: OfficialStatus,
    pub permissions: Vec<String>,
}

impl Official {
    /// Initials for the avatar fallback, e.g. "Dr. Rajesh Kumar" -> "DRK".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

fn official(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    last_active: &str,
    status: OfficialStatus,
    permissions: &[&str],
) -> Official {
    Official {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        last_active: last_active.to_string(),
        status,
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

/// The officials table as first shown.
pub fn seed_officials() -> Vec<Official> {
    vec![
        official(
            "OFF001",
            "Dr. Rajesh Kumar",
            "rajesh.kumar@sai.gov.in",
            "Senior Coach",
            "Athletics",
            "2024-01-15 14:30",
            OfficialStatus::Active,
            &["view", "verify", "report"],
        ),
        official(
            "OFF002",
            "Ms. Priya Singh",
            "priya.singh@sai.gov.in",
            "Performance Analyst",
            "Swimming",
            "2024-01-15 12:45",
            OfficialStatus::Active,
            &["view", "analyze", "report"],
        ),
        official(
            "OFF003",
            "Mr. Arjun Mehta",
            "arjun.mehta@sai.gov.in",
            "Regional Coordinator",
            "Multi-Sport",
            "2024-01-14 16:20",
            OfficialStatus::Inactive,
            &["view", "manage", "admin"],
        ),
    ]
}

/// `(value, label)` pairs for the add-official role select.
pub const OFFICIAL_ROLES: &[(&str, &str)] = &[
    ("coach", "Senior Coach"),
    ("analyst", "Performance Analyst"),
    ("coordinator", "Regional Coordinator"),
    ("admin", "System Administrator"),
];

/// `(value, label)` pairs for the add-official department select.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("athletics", "Athletics"),
    ("swimming", "Swimming"),
    ("gymnastics", "Gymnastics"),
    ("multi-sport", "Multi-Sport"),
];

fn label_for(options: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    options.iter().find(|(v, _)| *v == value).map(|(_, l)| *l)
}

/// Values typed into the add-official form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOfficial {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl NewOfficial {
    /// Validate the form and build the table row it would add.
    ///
    /// The account only exists in the admin panel's local list; ids continue
    /// the `OFFnnn` sequence of `existing`.
    pub fn into_official(self, existing: &[Official]) -> Result<Official, AppError> {
        let mut field_errors = HashMap::new();
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        if name.is_empty() {
            field_errors.insert("name".to_string(), "Full name is required".to_string());
        }
        if !email.contains('@') {
            field_errors.insert("email".to_string(), "Enter a valid email address".to_string());
        }
        let role = label_for(OFFICIAL_ROLES, &self.role);
        if role.is_none() {
            field_errors.insert("role".to_string(), "Select a role".to_string());
        }
        let department = label_for(DEPARTMENTS, &self.department);
        if department.is_none() {
            field_errors.insert("department".to_string(), "Select a department".to_string());
        }

        match (role, department) {
            (Some(role), Some(department)) if field_errors.is_empty() => Ok(Official {
                id: next_official_id(existing),
                name,
                email,
                role: role.to_string(),
                department: department.to_string(),
                last_active: "Never".to_string(),
                status: OfficialStatus::Active,
                permissions: vec!["view".to_string()],
            }),
            _ => Err(AppError::validation("Please fix the highlighted fields", field_errors)),
        }
    }
}

/// Next id in the `OFFnnn` sequence.
pub fn next_official_id(existing: &[Official]) -> String {
    let max = existing
        .iter()
        .filter_map(|o| o.id.strip_prefix("OFF"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("OFF{:03}", max + 1)
}

/// Platform health figures for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemMetrics {
    pub server_health: f64,
    pub database_load: f64,
    pub ai_processing: f64,
    pub storage_used: f64,
    pub api_latency_ms: u32,
    pub active_users: u32,
    pub total_requests: u32,
    pub error_rate: f64,
}

pub const SYSTEM_METRICS: SystemMetrics = SystemMetrics {
    server_health: 99.2,
    database_load: 67.0,
    ai_processing: 89.0,
    storage_used: 73.0,
    api_latency_ms: 145,
    active_users: 23,
    total_requests: 15847,
    error_rate: 0.3,
};

/// Colour band for a health percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTone {
    Healthy,
    Elevated,
    Critical,
}

impl HealthTone {
    pub fn for_value(value: f64) -> Self {
        if value >= 95.0 {
            HealthTone::Healthy
        } else if value >= 80.0 {
            HealthTone::Elevated
        } else {
            HealthTone::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthTone::Healthy => "success",
            HealthTone::Elevated => "warning",
            HealthTone::Critical => "destructive",
        }
    }
}

/// Group digits with commas, e.g. 15847 -> "15,847".
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A toggle in the "Performance Settings" block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemSetting {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub enabled_by_default: bool,
}

pub const SYSTEM_SETTINGS: &[SystemSetting] = &[
    SystemSetting {
        key: "auto_verification",
        title: "AI Auto-Verification",
        description: "Automatically approve high confidence assessments",
        enabled_by_default: true,
    },
    SystemSetting {
        key: "realtime_notifications",
        title: "Real-time Notifications",
        description: "Push alerts for critical events",
        enabled_by_default: true,
    },
    SystemSetting {
        key: "data_backup",
        title: "Data Backup",
        description: "Automatic daily backups",
        enabled_by_default: true,
    },
];

pub const ADMIN_QUICK_ACTIONS: &[&str] = &["Export System Logs", "Security Audit", "System Maintenance"];
