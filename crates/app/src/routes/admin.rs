use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCheck, LdDatabase, LdMail, LdPlus, LdServer, LdSettings, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    format_thousands, HealthTone, NewOfficial, Official, OfficialStatus, ADMIN_QUICK_ACTIONS,
    DEPARTMENTS, OFFICIAL_ROLES, SYSTEM_METRICS, SYSTEM_SETTINGS,
};
use shared_ui::{
    select_options, Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonSize,
    ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FormSelect,
    Input, MetricBar, PageHeader, SwitchRow,
};

pub fn official_status_variant(status: OfficialStatus) -> BadgeVariant {
    match status {
        OfficialStatus::Active => BadgeVariant::Success,
        OfficialStatus::Inactive => BadgeVariant::Secondary,
    }
}

#[component]
fn HealthCard(
    title: String,
    value: String,
    caption: String,
    tone: String,
    #[props(default)] footnote: Option<String>,
    icon: Element,
) -> Element {
    rsx! {
        Card { class: "health-card",
            CardContent {
                div { class: "health-card-head",
                    span { class: "health-card-title", "{title}" }
                    span { class: "health-card-icon", "data-tone": "{tone}", {icon} }
                }
                p { class: "health-card-value", "{value}" }
                p { class: "health-card-caption", "data-tone": "{tone}", "{caption}" }
                if let Some(footnote) = footnote {
                    p { class: "health-card-footnote", "{footnote}" }
                }
            }
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let mut officials = use_signal(shared_types::seed_officials);
    let mut show_form = use_signal(|| false);
    let mut form_name = use_signal(String::new);
    let mut form_email = use_signal(String::new);
    let mut form_role = use_signal(String::new);
    let mut form_department = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut settings =
        use_signal(|| SYSTEM_SETTINGS.iter().map(|s| s.enabled_by_default).collect::<Vec<bool>>());

    let read_form = move || NewOfficial {
        name: form_name(),
        email: form_email(),
        role: form_role(),
        department: form_department(),
    };

    let mut reset_form = move || {
        form_name.set(String::new());
        form_email.set(String::new());
        form_role.set(String::new());
        form_department.set(String::new());
        field_errors.set(HashMap::new());
    };

    let handle_create = move |_| {
        let result = read_form().into_official(&officials.read());
        match result {
            Ok(official) => {
                tracing::info!(id = %official.id, role = %official.role, "official account created");
                notice.set(Some(format!("Account created for {} ({})", official.name, official.id)));
                officials.write().push(official);
                reset_form();
                show_form.set(false);
            }
            Err(e) => {
                notice.set(None);
                field_errors.set(e.field_errors);
            }
        }
    };

    let handle_invite = move |_| {
        let form = read_form();
        let email = form.email.trim().to_string();
        match form.into_official(&officials.read()) {
            Ok(_) => {
                tracing::info!(%email, "invitation prepared");
                notice.set(Some(format!("Invitation sent to {email}")));
                reset_form();
                show_form.set(false);
            }
            Err(e) => {
                notice.set(None);
                field_errors.set(e.field_errors);
            }
        }
    };

    let metrics = SYSTEM_METRICS;
    let errors = field_errors.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "page admin-page",
            PageHeader {
                title: "System Administration",
                subtitle: "Manage users, monitor system health, and configure platform settings".to_string(),
                actions: rsx! {
                    Badge { variant: BadgeVariant::Success,
                        Icon { icon: LdCheck, width: 12, height: 12 }
                        "All Systems Operational"
                    }
                },
            }

            div { class: "stat-grid",
                HealthCard {
                    title: "Server Health",
                    value: "{metrics.server_health}%",
                    caption: "Excellent",
                    tone: HealthTone::for_value(metrics.server_health).as_str(),
                    icon: rsx! { Icon { icon: LdServer, width: 20, height: 20 } },
                }
                HealthCard {
                    title: "DB Load",
                    value: "{metrics.database_load}%",
                    caption: "Normal",
                    tone: "primary",
                    icon: rsx! { Icon { icon: LdDatabase, width: 20, height: 20 } },
                }
                HealthCard {
                    title: "AI Processing",
                    value: "{metrics.ai_processing}%",
                    caption: "High Load",
                    tone: "warning",
                    icon: rsx! { Icon { icon: LdActivity, width: 20, height: 20 } },
                }
                HealthCard {
                    title: "Active Users",
                    value: "{metrics.active_users}",
                    caption: "Real-time",
                    tone: "accent",
                    footnote: format!("{} requests today", format_thousands(metrics.total_requests)),
                    icon: rsx! { Icon { icon: LdUsers, width: 20, height: 20 } },
                }
            }

            Card {
                CardHeader {
                    div { class: "card-title-row",
                        div {
                            CardTitle {
                                Icon { icon: LdShield, width: 18, height: 18 }
                                "User Management"
                            }
                            CardDescription { "Officials with access to the portal" }
                        }
                        Button {
                            variant: if show_form() { ButtonVariant::Outline } else { ButtonVariant::Primary },
                            onclick: move |_| {
                                let open = !show_form();
                                show_form.set(open);
                                if !open {
                                    reset_form();
                                }
                            },
                            Icon { icon: LdPlus, width: 16, height: 16 }
                            "Add Official"
                        }
                    }
                }
                CardContent {
                    if let Some(message) = notice() {
                        div { class: "admin-notice",
                            Icon { icon: LdCheck, width: 14, height: 14 }
                            span { "{message}" }
                        }
                    }

                    if show_form() {
                        div { class: "official-form",
                            h4 { class: "official-form-title", "Add New Official" }
                            div { class: "official-form-grid",
                                Input {
                                    label: "Full Name",
                                    placeholder: "Enter full name",
                                    value: form_name(),
                                    error: errors.get("name").cloned(),
                                    on_input: move |e: FormEvent| form_name.set(e.value()),
                                }
                                Input {
                                    label: "Email Address",
                                    input_type: "email",
                                    placeholder: "official@sai.gov.in",
                                    value: form_email(),
                                    error: errors.get("email").cloned(),
                                    on_input: move |e: FormEvent| form_email.set(e.value()),
                                }
                                FormSelect {
                                    id: "official-role",
                                    label: "Role",
                                    placeholder: "Select role".to_string(),
                                    value: form_role(),
                                    options: select_options(OFFICIAL_ROLES),
                                    error: errors.get("role").cloned(),
                                    onchange: move |value: String| form_role.set(value),
                                }
                                FormSelect {
                                    id: "official-department",
                                    label: "Department",
                                    placeholder: "Select department".to_string(),
                                    value: form_department(),
                                    options: select_options(DEPARTMENTS),
                                    error: errors.get("department").cloned(),
                                    onchange: move |value: String| form_department.set(value),
                                }
                            }
                            div { class: "official-form-actions",
                                Button { onclick: handle_create, "Create Account" }
                                Button { variant: ButtonVariant::Outline, onclick: handle_invite,
                                    Icon { icon: LdMail, width: 16, height: 16 }
                                    "Send Invitation"
                                }
                            }
                        }
                    }

                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Official" }
                            DataTableColumn { "Role & Department" }
                            DataTableColumn { "Last Active" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            for official in officials.read().iter().cloned() {
                                OfficialRow { key: "{official.id}", official }
                            }
                        }
                    }
                }
            }

            div { class: "admin-config-grid",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdSettings, width: 18, height: 18 }
                            "System Configuration"
                        }
                        CardDescription { "Performance Settings" }
                    }
                    CardContent {
                        div { class: "settings-list",
                            for (index, setting) in SYSTEM_SETTINGS.iter().enumerate() {
                                SwitchRow {
                                    key: "{setting.key}",
                                    title: setting.title,
                                    description: setting.description,
                                    checked: settings.read().get(index).copied().unwrap_or(false),
                                    on_change: move |enabled: bool| {
                                        if let Some(slot) = settings.write().get_mut(index) {
                                            *slot = enabled;
                                        }
                                        tracing::info!(setting = SYSTEM_SETTINGS[index].key, enabled, "setting changed");
                                    },
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "System Status" }
                        CardDescription { "Live service indicators" }
                    }
                    CardContent {
                        div { class: "metric-stack",
                            MetricBar {
                                label: "API Latency",
                                value: f64::from(metrics.api_latency_ms) / 10.0,
                                display: format!("{}ms", metrics.api_latency_ms),
                            }
                            MetricBar {
                                label: "Error Rate",
                                value: metrics.error_rate,
                                display: format!("{}%", metrics.error_rate),
                            }
                            MetricBar { label: "Storage Used", value: metrics.storage_used }
                        }
                        h4 { class: "quick-actions-title", "Quick Actions" }
                        div { class: "quick-actions",
                            for action in ADMIN_QUICK_ACTIONS.iter() {
                                Button {
                                    key: "{action}",
                                    variant: ButtonVariant::Outline,
                                    full_width: true,
                                    onclick: move |_| tracing::info!(action = *action, "admin quick action"),
                                    "{action}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OfficialRow(official: Official) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "official-cell",
                    Avatar { class: "official-avatar",
                        AvatarFallback { "{official.initials()}" }
                    }
                    div {
                        p { class: "official-name", "{official.name}" }
                        p { class: "official-email", "{official.email}" }
                    }
                }
            }
            DataTableCell {
                p { class: "official-role", "{official.role}" }
                p { class: "official-department", "{official.department}" }
            }
            DataTableCell { "{official.last_active}" }
            DataTableCell {
                Badge { variant: official_status_variant(official.status), "{official.status.label()}" }
            }
            DataTableCell {
                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Icon,
                    Icon { icon: LdSettings, width: 16, height: 16 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_lists_seeded_officials_with_form_closed() {
        let html = dioxus_ssr::render_element(rsx! { Admin {} });
        for official in shared_types::seed_officials() {
            assert!(html.contains(&official.name));
        }
        assert!(html.contains("15,847 requests today"));
        assert!(html.contains("145ms"));
        assert!(!html.contains("Add New Official"));
    }

    #[test]
    fn inactive_officials_use_the_muted_badge() {
        assert_eq!(official_status_variant(OfficialStatus::Inactive), BadgeVariant::Secondary);
    }
}
