use std::time::Duration;

use crate::platform::use_platform;
use crate::routes::Route;
use crate::session::{use_session, Session};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowLeft, LdBuilding, LdLock, LdMail, LdShield, LdTrophy, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{official_login_profile, Latency, LoginProfile, PortalConfig, Role, ALL_ROLES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Input,
};

/// Path of the role-specific sign-in form.
fn login_route(role: Role) -> Route {
    match role {
        Role::Athlete => Route::UserLogin {},
        Role::SystemAdmin => Route::AdminLogin {},
        Role::GovernmentOfficial => Route::GovtLogin {},
        Role::SportsCoordinator => Route::CoordinatorLogin {},
    }
}

#[component]
fn RoleGlyph(role: Role, size: u32) -> Element {
    match role {
        Role::Athlete => rsx! { Icon { icon: LdUser, width: size, height: size } },
        Role::SystemAdmin => rsx! { Icon { icon: LdShield, width: size, height: size } },
        Role::GovernmentOfficial => rsx! { Icon { icon: LdBuilding, width: size, height: size } },
        Role::SportsCoordinator => rsx! { Icon { icon: LdUsers, width: size, height: size } },
    }
}

/// Store `role` when the form carries one, wait out `delay` and return the
/// page to open next.
///
/// The role is written before the wait starts.
pub async fn complete_login(
    session: &Session,
    role: Option<Role>,
    latency: &dyn Latency,
    delay: Duration,
) -> Route {
    if let Some(role) = role {
        if let Err(e) = session.login(role) {
            tracing::warn!(error = %e, role = %role, "could not persist role");
        }
    }
    tracing::info!(role = ?role, "signing in");
    latency.wait(delay).await;
    Route::Dashboard {}
}

/// Role selection page at `/login`.
#[component]
pub fn Login() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-brand-panel",
                div { class: "login-brand-mark",
                    Icon { icon: LdTrophy, width: 40, height: 40 }
                }
                h1 { class: "login-brand-title", "SAI-AI Portal" }
                p { class: "login-brand-tagline",
                    "Advanced Analytics Platform for Sports Talent Assessment"
                }
                div { class: "login-brand-badges",
                    Badge { variant: BadgeVariant::Secondary, "Multi-Role Access" }
                    Badge { variant: BadgeVariant::Secondary, "Secure Platform" }
                    Badge { variant: BadgeVariant::Secondary, "Role-Based Dashboard" }
                }
            }

            div { class: "login-content-panel",
                div { class: "login-selection",
                    div { class: "login-selection-heading",
                        h2 { "Select Your Role" }
                        p { "Choose your login type to access the appropriate dashboard" }
                    }
                    div { class: "role-card-grid",
                        for role in ALL_ROLES.iter().copied() {
                            RoleCard { key: "{role}", role }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleCard(role: Role) -> Element {
    let profile = role.login_profile();
    let tone = role.color().as_str();

    rsx! {
        div { class: "role-card", "data-tone": tone,
            Card { elevated: true,
                CardHeader {
                    div { class: "role-card-icon", "data-tone": tone,
                        RoleGlyph { role, size: 28 }
                    }
                    CardTitle { "{profile.card_title}" }
                    CardDescription { "{profile.card_description}" }
                }
                CardContent {
                    p { class: "role-card-privileges-title", "Access Privileges:" }
                    ul { class: "role-card-privileges",
                        for privilege in profile.privileges {
                            li { key: "{privilege}", "{privilege}" }
                        }
                    }
                }
                CardFooter {
                    Button {
                        full_width: true,
                        onclick: move |_| {
                            navigator().push(login_route(role));
                        },
                        "Login as {profile.card_title}"
                    }
                }
            }
        }
    }
}

/// Email and password sign-in shared by every role form.
///
/// Credentials are not checked. Submitting stores the profile's role (if it
/// has one), waits out the configured delay and opens the dashboard.
#[component]
pub fn RoleLoginForm(profile: LoginProfile) -> Element {
    let config: PortalConfig = use_context();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let platform = use_platform();
    let role = profile.role;
    let delay = config.login_delay();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        let session = session.clone();
        let platform = platform.clone();
        spawn(async move {
            let next = complete_login(&session, role, platform.latency.as_ref(), delay).await;
            loading.set(false);
            navigator().push(next);
        });
    };

    let sample_email = profile.sample_email;
    let sample_password = profile.sample_password;
    let tone = role.map(|r| r.color().as_str()).unwrap_or("blue");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-brand-panel", "data-tone": tone,
                div { class: "login-brand-mark",
                    if let Some(role) = role {
                        RoleGlyph { role, size: 40 }
                    } else {
                        Icon { icon: LdTrophy, width: 40, height: 40 }
                    }
                }
                h1 { class: "login-brand-title", "SAI-AI Portal" }
                p { class: "login-brand-tagline", "{profile.tagline}" }
                div { class: "login-brand-badges",
                    for highlight in profile.highlights {
                        Badge { key: "{highlight}", variant: BadgeVariant::Secondary, "{highlight}" }
                    }
                }
            }

            div { class: "login-content-panel",
                div { class: "login-form-column",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            navigator().push(Route::Login {});
                        },
                        Icon { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back to role selection"
                    }

                    Card { class: "login-form-card", elevated: true,
                        CardHeader {
                            CardTitle { "{profile.form_title}" }
                            CardDescription { "{profile.form_description}" }
                        }
                        CardContent {
                            form { class: "login-form", onsubmit: handle_submit,
                                Input {
                                    label: profile.email_label,
                                    input_type: "email",
                                    placeholder: profile.email_placeholder,
                                    value: email(),
                                    required: true,
                                    on_input: move |e: FormEvent| email.set(e.value()),
                                    icon: rsx! { Icon { icon: LdMail, width: 16, height: 16 } },
                                }
                                Input {
                                    label: profile.password_label,
                                    input_type: "password",
                                    placeholder: profile.password_placeholder,
                                    value: password(),
                                    required: true,
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                    icon: rsx! { Icon { icon: LdLock, width: 16, height: 16 } },
                                }

                                div { class: "login-access-notice", "{profile.access_notice}" }

                                if !sample_email.is_empty() {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        full_width: true,
                                        onclick: move |_| {
                                            email.set(sample_email.to_string());
                                            password.set(sample_password.to_string());
                                        },
                                        "Use Sample Credentials"
                                    }
                                }

                                Button {
                                    button_type: "submit",
                                    full_width: true,
                                    disabled: loading(),
                                    if loading() {
                                        "{profile.pending_label}"
                                    } else {
                                        "{profile.submit_label}"
                                    }
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
pub fn UserLogin() -> Element {
    rsx! { RoleLoginForm { profile: Role::Athlete.login_profile() } }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! { RoleLoginForm { profile: Role::SystemAdmin.login_profile() } }
}

#[component]
pub fn GovtLogin() -> Element {
    rsx! { RoleLoginForm { profile: Role::GovernmentOfficial.login_profile() } }
}

#[component]
pub fn CoordinatorLogin() -> Element {
    rsx! { RoleLoginForm { profile: Role::SportsCoordinator.login_profile() } }
}

/// General official sign-in; leaves any stored role untouched.
#[component]
pub fn OriginalLogin() -> Element {
    rsx! { RoleLoginForm { profile: official_login_profile() } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_role_card_targets_its_form() {
        let paths: Vec<String> = ALL_ROLES.iter().map(|r| login_route(*r).to_string()).collect();
        assert_eq!(
            paths,
            vec!["/login/user", "/login/admin", "/login/govt", "/login/coordinator"]
        );
    }

    #[test]
    fn selection_page_lists_all_roles() {
        let html = dioxus_ssr::render_element(rsx! { Login {} });
        assert!(html.contains("Select Your Role"));
        for role in ALL_ROLES {
            assert!(html.contains(&format!("Login as {}", role.login_profile().card_title)));
        }
        assert_eq!(html.matches("Access Privileges:").count(), 4);
    }
}
