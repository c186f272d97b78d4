use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdAward, LdClock, LdDownload, LdEye, LdMapPin, LdPlus, LdSearch, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    select_value, Athlete, AthleteFilter, AthleteStatus, PerformanceBand, ATHLETES, ATHLETE_SPORTS,
    ATHLETE_STATUSES, DIRECTORY_STATS,
};
use shared_ui::{
    initials, Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant,
    Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect,
    Input, PageHeader, StatCard,
};

const COLUMNS: usize = 7;

pub fn status_variant(status: AthleteStatus) -> BadgeVariant {
    match status {
        AthleteStatus::Active => BadgeVariant::Success,
        AthleteStatus::Pending => BadgeVariant::Warning,
        AthleteStatus::Review => BadgeVariant::Accent,
    }
}

fn sport_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All Sports".to_string()))
        .chain(ATHLETE_SPORTS.iter().map(|s| (s.to_string(), s.to_string())))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All Status".to_string()))
        .chain(
            ATHLETE_STATUSES
                .iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        )
        .collect()
}

#[component]
fn StatIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon { icon: LdUsers, width: 22, height: 22 } },
        1 => rsx! { Icon { icon: LdActivity, width: 22, height: 22 } },
        2 => rsx! { Icon { icon: LdClock, width: 22, height: 22 } },
        _ => rsx! { Icon { icon: LdAward, width: 22, height: 22 } },
    }
}

#[component]
pub fn Athletes() -> Element {
    let mut filter = use_signal(AthleteFilter::default);

    let filtered: Vec<Athlete> = filter.read().apply(ATHLETES).into_iter().copied().collect();
    let count = filtered.len();
    let sport_value = filter.read().sport.clone().unwrap_or_else(|| "all".to_string());
    let status_value = filter
        .read()
        .status
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| "all".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./athletes.css") }

        div { class: "page athletes-page",
            PageHeader {
                title: "Athlete Management",
                subtitle: "Manage and monitor athlete profiles and performance data".to_string(),
                actions: rsx! {
                    Button { variant: ButtonVariant::Outline,
                        Icon { icon: LdDownload, width: 16, height: 16 }
                        "Export Data"
                    }
                    Button {
                        Icon { icon: LdPlus, width: 16, height: 16 }
                        "Add New Athlete"
                    }
                },
            }

            div { class: "stat-grid",
                for (index, stat) in DIRECTORY_STATS.iter().enumerate() {
                    StatCard {
                        key: "{stat.label}",
                        label: stat.label,
                        value: stat.value,
                        note: stat.share.map(|share| format!("{share} of total")),
                        tone: stat.tone,
                        icon: rsx! { StatIcon { index } },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: LdSearch, width: 18, height: 18 }
                        "Search & Filter Athletes"
                    }
                    CardDescription { "Use filters to find specific athletes and their performance data" }
                }
                CardContent {
                    div { class: "athlete-filters",
                        div { class: "athlete-filter-search",
                            Input {
                                placeholder: "Search by name, ID, or specialization...",
                                value: filter.read().search.clone(),
                                on_input: move |e: FormEvent| filter.write().search = e.value(),
                                icon: rsx! { Icon { icon: LdSearch, width: 16, height: 16 } },
                            }
                        }
                        FormSelect {
                            id: "athlete-sport-filter",
                            value: sport_value,
                            options: sport_options(),
                            onchange: move |value: String| filter.write().sport = select_value(&value),
                        }
                        FormSelect {
                            id: "athlete-status-filter",
                            value: status_value,
                            options: status_options(),
                            onchange: move |value: String| {
                                filter.write().status = AthleteStatus::from_key(&value);
                            },
                        }
                        Button { variant: ButtonVariant::Outline, "More Filters" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Athletes Directory" }
                    CardDescription { "Showing {count} athletes matching your criteria" }
                }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Athlete" }
                            DataTableColumn { "Sport & Specialization" }
                            DataTableColumn { "Location" }
                            DataTableColumn { "Performance Score" }
                            DataTableColumn { "Last Assessment" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            for athlete in filtered {
                                AthleteRow { key: "{athlete.id}", athlete }
                            }
                            if count == 0 {
                                DataTableEmpty { columns: COLUMNS, "No athletes match the current filters." }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AthleteRow(athlete: Athlete) -> Element {
    let band = PerformanceBand::for_score(athlete.performance).as_str();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "athlete-cell",
                    Avatar { class: "athlete-avatar",
                        AvatarFallback { "{initials(athlete.name)}" }
                    }
                    div {
                        p { class: "athlete-name", "{athlete.name}" }
                        p { class: "athlete-meta", "{athlete.id} \u{2022} Age {athlete.age}" }
                    }
                }
            }
            DataTableCell {
                p { class: "athlete-sport", "{athlete.sport}" }
                p { class: "athlete-meta", "{athlete.specialization}" }
            }
            DataTableCell {
                span { class: "athlete-location",
                    Icon { icon: LdMapPin, width: 14, height: 14 }
                    "{athlete.location}"
                }
            }
            DataTableCell {
                span { class: "athlete-score", "data-band": band, "{athlete.performance}%" }
                span { class: "athlete-meta", " ({athlete.assessments} tests)" }
            }
            DataTableCell { "{athlete.last_assessment}" }
            DataTableCell {
                Badge { variant: status_variant(athlete.status), "{athlete.status.label()}" }
            }
            DataTableCell {
                Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small,
                    Icon { icon: LdEye, width: 14, height: 14 }
                    "View"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_selects_start_with_all() {
        let sports = sport_options();
        assert_eq!(sports[0], ("all".to_string(), "All Sports".to_string()));
        assert_eq!(sports.len(), ATHLETE_SPORTS.len() + 1);

        let statuses = status_options();
        assert_eq!(statuses[0].1, "All Status");
        assert_eq!(statuses[3], ("review".to_string(), "Review".to_string()));
    }

    #[test]
    fn directory_renders_every_athlete_unfiltered() {
        let html = dioxus_ssr::render_element(rsx! { Athletes {} });
        assert!(html.contains(&format!("Showing {} athletes matching your criteria", ATHLETES.len())));
        for athlete in ATHLETES {
            assert!(html.contains(athlete.name));
        }
        assert!(!html.contains("No athletes match"));
    }
}
