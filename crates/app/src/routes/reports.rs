use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClock, LdDownload, LdEye, LdFileText, LdTrendingUp,
};
use dioxus_free_icons::Icon;
use shared_types::{
    ReportBuilder, ReportRecord, ReportStatus, ReportTemplate, ANALYTICS_PREVIEW, DATE_RANGES,
    REGIONS, REPORT_HISTORY, REPORT_QUICK_STATS, REPORT_SPORTS, REPORT_TEMPLATES,
};
use shared_ui::{
    select_options, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, CheckboxField, FormSelect, PageHeader, StatCard,
};

pub fn report_status_variant(status: ReportStatus) -> BadgeVariant {
    match status {
        ReportStatus::Completed => BadgeVariant::Success,
        ReportStatus::Processing => BadgeVariant::Warning,
    }
}

/// One-line description of what the builder will produce.
pub fn builder_summary(builder: &ReportBuilder) -> Option<String> {
    let template = builder.template?;
    let range = builder
        .date_range
        .as_deref()
        .and_then(|key| DATE_RANGES.iter().find(|(value, _)| *value == key))
        .map_or("any period", |(_, label)| *label);
    let region = builder
        .region
        .as_deref()
        .and_then(|key| REGIONS.iter().find(|(value, _)| *value == key))
        .map_or("All Regions", |(_, label)| *label);
    let sports = if builder.sports.is_empty() {
        "all sports".to_string()
    } else {
        builder.sports.join(", ")
    };
    Some(format!("{template} \u{2022} {range} \u{2022} {region} \u{2022} {sports}"))
}

#[component]
pub fn Reports() -> Element {
    let mut builder = use_signal(ReportBuilder::default);
    let mut queued = use_signal(|| Option::<String>::None);

    let summary = builder_summary(&builder.read());
    let has_template = summary.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        div { class: "page reports-page",
            PageHeader {
                title: "Reports & Analytics",
                subtitle: "Generate comprehensive reports and analyze performance data".to_string(),
                actions: rsx! {
                    Button { variant: ButtonVariant::Outline,
                        Icon { icon: LdCalendar, width: 16, height: 16 }
                        "Schedule Report"
                    }
                },
            }

            div { class: "stat-grid",
                for stat in REPORT_QUICK_STATS.iter() {
                    StatCard { key: "{stat.label}", label: stat.label, value: stat.value, tone: stat.tone }
                }
            }

            div { class: "reports-grid",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdFileText, width: 18, height: 18 }
                            "Custom Report Builder"
                        }
                        CardDescription { "Pick a template, narrow the data and generate" }
                    }
                    CardContent {
                        div { class: "template-grid",
                            for template in REPORT_TEMPLATES.iter().copied() {
                                TemplateCard {
                                    key: "{template.title}",
                                    template,
                                    selected: builder.read().is_selected(template.title),
                                    on_select: move |title: &'static str| {
                                        let mut b = builder.write();
                                        b.template = if b.is_selected(title) { None } else { Some(title) };
                                    },
                                }
                            }
                        }

                        h4 { class: "builder-section-title", "Report Filters" }
                        div { class: "builder-filters",
                            FormSelect {
                                id: "report-date-range",
                                label: "Date Range",
                                placeholder: "Select time period".to_string(),
                                value: builder.read().date_range.clone().unwrap_or_default(),
                                options: select_options(DATE_RANGES),
                                onchange: move |value: String| builder.write().date_range = Some(value),
                            }
                            FormSelect {
                                id: "report-region",
                                label: "Regions",
                                placeholder: "Select regions".to_string(),
                                value: builder.read().region.clone().unwrap_or_default(),
                                options: select_options(REGIONS),
                                onchange: move |value: String| builder.write().region = Some(value),
                            }
                        }

                        h4 { class: "builder-section-title", "Sports Categories" }
                        div { class: "sport-checkboxes",
                            for sport in REPORT_SPORTS.iter().copied() {
                                CheckboxField {
                                    key: "{sport}",
                                    id: "report-sport-{sport}",
                                    label: sport,
                                    checked: builder.read().sports.contains(&sport),
                                    on_change: move |checked: bool| builder.write().set_sport(sport, checked),
                                }
                            }
                        }

                        div { class: "builder-actions",
                            Button {
                                disabled: !has_template,
                                onclick: move |_| {
                                    let summary = builder_summary(&builder.read());
                                    if let Some(summary) = summary {
                                        tracing::info!(%summary, "custom report queued");
                                        queued.set(Some(summary));
                                    }
                                },
                                Icon { icon: LdDownload, width: 16, height: 16 }
                                "Generate Report"
                            }
                            Button { variant: ButtonVariant::Outline, disabled: !has_template,
                                Icon { icon: LdEye, width: 16, height: 16 }
                                "Preview"
                            }
                            Button { variant: ButtonVariant::Ghost, "Save Template" }
                        }

                        if let Some(summary) = summary {
                            p { class: "builder-summary", "{summary}" }
                        }
                        if let Some(queued) = queued() {
                            div { class: "builder-queued",
                                Badge { variant: BadgeVariant::Success, "Queued" }
                                span { "{queued}" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdClock, width: 18, height: 18 }
                            "Recent Reports"
                        }
                        CardDescription { "Previously generated reports and exports" }
                    }
                    CardContent {
                        div { class: "report-history",
                            for record in REPORT_HISTORY.iter().copied() {
                                HistoryEntry { key: "{record.id}", record }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, full_width: true, "View All Reports" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: LdTrendingUp, width: 18, height: 18 }
                        "Analytics Dashboard Preview"
                    }
                    CardDescription { "Headline figures across all generated reports" }
                }
                CardContent {
                    div { class: "preview-strip",
                        for figure in ANALYTICS_PREVIEW.iter() {
                            div { key: "{figure.label}", class: "preview-figure", "data-tone": figure.tone,
                                p { class: "preview-value", "{figure.value}" }
                                p { class: "preview-label", "{figure.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TemplateCard(
    template: ReportTemplate,
    selected: bool,
    on_select: EventHandler<&'static str>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "template-card",
            "data-selected": if selected { "true" } else { "false" },
            onclick: move |_| on_select.call(template.title),
            div { class: "template-card-head",
                span { class: "template-card-title", "{template.title}" }
                Badge { variant: BadgeVariant::Outline, "{template.estimated_time}" }
            }
            p { class: "template-card-description", "{template.description}" }
        }
    }
}

#[component]
fn HistoryEntry(record: ReportRecord) -> Element {
    let completed = record.status == ReportStatus::Completed;

    rsx! {
        div { class: "history-entry",
            div { class: "history-text",
                p { class: "history-name", "{record.name}" }
                p { class: "history-meta",
                    "{record.kind} \u{2022} {record.date_generated} \u{2022} {record.size}"
                }
            }
            div { class: "history-actions",
                Badge { variant: report_status_variant(record.status), "{record.status.as_str()}" }
                if completed {
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small,
                        Icon { icon: LdEye, width: 14, height: 14 }
                        "View"
                    }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small,
                        Icon { icon: LdDownload, width: 14, height: 14 }
                        "Download"
                    }
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
    fn summary_needs_a_template() {
        assert_eq!(builder_summary(&ReportBuilder::default()), None);
    }

    #[test]
    fn summary_uses_option_labels() {
        let mut builder = ReportBuilder {
            template: Some("Benchmarking Analysis"),
            date_range: Some("last-3-months".to_string()),
            region: Some("west".to_string()),
            sports: Vec::new(),
        };
        builder.set_sport("Swimming", true);
        builder.set_sport("Athletics", true);
        assert_eq!(
            builder_summary(&builder).unwrap(),
            "Benchmarking Analysis \u{2022} Last 3 Months \u{2022} West Zone \u{2022} Swimming, Athletics"
        );
    }

    #[test]
    fn processing_reports_have_no_download() {
        let html = dioxus_ssr::render_element(rsx! { Reports {} });
        let completed = REPORT_HISTORY
            .iter()
            .filter(|r| r.status == ReportStatus::Completed)
            .count();
        assert_eq!(html.matches(">Download<").count(), completed);
        assert!(html.contains("Select time period"));
        assert!(html.contains("processing"));
    }
}
