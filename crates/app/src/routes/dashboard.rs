use crate::platform::use_platform;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdAward, LdDownload, LdTarget, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    generate_performance_report, ActivityStatus, PortalConfig, DASHBOARD_KPIS, PERFORMANCE_DATA,
    PERFORMANCE_METRICS, RECENT_ACTIVITY, SPORT_DISTRIBUTION,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, BarChart, Button, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, ChartSeries, MetricBar, PageHeader, PieChart, PieSlice,
    StatCard, ToastOptions,
};

/// Badge style for an activity feed entry.
pub fn activity_variant(status: ActivityStatus) -> BadgeVariant {
    match status {
        ActivityStatus::Verified => BadgeVariant::Success,
        ActivityStatus::Approved => BadgeVariant::Primary,
        ActivityStatus::Pending => BadgeVariant::Warning,
        ActivityStatus::Flagged => BadgeVariant::Destructive,
    }
}

const KPI_TONES: [&str; 4] = ["primary", "accent", "success", "warning"];

#[component]
fn KpiIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon { icon: LdUsers, width: 22, height: 22 } },
        1 => rsx! { Icon { icon: LdTarget, width: 22, height: 22 } },
        2 => rsx! { Icon { icon: LdAward, width: 22, height: 22 } },
        _ => rsx! { Icon { icon: LdActivity, width: 22, height: 22 } },
    }
}

#[component]
pub fn Dashboard() -> Element {
    let config: PortalConfig = use_context();
    let toast = use_toast();
    let platform = use_platform();
    let mut generating = use_signal(|| false);

    let delay = config.report_delay();
    let handle_generate = move |_| {
        if generating() {
            return;
        }
        generating.set(true);
        toast.info(
            "Generating Report".to_string(),
            ToastOptions::new().description("Please wait while we compile your performance analytics..."),
        );
        let platform = platform.clone();
        spawn(async move {
            let result = generate_performance_report(
                platform.latency.as_ref(),
                delay,
                platform.sink.as_ref(),
                chrono::Utc::now(),
            )
            .await;
            match result {
                Ok(_) => {
                    toast.success(
                        "Report Generated Successfully".to_string(),
                        ToastOptions::new()
                            .description("Your performance analytics report has been downloaded."),
                    );
                }
                Err(e) => {
                    tracing::error!(error = %e, "report generation failed");
                    toast.error(
                        "Report Generation Failed".to_string(),
                        ToastOptions::new()
                            .description("There was an error generating your report. Please try again."),
                    );
                }
            }
            generating.set(false);
        });
    };

    let labels: Vec<String> = PERFORMANCE_DATA.iter().map(|m| m.month.to_string()).collect();
    let series = vec![
        ChartSeries::new(
            "Assessments",
            "var(--primary)",
            PERFORMANCE_DATA.iter().map(|m| f64::from(m.assessments)).collect(),
        ),
        ChartSeries::new(
            "Athletes",
            "var(--accent)",
            PERFORMANCE_DATA.iter().map(|m| f64::from(m.athletes)).collect(),
        ),
    ];
    let slices: Vec<PieSlice> = SPORT_DISTRIBUTION
        .iter()
        .map(|s| PieSlice {
            label: s.name.to_string(),
            value: f64::from(s.value),
            color: s.color.to_string(),
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "page dashboard-page",
            PageHeader {
                title: "Performance Dashboard",
                subtitle: "Real-time analytics and athlete performance insights".to_string(),
                actions: rsx! {
                    Badge { variant: BadgeVariant::Success, class: "status-dot-badge", "System Online" }
                    Button {
                        disabled: generating(),
                        onclick: handle_generate,
                        Icon { icon: LdDownload, width: 16, height: 16 }
                        if generating() { "Generating..." } else { "Generate Report" }
                    }
                },
            }

            div { class: "stat-grid",
                for (index, kpi) in DASHBOARD_KPIS.iter().enumerate() {
                    StatCard {
                        key: "{kpi.title}",
                        label: kpi.title,
                        value: kpi.value,
                        note: kpi.note.to_string(),
                        tone: KPI_TONES[index % KPI_TONES.len()],
                        icon: rsx! { KpiIcon { index } },
                    }
                }
            }

            div { class: "chart-grid",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdTrendingUp, width: 18, height: 18 }
                            "Assessment Trends"
                        }
                        CardDescription { "Monthly assessments and new athletes" }
                    }
                    CardContent {
                        BarChart { labels, series }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Sport Distribution" }
                        CardDescription { "Athlete enrolment by discipline" }
                    }
                    CardContent {
                        PieChart { slices }
                    }
                }
            }

            div { class: "dashboard-lower",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdActivity, width: 18, height: 18 }
                            "Recent Activity"
                        }
                        CardDescription { "Latest assessment submissions and reviews" }
                    }
                    CardContent {
                        ul { class: "activity-list",
                            for entry in RECENT_ACTIVITY.iter() {
                                li { key: "{entry.athlete}", class: "activity-item",
                                    div { class: "activity-text",
                                        p { class: "activity-athlete", "{entry.athlete}" }
                                        p { class: "activity-action", "{entry.action}" }
                                        p { class: "activity-time", "{entry.time}" }
                                    }
                                    Badge { variant: activity_variant(entry.status), "{entry.status.as_str()}" }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Performance Metrics" }
                        CardDescription { "Platform accuracy and availability" }
                    }
                    CardContent {
                        div { class: "metric-stack",
                            for metric in PERFORMANCE_METRICS.iter() {
                                MetricBar { key: "{metric.label}", label: metric.label, value: metric.value }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            full_width: true,
                            class: "metric-stack-action",
                            "View Detailed Analytics"
                        }
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
    fn activity_badges_follow_status() {
        let variants: Vec<BadgeVariant> = RECENT_ACTIVITY.iter().map(|a| activity_variant(a.status)).collect();
        assert_eq!(
            variants,
            vec![
                BadgeVariant::Success,
                BadgeVariant::Warning,
                BadgeVariant::Primary,
                BadgeVariant::Destructive,
            ]
        );
    }
}
