use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdDownload, LdFileText, LdTarget, LdTrendingUp, LdTrophy,
};
use dioxus_free_icons::Icon;
use shared_types::{
    StandardRating, BENCHMARK_SUBJECT, COMPARISON_DATA, COMPARISON_INSIGHTS, PROFILE_AXES,
    PROFILE_FULL_MARK, PROFILE_HIGHLIGHTS, PROGRESS_DATA, PROGRESS_DOMAIN, PROGRESS_SUMMARY,
    TRAINING_RECOMMENDATIONS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, ChartSeries, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, LineChart, PageHeader, RadarChart,
};

pub fn rating_variant(rating: StandardRating) -> BadgeVariant {
    match rating {
        StandardRating::Excellent => BadgeVariant::Success,
        StandardRating::Good => BadgeVariant::Warning,
        StandardRating::NeedsFocus => BadgeVariant::Destructive,
    }
}

/// Signed gap between athlete and benchmark, e.g. "+7" or "-5".
pub fn format_delta(athlete: f64, benchmark: f64) -> String {
    let delta = athlete - benchmark;
    if delta > 0.0 {
        format!("+{delta:.0}")
    } else {
        format!("{delta:.0}")
    }
}

#[component]
pub fn Benchmarking() -> Element {
    let subject = BENCHMARK_SUBJECT;

    let axes: Vec<String> = PROFILE_AXES.iter().map(|a| a.subject.to_string()).collect();
    let profile_series = vec![
        ChartSeries::new(
            "Current Performance",
            "var(--primary)",
            PROFILE_AXES.iter().map(|a| a.athlete).collect(),
        ),
        ChartSeries::new(
            "SAI Benchmark",
            "var(--accent)",
            PROFILE_AXES.iter().map(|a| a.benchmark).collect(),
        ),
    ];

    let dates: Vec<String> = PROGRESS_DATA.iter().map(|p| p.date.to_string()).collect();
    let progress_series = vec![
        ChartSeries::new(
            "Actual Performance (seconds)",
            "var(--primary)",
            PROGRESS_DATA.iter().map(|p| p.performance).collect(),
        ),
        ChartSeries::new(
            "SAI Benchmark",
            "var(--accent)",
            PROGRESS_DATA.iter().map(|p| p.benchmark).collect(),
        ),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./benchmarking.css") }

        div { class: "page benchmarking-page",
            PageHeader {
                title: "Performance Benchmarking",
                subtitle: "Compare athlete performance against standards and peers".to_string(),
                actions: rsx! {
                    Button { variant: ButtonVariant::Outline,
                        Icon { icon: LdDownload, width: 16, height: 16 }
                        "Export Analysis"
                    }
                    Button {
                        Icon { icon: LdFileText, width: 16, height: 16 }
                        "Generate Report"
                    }
                },
            }

            Card { elevated: true,
                CardContent {
                    div { class: "subject-summary",
                        div { class: "subject-identity",
                            div { class: "subject-mark",
                                Icon { icon: LdTrophy, width: 28, height: 28 }
                            }
                            div {
                                h2 { class: "subject-name", "{subject.name}" }
                                p { class: "subject-meta",
                                    "{subject.id} \u{2022} {subject.sport} - {subject.specialization}"
                                }
                            }
                        }
                        div { class: "subject-figures",
                            div { class: "subject-figure",
                                p { class: "subject-figure-value", "{subject.time}" }
                                p { class: "subject-figure-label", "Personal Best" }
                            }
                            div { class: "subject-figure",
                                p { class: "subject-figure-value", "#{subject.ranking}" }
                                p { class: "subject-figure-label", "National Ranking" }
                            }
                            div { class: "subject-figure",
                                p { class: "subject-figure-value", "{subject.percentile}th" }
                                p { class: "subject-figure-label", "Percentile" }
                            }
                        }
                    }
                }
            }

            div { class: "chart-grid",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdTarget, width: 18, height: 18 }
                            "Performance Profile Analysis"
                        }
                        CardDescription { "Multi-dimensional comparison against the SAI benchmark" }
                    }
                    CardContent {
                        RadarChart { axes, series: profile_series, full_mark: PROFILE_FULL_MARK }
                        div { class: "highlight-row",
                            for highlight in PROFILE_HIGHLIGHTS.iter() {
                                div { key: "{highlight.title}", class: "highlight", "data-tone": highlight.tone,
                                    p { class: "highlight-title", "{highlight.title}" }
                                    p { class: "highlight-body", "{highlight.body}" }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: LdTrendingUp, width: 18, height: 18 }
                            "Performance Progress Tracking"
                        }
                        CardDescription { "Sprint times against the benchmark over recent months" }
                    }
                    CardContent {
                        LineChart { labels: dates, series: progress_series, domain: PROGRESS_DOMAIN }
                        div { class: "highlight-row",
                            for summary in PROGRESS_SUMMARY.iter() {
                                div { key: "{summary.title}", class: "highlight", "data-tone": summary.tone,
                                    p { class: "highlight-title", "{summary.title}" }
                                    p { class: "highlight-body", "{summary.body}" }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Profile Breakdown" }
                    CardDescription { "Score per dimension against the SAI benchmark" }
                }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Dimension" }
                            DataTableColumn { numeric: true, "Athlete" }
                            DataTableColumn { numeric: true, "Benchmark" }
                            DataTableColumn { numeric: true, "Difference" }
                        }
                        DataTableBody {
                            for axis in PROFILE_AXES.iter() {
                                DataTableRow { key: "{axis.subject}",
                                    DataTableCell { "{axis.subject}" }
                                    DataTableCell { numeric: true, "{axis.athlete}" }
                                    DataTableCell { numeric: true, "{axis.benchmark}" }
                                    DataTableCell { numeric: true,
                                        span {
                                            class: "delta",
                                            "data-positive": if axis.athlete >= axis.benchmark { "true" } else { "false" },
                                            "{format_delta(axis.athlete, axis.benchmark)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: LdAward, width: 18, height: 18 }
                        "Comparative Performance Standards"
                    }
                    CardDescription { "Where the athlete stands against each competitive level" }
                }
                CardContent {
                    div { class: "standards-grid",
                        div { class: "standards-list",
                            for standard in COMPARISON_DATA.iter() {
                                div { key: "{standard.category}", class: "standard",
                                    div { class: "standard-row",
                                        span { class: "standard-category", "{standard.category}" }
                                        span { class: "standard-value", "{standard.value}th percentile" }
                                        Badge { variant: rating_variant(StandardRating::for_value(standard.value)),
                                            "{StandardRating::for_value(standard.value).label()}"
                                        }
                                    }
                                    div { class: "standard-track",
                                        div {
                                            class: "standard-fill",
                                            style: "width: {standard.value}%; background: {standard.color};",
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "insights",
                            h4 { "Key Insights" }
                            ul {
                                for insight in COMPARISON_INSIGHTS.iter() {
                                    li { key: "{insight}", "{insight}" }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Action Recommendations" }
                    CardDescription { "Suggested next steps from the benchmark analysis" }
                }
                CardContent {
                    div { class: "recommendations",
                        for recommendation in TRAINING_RECOMMENDATIONS.iter() {
                            div { key: "{recommendation.title}", class: "recommendation", "data-tone": recommendation.tone,
                                p { class: "recommendation-title", "{recommendation.title}" }
                                p { class: "recommendation-body", "{recommendation.body}" }
                            }
                        }
                    }
                    Button { class: "recommendations-action", "Generate Training Plan" }
                }
            }
        }
    }
}
