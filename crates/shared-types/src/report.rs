use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::dashboard::{
    MonthlyVolume, SportShare, AI_ACCURACY, PERFORMANCE_DATA, SPORT_DISTRIBUTION, TOP_PERFORMERS,
    TOTAL_ASSESSMENTS, TOTAL_ATHLETES,
};
use crate::{AppError, Latency};

pub const REPORT_TYPE: &str = "Monthly Performance Analytics";
pub const REPORT_MIME: &str = "application/json";

/// The JSON document downloaded by "Generate Report".
///
/// Field order is the order keys appear in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub total_athletes: u32,
    pub total_assessments: u32,
    pub top_performers: u32,
    pub ai_accuracy: f64,
    pub performance_data: Vec<MonthlyVolume>,
    pub sport_distribution: Vec<SportShare>,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub generated_at: String,
    pub report_type: String,
}

impl PerformanceReport {
    pub fn snapshot(now: DateTime<Utc>) -> Self {
        Self {
            total_athletes: TOTAL_ATHLETES,
            total_assessments: TOTAL_ASSESSMENTS,
            top_performers: TOP_PERFORMERS,
            ai_accuracy: AI_ACCURACY,
            performance_data: PERFORMANCE_DATA.to_vec(),
            sport_distribution: SPORT_DISTRIBUTION.to_vec(),
            generated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            report_type: REPORT_TYPE.to_string(),
        }
    }
}

/// A file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// `SAI-Performance-Report-YYYY-MM-DD.json` for the UTC date of `now`.
pub fn report_filename(now: DateTime<Utc>) -> String {
    format!("SAI-Performance-Report-{}.json", now.format("%Y-%m-%d"))
}

/// Where a finished export goes. The browser build triggers a download;
/// tests record what was delivered.
pub trait ReportSink {
    fn deliver(&self, file: &ExportedFile) -> Result<(), AppError>;
}

/// Wait `delay`, build the report and deliver it to `sink` exactly once.
///
/// Nothing is delivered if serialization fails.
pub async fn generate_performance_report(
    latency: &dyn Latency,
    delay: Duration,
    sink: &dyn ReportSink,
    now: DateTime<Utc>,
) -> Result<ExportedFile, AppError> {
    latency.wait(delay).await;

    let report = PerformanceReport::snapshot(now);
    let contents = serde_json::to_string_pretty(&report)?;
    let file = ExportedFile {
        filename: report_filename(now),
        mime: REPORT_MIME,
        contents,
    };

    sink.deliver(&file)?;
    tracing::info!(filename = %file.filename, bytes = file.contents.len(), "performance report delivered");
    Ok(file)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Completed,
    Processing,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "completed",
            ReportStatus::Processing => "processing",
        }
    }
}

/// A previously generated report in the "Recent Reports" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub date_generated: &'static str,
    pub size: &'static str,
    pub status: ReportStatus,
}

pub const REPORT_HISTORY: &[ReportRecord] = &[
    ReportRecord {
        id: "RPT001",
        name: "Monthly Performance Summary - Athletics",
        kind: "Performance Report",
        date_generated: "2024-01-15",
        size: "2.4 MB",
        status: ReportStatus::Completed,
    },
    ReportRecord {
        id: "RPT002",
        name: "Regional Talent Analysis - West Zone",
        kind: "Analytics Report",
        date_generated: "2024-01-10",
        size: "1.8 MB",
        status: ReportStatus::Completed,
    },
    ReportRecord {
        id: "RPT003",
        name: "AI System Performance Metrics",
        kind: "System Report",
        date_generated: "2024-01-08",
        size: "945 KB",
        status: ReportStatus::Completed,
    },
    ReportRecord {
        id: "RPT004",
        name: "Quarterly Benchmarking Analysis",
        kind: "Benchmark Report",
        date_generated: "2024-01-05",
        size: "3.1 MB",
        status: ReportStatus::Processing,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: &'static str,
}

pub const REPORT_QUICK_STATS: &[QuickStat] = &[
    QuickStat { label: "Total Reports Generated", value: "1,247", tone: "primary" },
    QuickStat { label: "Active Analytics", value: "23", tone: "accent" },
    QuickStat { label: "Data Points Analyzed", value: "58.7K", tone: "success" },
    QuickStat { label: "Export Downloads", value: "432", tone: "warning" },
];

/// A report kind selectable in the custom report builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_time: &'static str,
}

pub const REPORT_TEMPLATES: &[ReportTemplate] = &[
    ReportTemplate {
        title: "Performance Summary Report",
        description: "Comprehensive athlete performance analysis with trends and insights",
        estimated_time: "3-5 minutes",
    },
    ReportTemplate {
        title: "Talent Identification Report",
        description: "Regional and sport-wise talent distribution and potential analysis",
        estimated_time: "5-8 minutes",
    },
    ReportTemplate {
        title: "Benchmarking Analysis",
        description: "Comparative performance against national and international standards",
        estimated_time: "4-6 minutes",
    },
    ReportTemplate {
        title: "AI System Analytics",
        description: "AI model performance, accuracy metrics, and system utilization",
        estimated_time: "2-3 minutes",
    },
];

pub const DATE_RANGES: &[(&str, &str)] = &[
    ("last-30-days", "Last 30 Days"),
    ("last-3-months", "Last 3 Months"),
    ("last-6-months", "Last 6 Months"),
    ("last-year", "Last Year"),
    ("custom", "Custom Range"),
];

pub const REGIONS: &[(&str, &str)] = &[
    ("all", "All Regions"),
    ("north", "North Zone"),
    ("south", "South Zone"),
    ("east", "East Zone"),
    ("west", "West Zone"),
];

pub const REPORT_SPORTS: &[&str] = &["Athletics", "Swimming", "Gymnastics", "Wrestling", "Badminton", "Boxing"];

/// Selections made in the custom report builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportBuilder {
    pub template: Option<&'static str>,
    pub date_range: Option<String>,
    pub region: Option<String>,
    pub sports: Vec<&'static str>,
}

impl ReportBuilder {
    /// Check or uncheck a sport, keeping the order in which sports were checked.
    pub fn set_sport(&mut self, sport: &'static str, checked: bool) {
        let present = self.sports.contains(&sport);
        if checked && !present {
            self.sports.push(sport);
        } else if !checked {
            self.sports.retain(|s| *s != sport);
        }
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.template == Some(title)
    }
}

/// Headline figure in the "Analytics Preview" strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewFigure {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: &'static str,
}

pub const ANALYTICS_PREVIEW: &[PreviewFigure] = &[
    PreviewFigure { value: "2,847", label: "Total Athletes Analyzed", tone: "primary" },
    PreviewFigure { value: "89.7%", label: "Performance Improvement", tone: "accent" },
    PreviewFigure { value: "1,423", label: "Reports Generated", tone: "success" },
];
