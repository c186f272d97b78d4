use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{
    generate_performance_report, AppErrorKind, NoLatency, PortalConfig, RecordingLatency,
    REPORT_MIME,
};

use crate::common::{BlockedSink, RecordingSink};

#[tokio::test]
async fn test_generate_report_delivers_one_file() {
    let sink = RecordingSink::default();
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 30).unwrap();

    let file = generate_performance_report(&NoLatency, PortalConfig::default().report_delay(), &sink, now)
        .await
        .unwrap();

    let delivered = sink.files.borrow();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0], file);
    assert_eq!(file.filename, "SAI-Performance-Report-2024-03-09.json");
    assert_eq!(file.mime, REPORT_MIME);
}

#[tokio::test]
async fn test_report_contents_match_dashboard_figures() {
    let sink = RecordingSink::default();
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();

    let file = generate_performance_report(&NoLatency, PortalConfig::default().report_delay(), &sink, now)
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
    assert_eq!(json["totalAthletes"], 2847);
    assert_eq!(json["totalAssessments"], 1423);
    assert_eq!(json["aiAccuracy"], 97.8);
    assert_eq!(json["reportType"], "Monthly Performance Analytics");
    assert_eq!(json["generatedAt"], "2024-01-15T08:00:00.000Z");
    assert_eq!(json["performanceData"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_report_waits_for_configured_delay() {
    let latency = RecordingLatency::new();
    let config = PortalConfig::default();

    generate_performance_report(&latency, config.report_delay(), &RecordingSink::default(), Utc::now())
        .await
        .unwrap();

    assert_eq!(latency.waits(), vec![std::time::Duration::from_secs(3)]);
}

#[tokio::test]
async fn test_blocked_download_surfaces_export_error() {
    let err = generate_performance_report(&NoLatency, PortalConfig::default().report_delay(), &BlockedSink, Utc::now())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Export);
}
