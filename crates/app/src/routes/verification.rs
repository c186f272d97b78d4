use std::time::Duration;

use crate::platform::use_platform;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCheck, LdClock, LdFlag, LdInfo, LdMapPin, LdPause, LdPlay, LdTarget, LdTimer,
    LdUser, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{
    AnomalyLevel, Latency, Playback, VerificationDecision, PENDING_ASSESSMENT, PENDING_REVIEWS,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, PageHeader, Progress, ProgressIndicator, Textarea,
};

pub fn anomaly_variant(level: AnomalyLevel) -> BadgeVariant {
    match level {
        AnomalyLevel::Warning => BadgeVariant::Warning,
        AnomalyLevel::Info => BadgeVariant::Secondary,
    }
}

fn anomaly_key(level: AnomalyLevel) -> &'static str {
    match level {
        AnomalyLevel::Warning => "warning",
        AnomalyLevel::Info => "info",
    }
}

fn anomaly_label(level: AnomalyLevel) -> &'static str {
    match level {
        AnomalyLevel::Warning => "Warning",
        AnomalyLevel::Info => "Info",
    }
}

pub fn decision_variant(decision: VerificationDecision) -> BadgeVariant {
    match decision {
        VerificationDecision::Approved => BadgeVariant::Success,
        VerificationDecision::Rejected => BadgeVariant::Destructive,
        VerificationDecision::ResubmissionRequested => BadgeVariant::Warning,
        VerificationDecision::Draft => BadgeVariant::Secondary,
    }
}

#[component]
pub fn Verification() -> Element {
    let assessment = PENDING_ASSESSMENT;
    let duration = assessment.submission.duration_secs;

    let platform = use_platform();
    let mut playback = use_signal(Playback::default);
    // Bumped on every play so a stale ticker from an earlier run stops.
    let mut run = use_signal(|| 0u32);
    let mut comments = use_signal(String::new);
    let mut decision = use_signal(|| Option::<VerificationDecision>::None);

    let toggle_playback = move |_| {
        let next = playback().toggle();
        playback.set(next);
        if !next.playing {
            return;
        }
        let generation = run() + 1;
        run.set(generation);
        let latency = platform.latency.clone();
        spawn(async move {
            loop {
                latency.wait(Duration::from_secs(1)).await;
                if run() != generation || !playback().playing {
                    break;
                }
                let ticked = playback().tick(duration);
                playback.set(ticked);
            }
        });
    };

    let mut record = move |choice: VerificationDecision| {
        tracing::info!(decision = ?choice, athlete = assessment.athlete.id, "verification decision recorded");
        decision.set(Some(choice));
    };

    let state = playback();
    let percent = state.percent(duration);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./verification.css") }

        div { class: "page verification-page",
            PageHeader {
                title: "Performance Verification",
                subtitle: "Review AI-analyzed performance submissions for accuracy".to_string(),
                actions: rsx! {
                    Badge { variant: BadgeVariant::Warning, "{PENDING_REVIEWS} Pending Reviews" }
                },
            }

            div { class: "verification-grid",
                div { class: "verification-main",
                    Card {
                        CardHeader {
                            div { class: "card-title-row",
                                CardTitle { "Performance Video Analysis" }
                                Badge { variant: BadgeVariant::Success,
                                    "AI Confidence: {assessment.analysis.confidence}%"
                                }
                            }
                            CardDescription { "{assessment.submission.exercise}" }
                        }
                        CardContent {
                            div { class: "video-frame",
                                div { class: "video-placeholder",
                                    Icon { icon: LdPlay, width: 48, height: 48 }
                                    p { class: "video-title", "100m Sprint Performance Video" }
                                    p { class: "video-duration", "Duration: {assessment.submission.duration}" }
                                }
                                div { class: "video-overlay",
                                    span { "Speed: {assessment.analysis.metrics.max_speed}" }
                                    span { "Time: {assessment.analysis.detected_time}" }
                                }
                            }
                            div { class: "video-controls",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: toggle_playback,
                                    if state.playing {
                                        Icon { icon: LdPause, width: 16, height: 16 }
                                        "Pause"
                                    } else {
                                        Icon { icon: LdPlay, width: 16, height: 16 }
                                        "Play"
                                    }
                                }
                                div { class: "video-progress",
                                    Progress {
                                        value: Some(percent),
                                        ProgressIndicator {}
                                    }
                                }
                                span { class: "video-position", "{state.position_secs}s / {duration}s" }
                            }

                            div { class: "key-points",
                                h4 { "AI Detection Points" }
                                for point in assessment.analysis.key_points.iter() {
                                    div { key: "{point.time}", class: "key-point",
                                        span { class: "key-point-time", "{point.time}" }
                                        span { class: "key-point-description", "{point.description}" }
                                        if point.passed {
                                            Badge { variant: BadgeVariant::Success, "\u{2713} Pass" }
                                        } else {
                                            Badge { variant: BadgeVariant::Destructive, "\u{2717} Fail" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "verification-side",
                    Card {
                        CardHeader {
                            CardTitle {
                                Icon { icon: LdUser, width: 18, height: 18 }
                                "Athlete Information"
                            }
                        }
                        CardContent {
                            div { class: "info-list",
                                p { class: "info-name", "{assessment.athlete.name}" }
                                p { class: "info-muted",
                                    "{assessment.athlete.id} \u{2022} Age {assessment.athlete.age}"
                                }
                                p { class: "info-row",
                                    Icon { icon: LdTarget, width: 14, height: 14 }
                                    "{assessment.athlete.sport} - {assessment.athlete.specialization}"
                                }
                                p { class: "info-row",
                                    Icon { icon: LdCalendar, width: 14, height: 14 }
                                    "{assessment.submission.date} at {assessment.submission.time}"
                                }
                                p { class: "info-row",
                                    Icon { icon: LdMapPin, width: 14, height: 14 }
                                    "{assessment.submission.location}"
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle {
                                Icon { icon: LdTimer, width: 18, height: 18 }
                                "Performance Metrics"
                            }
                        }
                        CardContent {
                            div { class: "metric-highlight-grid",
                                div { class: "metric-highlight", "data-tone": "primary",
                                    p { class: "metric-highlight-value", "{assessment.analysis.detected_time}" }
                                    p { class: "metric-highlight-label", "Sprint Time" }
                                }
                                div { class: "metric-highlight", "data-tone": "accent",
                                    p { class: "metric-highlight-value", "{assessment.analysis.metrics.max_speed}" }
                                    p { class: "metric-highlight-label", "Max Speed" }
                                }
                            }
                            dl { class: "metric-pairs",
                                dt { "Avg Speed:" }
                                dd { "{assessment.analysis.metrics.avg_speed}" }
                                dt { "Acceleration:" }
                                dd { "{assessment.analysis.metrics.acceleration}" }
                                dt { "Technique:" }
                                dd {
                                    Badge { variant: BadgeVariant::Success, "{assessment.analysis.metrics.technique}" }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle {
                                Icon { icon: LdFlag, width: 18, height: 18 }
                                "Detection Alerts"
                            }
                        }
                        CardContent {
                            div { class: "alert-list",
                                for anomaly in assessment.analysis.anomalies.iter() {
                                    div {
                                        key: "{anomaly.message}",
                                        class: "alert-item",
                                        "data-level": anomaly_key(anomaly.level),
                                        if anomaly.level == AnomalyLevel::Warning {
                                            Icon { icon: LdFlag, width: 14, height: 14 }
                                        } else {
                                            Icon { icon: LdInfo, width: 14, height: 14 }
                                        }
                                        span { "{anomaly.message}" }
                                        Badge { variant: anomaly_variant(anomaly.level),
                                            "{anomaly_label(anomaly.level)}"
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
                    CardTitle { "Official Verification" }
                    CardDescription { "Record your decision for this submission" }
                }
                CardContent {
                    Textarea {
                        label: "Official Comments & Feedback",
                        placeholder: "Add your official review comments, observations, or notes about this performance submission...",
                        value: comments(),
                        on_input: move |e: FormEvent| comments.set(e.value()),
                    }
                    div { class: "decision-actions",
                        Button {
                            variant: ButtonVariant::Success,
                            onclick: move |_| record(VerificationDecision::Approved),
                            Icon { icon: LdCheck, width: 16, height: 16 }
                            "Approve Performance"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| record(VerificationDecision::Rejected),
                            Icon { icon: LdX, width: 16, height: 16 }
                            "Reject Submission"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| record(VerificationDecision::ResubmissionRequested),
                            Icon { icon: LdClock, width: 16, height: 16 }
                            "Request Re-submission"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| record(VerificationDecision::Draft),
                            "Save as Draft"
                        }
                    }
                    if let Some(choice) = decision() {
                        div { class: "decision-result",
                            Badge { variant: decision_variant(choice), "{choice.label()}" }
                            if !comments.read().is_empty() {
                                p { class: "decision-comments", "{comments}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
