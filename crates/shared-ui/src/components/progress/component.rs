use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Labelled percentage bar: "label ..... 97.8%" above a filled track.
#[component]
pub fn MetricBar(
    label: String,
    /// Percentage in `0.0..=100.0`; values outside are clamped.
    value: f64,
    /// Overrides the right-hand text, e.g. "145ms" for a non-percentage metric.
    #[props(default)]
    display: Option<String>,
) -> Element {
    let clamped = value.clamp(0.0, 100.0);
    let text = display.unwrap_or_else(|| format!("{value}%"));

    rsx! {
        div { class: "metric-bar",
            div { class: "metric-bar-row",
                span { class: "metric-bar-label", "{label}" }
                span { class: "metric-bar-value", "{text}" }
            }
            Progress {
                value: Some(clamped),
                ProgressIndicator {}
            }
        }
    }
}
