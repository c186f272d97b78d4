use dioxus::prelude::*;

use super::geometry::{
    axis_angle, bar_slots, label_anchor, linear_scale, nice_ceiling, pie_wedges, points_attr,
    polar_point, radar_points, ticks, wedge_path,
};

const VIEW_WIDTH: f64 = 600.0;
const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;
const GRID_LINES: usize = 4;

/// A named run of values, one per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[component]
fn ChartLegend(entries: Vec<(String, String)>) -> Element {
    rsx! {
        ul { class: "chart-legend",
            for (name , color) in entries {
                li { class: "chart-legend-item",
                    span { class: "chart-legend-swatch", style: "background: {color};" }
                    "{name}"
                }
            }
        }
    }
}

/// Horizontal grid and y-axis labels shared by the cartesian charts.
#[component]
fn YAxis(lo: f64, hi: f64, plot_height: f64) -> Element {
    let values = ticks(lo, hi, GRID_LINES);
    rsx! {
        g { class: "chart-grid",
            for value in values {
                {
                    let y = MARGIN_TOP + linear_scale(value, (lo, hi), (plot_height, 0.0));
                    rsx! {
                        line {
                            x1: "{MARGIN_LEFT}",
                            x2: "{VIEW_WIDTH - MARGIN_RIGHT}",
                            y1: "{y:.2}",
                            y2: "{y:.2}",
                            stroke_dasharray: "3 3",
                        }
                        text {
                            class: "chart-axis-label",
                            x: "{MARGIN_LEFT - 6.0}",
                            y: "{y:.2}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{format_tick(value)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn XLabels(labels: Vec<String>, height: f64) -> Element {
    let plot_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let band = if labels.is_empty() {
        0.0
    } else {
        plot_width / labels.len() as f64
    };
    rsx! {
        for (i , label) in labels.into_iter().enumerate() {
            text {
                class: "chart-axis-label",
                x: "{MARGIN_LEFT + band * (i as f64 + 0.5):.2}",
                y: "{height - 8.0}",
                text_anchor: "middle",
                "{label}"
            }
        }
    }
}

/// Grouped vertical bars, one group per label and one bar per series.
#[component]
pub fn BarChart(
    labels: Vec<String>,
    series: Vec<ChartSeries>,
    #[props(default = 300.0)] height: f64,
) -> Element {
    let plot_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let top = nice_ceiling(max);
    let slots = bar_slots(labels.len(), series.len(), plot_width, 0.3);

    let mut bars = Vec::new();
    for (g, group) in slots.iter().enumerate() {
        for (s, slot) in group.iter().enumerate() {
            let value = series[s].values.get(g).copied().unwrap_or(0.0);
            let bar_height = linear_scale(value, (0.0, top), (0.0, plot_height));
            bars.push((
                MARGIN_LEFT + slot.x,
                MARGIN_TOP + plot_height - bar_height,
                slot.width,
                bar_height,
                series[s].color.clone(),
                format!("{}: {}", series[s].name, format_tick(value)),
            ));
        }
    }
    let legend: Vec<(String, String)> =
        series.iter().map(|s| (s.name.clone(), s.color.clone())).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart chart-bar",
            svg {
                class: "chart-canvas",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {VIEW_WIDTH} {height}",
                role: "img",
                YAxis { lo: 0.0, hi: top, plot_height }
                for (x , y , w , h , color , tip) in bars {
                    rect {
                        class: "chart-bar-rect",
                        x: "{x:.2}",
                        y: "{y:.2}",
                        width: "{w:.2}",
                        height: "{h:.2}",
                        rx: "4",
                        fill: "{color}",
                        title { "{tip}" }
                    }
                }
                XLabels { labels, height }
            }
            ChartLegend { entries: legend }
        }
    }
}

/// Lines over a fixed y domain, one polyline per series.
#[component]
pub fn LineChart(
    labels: Vec<String>,
    series: Vec<ChartSeries>,
    domain: (f64, f64),
    #[props(default = 300.0)] height: f64,
) -> Element {
    let plot_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let band = if labels.is_empty() {
        0.0
    } else {
        plot_width / labels.len() as f64
    };

    let lines: Vec<(String, String, Vec<(f64, f64)>)> = series
        .iter()
        .map(|s| {
            let points = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    (
                        MARGIN_LEFT + band * (i as f64 + 0.5),
                        MARGIN_TOP + linear_scale(*v, domain, (plot_height, 0.0)),
                    )
                })
                .collect::<Vec<_>>();
            (s.color.clone(), points_attr(&points), points)
        })
        .collect();
    let legend: Vec<(String, String)> =
        series.iter().map(|s| (s.name.clone(), s.color.clone())).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart chart-line",
            svg {
                class: "chart-canvas",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {VIEW_WIDTH} {height}",
                role: "img",
                YAxis { lo: domain.0, hi: domain.1, plot_height }
                for (color , path , points) in lines {
                    polyline {
                        class: "chart-line-path",
                        points: "{path}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "3",
                    }
                    for (x , y) in points {
                        circle {
                            cx: "{x:.2}",
                            cy: "{y:.2}",
                            r: "4",
                            fill: "{color}",
                        }
                    }
                }
                XLabels { labels, height }
            }
            ChartLegend { entries: legend }
        }
    }
}

/// Pie with optional "Label: NN%" captions outside each wedge.
#[component]
pub fn PieChart(
    slices: Vec<PieSlice>,
    #[props(default = true)] show_labels: bool,
    #[props(default = 300.0)] size: f64,
) -> Element {
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let wedges = pie_wedges(&values);
    let center = size / 2.0;
    let radius = size * 0.3;

    let drawn: Vec<(String, String, f64, f64, &'static str, String)> = slices
        .iter()
        .zip(wedges.iter())
        .map(|(slice, wedge)| {
            let (lx, ly) = polar_point(center, center, radius + 18.0, wedge.mid_angle());
            (
                wedge_path(center, center, radius, wedge),
                slice.color.clone(),
                lx,
                ly,
                label_anchor(wedge.mid_angle()),
                format!("{}: {:.0}%", slice.label, wedge.fraction * 100.0),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart chart-pie",
            svg {
                class: "chart-canvas",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {size} {size}",
                role: "img",
                for (d , color , lx , ly , anchor , caption) in drawn {
                    path { class: "chart-wedge", d: "{d}", fill: "{color}",
                        title { "{caption}" }
                    }
                    if show_labels {
                        text {
                            class: "chart-wedge-label",
                            x: "{lx:.2}",
                            y: "{ly:.2}",
                            text_anchor: anchor,
                            dominant_baseline: "middle",
                            "{caption}"
                        }
                    }
                }
            }
        }
    }
}

/// Spider chart over named axes, each scored out of `full_mark`.
#[component]
pub fn RadarChart(
    axes: Vec<String>,
    series: Vec<ChartSeries>,
    #[props(default = 100.0)] full_mark: f64,
    #[props(default = 320.0)] size: f64,
) -> Element {
    let center = size / 2.0;
    let radius = size * 0.34;
    let n = axes.len();

    let rings: Vec<String> = (1..=GRID_LINES)
        .map(|ring| {
            let r = radius * ring as f64 / GRID_LINES as f64;
            let points: Vec<(f64, f64)> = (0..n)
                .map(|i| polar_point(center, center, r, axis_angle(i, n)))
                .collect();
            points_attr(&points)
        })
        .collect();
    let spokes: Vec<(f64, f64, f64, f64, &'static str, String)> = axes
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let angle = axis_angle(i, n);
            let (x, y) = polar_point(center, center, radius, angle);
            let (lx, ly) = polar_point(center, center, radius + 16.0, angle);
            (x, y, lx, ly, label_anchor(angle), axis.clone())
        })
        .collect();
    let shapes: Vec<(String, String)> = series
        .iter()
        .map(|s| {
            let points = radar_points(&s.values, full_mark, center, center, radius);
            (points_attr(&points), s.color.clone())
        })
        .collect();
    let legend: Vec<(String, String)> =
        series.iter().map(|s| (s.name.clone(), s.color.clone())).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart chart-radar",
            svg {
                class: "chart-canvas",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {size} {size}",
                role: "img",
                g { class: "chart-grid",
                    for ring in rings {
                        polygon { points: "{ring}", fill: "none" }
                    }
                    for (x , y , _ , _ , _ , _) in spokes.clone() {
                        line { x1: "{center}", y1: "{center}", x2: "{x:.2}", y2: "{y:.2}" }
                    }
                }
                for (points , color) in shapes {
                    polygon {
                        class: "chart-radar-shape",
                        points: "{points}",
                        fill: "{color}",
                        fill_opacity: "0.3",
                        stroke: "{color}",
                        stroke_width: "2",
                    }
                }
                for (_ , _ , lx , ly , anchor , axis) in spokes {
                    text {
                        class: "chart-axis-label",
                        x: "{lx:.2}",
                        y: "{ly:.2}",
                        text_anchor: anchor,
                        dominant_baseline: "middle",
                        "{axis}"
                    }
                }
            }
            ChartLegend { entries: legend }
        }
    }
}
