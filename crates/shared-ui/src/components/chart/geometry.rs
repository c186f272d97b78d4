//! Pure layout maths for the SVG charts. Angles are in radians, measured
//! clockwise from twelve o'clock, matching how the charts are drawn.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Map `value` from `domain` onto `range` linearly. A zero-width domain maps
/// everything to the start of the range.
pub fn linear_scale(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if (d1 - d0).abs() < f64::EPSILON {
        return r0;
    }
    r0 + (value - d0) / (d1 - d0) * (r1 - r0)
}

/// Round `max` up to 1, 2, 2.5 or 5 times a power of ten, for axis tops.
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced tick values from `lo` to `hi` inclusive.
pub fn ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![lo];
    }
    (0..=count)
        .map(|i| lo + (hi - lo) * i as f64 / count as f64)
        .collect()
}

/// Point on a circle of radius `r` around `(cx, cy)`.
pub fn polar_point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// One wedge of a pie chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Split the full circle proportionally to `values`. Negative values count
/// as zero; an all-zero input yields zero-width wedges.
pub fn pie_wedges(values: &[f64]) -> Vec<Wedge> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
            let end = start + fraction * TAU;
            let wedge = Wedge { start, end, fraction };
            start = end;
            wedge
        })
        .collect()
}

/// SVG path for a filled wedge from `start` to `end`.
pub fn wedge_path(cx: f64, cy: f64, r: f64, wedge: &Wedge) -> String {
    if wedge.fraction >= 1.0 - 1e-9 {
        // A single arc cannot draw a full circle; use two halves.
        let (x0, y0) = polar_point(cx, cy, r, 0.0);
        let (x1, y1) = polar_point(cx, cy, r, TAU / 2.0);
        return format!(
            "M {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 1 1 {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 1 1 {x0:.2} {y0:.2} Z"
        );
    }
    let (sx, sy) = polar_point(cx, cy, r, wedge.start);
    let (ex, ey) = polar_point(cx, cy, r, wedge.end);
    let large_arc = if wedge.end - wedge.start > TAU / 2.0 { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {sx:.2} {sy:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {ex:.2} {ey:.2} Z"
    )
}

/// Vertices of a radar polygon: one per axis, `values[i] / full_mark` of the
/// way out along axis `i`.
pub fn radar_points(values: &[f64], full_mark: f64, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = if full_mark > 0.0 {
                (v / full_mark).clamp(0.0, 1.0)
            } else {
                0.0
            };
            polar_point(cx, cy, radius * ratio, axis_angle(i, n))
        })
        .collect()
}

/// Angle of spoke `i` out of `n`, starting straight up.
pub fn axis_angle(i: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    TAU * i as f64 / n as f64
}

/// `"x1,y1 x2,y2 ..."` for `polygon`/`polyline` elements.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text anchor for a label placed at `angle` around a circle.
pub fn label_anchor(angle: f64) -> &'static str {
    let s = angle.sin();
    if s > 0.1 {
        "start"
    } else if s < -0.1 {
        "end"
    } else {
        "middle"
    }
}

/// Horizontal placement of grouped bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub x: f64,
    pub width: f64,
}

/// Lay out `groups` groups of `series` bars across `width`, leaving
/// `gap_ratio` of each group's band empty.
pub fn bar_slots(groups: usize, series: usize, width: f64, gap_ratio: f64) -> Vec<Vec<BarSlot>> {
    if groups == 0 || series == 0 {
        return Vec::new();
    }
    let band = width / groups as f64;
    let padding = band * gap_ratio.clamp(0.0, 0.9) / 2.0;
    let bar_width = (band - 2.0 * padding) / series as f64;
    (0..groups)
        .map(|g| {
            (0..series)
                .map(|s| BarSlot {
                    x: g as f64 * band + padding + s as f64 * bar_width,
                    width: bar_width,
                })
                .collect()
        })
        .collect()
}

/// Quarter turn, exposed for label offsets.
pub const QUARTER_TURN: f64 = FRAC_PI_2;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn linear_scale_inverts_for_svg_y() {
        // y grows downward: domain max maps to the top of the plot
        assert!(close(linear_scale(12.2, (11.5, 12.2), (200.0, 0.0)), 0.0));
        assert!(close(linear_scale(11.5, (11.5, 12.2), (200.0, 0.0)), 200.0));
        assert!(close(linear_scale(5.0, (3.0, 3.0), (10.0, 20.0)), 10.0));
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert!(close(nice_ceiling(423.0), 500.0));
        assert!(close(nice_ceiling(180.0), 200.0));
        assert!(close(nice_ceiling(100.0), 100.0));
        assert!(close(nice_ceiling(0.0), 1.0));
    }

    #[test]
    fn ticks_are_inclusive() {
        assert_eq!(ticks(0.0, 100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(ticks(1.0, 2.0, 0), vec![1.0]);
    }

    #[test]
    fn wedges_cover_full_circle() {
        let wedges = pie_wedges(&[35.0, 20.0, 15.0, 18.0, 12.0]);
        assert_eq!(wedges.len(), 5);
        assert!(close(wedges[0].start, 0.0));
        assert!(close(wedges[4].end, TAU));
        assert!(close(wedges[0].fraction, 0.35));
        for pair in wedges.windows(2) {
            assert!(close(pair[0].end, pair[1].start));
        }
    }

    #[test]
    fn zero_total_gives_empty_wedges() {
        let wedges = pie_wedges(&[0.0, -3.0]);
        assert!(wedges.iter().all(|w| w.fraction == 0.0));
    }

    #[test]
    fn full_wedge_draws_closed_circle() {
        let wedges = pie_wedges(&[1.0]);
        let path = wedge_path(50.0, 50.0, 40.0, &wedges[0]);
        assert_eq!(path.matches(" A ").count(), 2);
    }

    #[test]
    fn radar_first_axis_points_up() {
        let points = radar_points(&[100.0, 50.0, 0.0, 50.0], 100.0, 100.0, 100.0, 80.0);
        assert!(close(points[0].0, 100.0));
        assert!(close(points[0].1, 20.0));
        // second spoke points right at half length
        assert!(close(points[1].0, 140.0));
        assert!(close(points[1].1, 100.0));
        // zero collapses to the centre
        assert!(close(points[2].0, 100.0) && close(points[2].1, 100.0));
    }

    #[test]
    fn radar_clamps_out_of_range_values() {
        let points = radar_points(&[150.0], 100.0, 0.0, 0.0, 10.0);
        assert!(close(points[0].1, -10.0));
    }

    #[test]
    fn bar_slots_fill_bands_without_overlap() {
        let slots = bar_slots(6, 2, 600.0, 0.2);
        assert_eq!(slots.len(), 6);
        let first = &slots[0];
        assert!(close(first[0].x, 10.0));
        assert!(close(first[0].width, 40.0));
        assert!(close(first[1].x, 50.0));
        assert!(close(slots[5][1].x + slots[5][1].width, 590.0));
        assert!(bar_slots(0, 2, 600.0, 0.2).is_empty());
    }

    #[test]
    fn anchors_follow_side_of_circle() {
        assert_eq!(label_anchor(0.0), "middle");
        assert_eq!(label_anchor(QUARTER_TURN), "start");
        assert_eq!(label_anchor(3.0 * QUARTER_TURN), "end");
    }

    #[test]
    fn points_attr_formats_pairs() {
        assert_eq!(points_attr(&[(1.0, 2.5), (3.0, 4.0)]), "1.00,2.50 3.00,4.00");
    }
}
