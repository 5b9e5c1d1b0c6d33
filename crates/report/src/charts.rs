//! SVG chart generation for the EDA report.
//!
//! Each chart is a pure function from pre-computed data to an SVG string;
//! nothing here touches the dataset or holds state.

use std::fmt::Write;

/// Categorical palette for the churn hue (viridis endpoints).
const CHURN_COLORS: [&str; 2] = ["#440154", "#fde725"];

/// Series color for single-series bar charts.
const BAR_COLOR: &str = "#4c78a8";

/// Fill for heatmap cells whose coefficient is undefined.
const NAN_CELL_COLOR: &str = "#cccccc";

/// Five-number summary plus outliers for a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest datum within 1.5 IQR below q1.
    pub whisker_low: f64,
    /// Highest datum within 1.5 IQR above q3.
    pub whisker_high: f64,
    /// Data points beyond the whiskers.
    pub fliers: Vec<f64>,
}

/// Linear-interpolated quantile of a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Computes the box-plot summary for one group of values.
///
/// Whiskers extend to the furthest data point within 1.5 IQR of the box;
/// anything beyond becomes a flier. Returns `None` for an empty group.
#[must_use]
pub fn compute_box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;

    let low_bound = q1 - 1.5 * iqr;
    let high_bound = q3 + 1.5 * iqr;

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_bound)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_bound)
        .unwrap_or(q3);

    let fliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_bound || v > high_bound)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        fliers,
    })
}

/// Interpolates the coolwarm diverging palette over [-1, 1].
fn coolwarm(v: f64) -> String {
    // cool #3b4cc0 -> white #f7f7f7 -> warm #b40426
    let (from, to, t) = if v < 0.0 {
        ((0x3b, 0x4c, 0xc0), (0xf7, 0xf7, 0xf7), v + 1.0)
    } else {
        ((0xf7, 0xf7, 0xf7), (0xb4, 0x04, 0x26), v)
    };
    let lerp = |a: u8, b: u8| -> u8 {
        (f64::from(a) + t.clamp(0.0, 1.0) * (f64::from(b) - f64::from(a))).round() as u8
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(from.0, to.0),
        lerp(from.1, to.1),
        lerp(from.2, to.2)
    )
}

/// Color for a churn class (0 = retained, 1 = churned).
fn churn_color(churn: i64) -> &'static str {
    if churn == 1 {
        CHURN_COLORS[1]
    } else {
        CHURN_COLORS[0]
    }
}

/// Bar chart over categorical value counts.
pub fn bar_chart_svg(counts: &[(i64, usize)]) -> String {
    let width = 560;
    let height = 300;
    let margin = 45;
    let chart_width = width - 2 * margin;
    let chart_height = height - 2 * margin;

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let slot = chart_width as f64 / counts.len().max(1) as f64;

    let mut bars = String::new();
    for (i, (value, count)) in counts.iter().enumerate() {
        let bar_width = slot * 0.6;
        let x = margin as f64 + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = *count as f64 / max_count as f64 * chart_height as f64;
        let y = margin as f64 + chart_height as f64 - bar_height;

        let _ = write!(
            bars,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{bar_height:.1}" fill="{BAR_COLOR}"/>"##
        );
        let _ = write!(
            bars,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="#374151">{count}</text>"##,
            x + bar_width / 2.0,
            y - 6.0
        );
        let _ = write!(
            bars,
            r##"<text x="{:.1}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">{value}</text>"##,
            x + bar_width / 2.0,
            height - margin + 18
        );
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background:white">
  <line x1="{margin}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{margin}" y1="{margin}" x2="{margin}" y2="{bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <text x="{label_x}" y="{label_y}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, {label_x}, {label_y})">Count</text>
  {bars}
</svg>"##,
        bottom = height - margin,
        right = width - margin,
        label_x = 14,
        label_y = height / 2,
    )
}

/// Annotated correlation heatmap over a square matrix.
pub fn heatmap_svg(labels: &[&str], matrix: &[Vec<f64>]) -> String {
    let k = labels.len();
    let cell = 72;
    let left = 120;
    let top = 30;
    let width = left + k * cell + 20;
    let height = top + k * cell + 90;

    let mut cells = String::new();
    let mut annotations = String::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let x = left + j * cell;
            let y = top + i * cell;
            let fill = if value.is_nan() {
                NAN_CELL_COLOR.to_string()
            } else {
                coolwarm(value.clamp(-1.0, 1.0))
            };
            let _ = write!(
                cells,
                r##"<rect x="{x}" y="{y}" width="{cell}" height="{cell}" fill="{fill}" stroke="white" stroke-width="0.5"/>"##
            );

            if !value.is_nan() {
                // Dark annotations wash out on saturated cells
                let text_color = if value.abs() > 0.6 { "#ffffff" } else { "#1f2937" };
                let _ = write!(
                    annotations,
                    r##"<text x="{}" y="{}" text-anchor="middle" font-size="12" fill="{text_color}">{value:.2}</text>"##,
                    x + cell / 2,
                    y + cell / 2 + 4
                );
            }
        }
    }

    let mut row_labels = String::new();
    let mut col_labels = String::new();
    for (i, label) in labels.iter().enumerate() {
        let _ = write!(
            row_labels,
            r##"<text x="{}" y="{}" text-anchor="end" font-size="11" fill="#374151">{label}</text>"##,
            left - 8,
            top + i * cell + cell / 2 + 4
        );
        let cx = left + i * cell + cell / 2;
        let cy = top + k * cell + 16;
        let _ = write!(
            col_labels,
            r##"<text x="{cx}" y="{cy}" text-anchor="end" font-size="11" fill="#374151" transform="rotate(-35, {cx}, {cy})">{label}</text>"##
        );
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background:white">
  {cells}
  {annotations}
  {row_labels}
  {col_labels}
</svg>"##
    )
}

/// Scatter plot of (x, y) points colored by churn class.
pub fn scatter_svg(
    points: &[(f64, f64, i64)],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> String {
    let width = 620;
    let height = 420;
    let margin = 55;
    let chart_width = (width - 2 * margin) as f64;
    let chart_height = (height - 2 * margin) as f64;

    let (x_min, x_max) = value_range(points.iter().map(|p| p.0));
    let (y_min, y_max) = value_range(points.iter().map(|p| p.1));

    let mut dots = String::new();
    for &(x, y, churn) in points {
        let px = margin as f64 + (x - x_min) / (x_max - x_min) * chart_width;
        let py = margin as f64 + chart_height - (y - y_min) / (y_max - y_min) * chart_height;
        let _ = write!(
            dots,
            r##"<circle cx="{px:.1}" cy="{py:.1}" r="4" fill="{}" stroke="#4b5563" stroke-width="0.4" opacity="0.8"/>"##,
            churn_color(churn)
        );
    }

    let legend = churn_legend(width - margin - 110, margin);
    let ticks = axis_ticks(
        margin,
        width - margin,
        height - margin,
        (x_min, x_max),
        (y_min, y_max),
    );

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background:white">
  <text x="{title_x}" y="22" text-anchor="middle" font-size="14" font-weight="600" fill="#374151">{title}</text>
  <line x1="{margin}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{margin}" y1="{margin}" x2="{margin}" y2="{bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <text x="{title_x}" y="{x_label_y}" text-anchor="middle" font-size="12" fill="#6b7280">{x_label}</text>
  <text x="16" y="{y_label_y}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 16, {y_label_y})">{y_label}</text>
  {ticks}
  {dots}
  {legend}
</svg>"##,
        title_x = width / 2,
        bottom = height - margin,
        right = width - margin,
        x_label_y = height - 12,
        y_label_y = height / 2,
    )
}

/// Box plot of one numeric series per group.
pub fn box_plot_svg(
    groups: &[(String, BoxStats)],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> String {
    let width = 620;
    let height = 420;
    let margin = 55;
    let chart_width = (width - 2 * margin) as f64;
    let chart_height = (height - 2 * margin) as f64;

    let (y_min, y_max) = value_range(groups.iter().flat_map(|(_, s)| {
        [s.whisker_low, s.whisker_high]
            .into_iter()
            .chain(s.fliers.iter().copied())
    }));

    let to_y = |v: f64| -> f64 {
        margin as f64 + chart_height - (v - y_min) / (y_max - y_min) * chart_height
    };

    let slot = chart_width / groups.len().max(1) as f64;
    let box_width = (slot * 0.4).min(80.0);

    let mut marks = String::new();
    for (i, (label, stats)) in groups.iter().enumerate() {
        let center = margin as f64 + i as f64 * slot + slot / 2.0;
        let left = center - box_width / 2.0;

        let y_q1 = to_y(stats.q1);
        let y_q3 = to_y(stats.q3);
        let y_median = to_y(stats.median);
        let y_low = to_y(stats.whisker_low);
        let y_high = to_y(stats.whisker_high);
        let fill = churn_color(i as i64);

        // whisker stem, caps, box, median in that order so the box overdraws
        let _ = write!(
            marks,
            r##"<line x1="{center:.1}" y1="{y_low:.1}" x2="{center:.1}" y2="{y_high:.1}" stroke="#4b5563" stroke-width="1"/>"##
        );
        for y in [y_low, y_high] {
            let _ = write!(
                marks,
                r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#4b5563" stroke-width="1"/>"##,
                center - box_width / 4.0,
                center + box_width / 4.0
            );
        }
        let _ = write!(
            marks,
            r##"<rect x="{left:.1}" y="{y_q3:.1}" width="{box_width:.1}" height="{:.1}" fill="{fill}" opacity="0.75" stroke="#4b5563" stroke-width="1"/>"##,
            (y_q1 - y_q3).max(1.0)
        );
        let _ = write!(
            marks,
            r##"<line x1="{left:.1}" y1="{y_median:.1}" x2="{:.1}" y2="{y_median:.1}" stroke="#1f2937" stroke-width="2"/>"##,
            left + box_width
        );

        for &flier in &stats.fliers {
            let _ = write!(
                marks,
                r##"<circle cx="{center:.1}" cy="{:.1}" r="3" fill="none" stroke="#4b5563" stroke-width="1"/>"##,
                to_y(flier)
            );
        }

        let _ = write!(
            marks,
            r##"<text x="{center:.1}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">{label}</text>"##,
            height - margin + 18
        );
    }

    let y_ticks = y_axis_ticks(margin, height - margin, (y_min, y_max));

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background:white">
  <text x="{title_x}" y="22" text-anchor="middle" font-size="14" font-weight="600" fill="#374151">{title}</text>
  <line x1="{margin}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{margin}" y1="{margin}" x2="{margin}" y2="{bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <text x="{title_x}" y="{x_label_y}" text-anchor="middle" font-size="12" fill="#6b7280">{x_label}</text>
  <text x="16" y="{y_label_y}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 16, {y_label_y})">{y_label}</text>
  {y_ticks}
  {marks}
</svg>"##,
        title_x = width / 2,
        bottom = height - margin,
        right = width - margin,
        x_label_y = height - 12,
        y_label_y = height / 2,
    )
}

/// Min/max of a value stream with a small padding, guarding against a
/// degenerate zero-width range.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let pad = ((max - min) * 0.05).max(0.5);
    (min - pad, max + pad)
}

fn churn_legend(x: usize, y: usize) -> String {
    let mut legend = format!(
        r##"<text x="{x}" y="{y}" font-size="12" fill="#374151">Churn</text>"##
    );
    for (i, label) in ["0", "1"].iter().enumerate() {
        let row_y = y + 16 + i * 18;
        let _ = write!(
            legend,
            r##"<rect x="{x}" y="{}" width="12" height="12" fill="{}"/><text x="{}" y="{}" font-size="12" fill="#374151">{label}</text>"##,
            row_y,
            CHURN_COLORS[i],
            x + 18,
            row_y + 10
        );
    }
    legend
}

fn axis_ticks(
    left: usize,
    right: usize,
    bottom: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> String {
    let mut ticks = String::new();
    for i in 0..=4 {
        let t = f64::from(i) / 4.0;
        let value = x_range.0 + t * (x_range.1 - x_range.0);
        let x = left as f64 + t * (right - left) as f64;
        let _ = write!(
            ticks,
            r##"<text x="{x:.1}" y="{}" text-anchor="middle" font-size="10" fill="#9ca3af">{value:.1}</text>"##,
            bottom + 14
        );
    }
    ticks.push_str(&y_axis_ticks(left, bottom, y_range));
    ticks
}

fn y_axis_ticks(left: usize, bottom: usize, y_range: (f64, f64)) -> String {
    let top = 55;
    let mut ticks = String::new();
    for i in 0..=4 {
        let t = f64::from(i) / 4.0;
        let value = y_range.0 + t * (y_range.1 - y_range.0);
        let y = bottom as f64 - t * (bottom - top) as f64;
        let _ = write!(
            ticks,
            r##"<text x="{}" y="{y:.1}" text-anchor="end" font-size="10" fill="#9ca3af">{value:.1}</text>"##,
            left - 6
        );
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_stats_simple() {
        let values: Vec<f64> = (1..=8).map(f64::from).collect();
        let stats = compute_box_stats(&values).unwrap();

        assert!((stats.q1 - 2.75).abs() < 1e-12);
        assert!((stats.median - 4.5).abs() < 1e-12);
        assert!((stats.q3 - 6.25).abs() < 1e-12);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 8.0);
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn test_box_stats_flags_outliers() {
        let mut values: Vec<f64> = (1..=8).map(f64::from).collect();
        values.push(100.0);
        let stats = compute_box_stats(&values).unwrap();

        assert_eq!(stats.fliers, vec![100.0]);
        assert_eq!(stats.whisker_high, 8.0);
    }

    #[test]
    fn test_box_stats_empty_is_none() {
        assert!(compute_box_stats(&[]).is_none());
    }

    #[test]
    fn test_bar_chart_one_bar_per_category() {
        let svg = bar_chart_svg(&[(0, 3), (1, 2)]);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains(">3</text>"));
        assert!(svg.contains(">2</text>"));
    }

    #[test]
    fn test_heatmap_annotates_cells() {
        let matrix = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        let svg = heatmap_svg(&["a", "b"], &matrix);

        assert_eq!(svg.matches("<rect").count(), 4);
        assert_eq!(svg.matches(">1.00</text>").count(), 4);
        assert!(svg.contains(">a</text>"));
        assert!(svg.contains(">b</text>"));
    }

    #[test]
    fn test_heatmap_skips_nan_annotations() {
        let matrix = vec![vec![1.0, f64::NAN], vec![f64::NAN, 1.0]];
        let svg = heatmap_svg(&["a", "b"], &matrix);

        assert_eq!(svg.matches(">1.00</text>").count(), 2);
        assert_eq!(svg.matches(NAN_CELL_COLOR).count(), 2);
    }

    #[test]
    fn test_scatter_one_circle_per_point() {
        let points = vec![(1.0, 3.0, 0), (2.0, 5.0, 1), (3.0, 8.0, 0)];
        let svg = scatter_svg(&points, "Title", "X", "Y");

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">Title</text>"));
        assert!(svg.contains(CHURN_COLORS[0]));
        assert!(svg.contains(CHURN_COLORS[1]));
    }

    #[test]
    fn test_box_plot_draws_each_group() {
        let values: Vec<f64> = (1..=8).map(f64::from).collect();
        let stats = compute_box_stats(&values).unwrap();
        let groups = vec![
            ("0 = No".to_string(), stats.clone()),
            ("1 = Yes".to_string(), stats),
        ];
        let svg = box_plot_svg(&groups, "Title", "Churn", "Total Purchase");

        // one box rect per group
        assert_eq!(svg.matches(r##"opacity="0.75""##).count(), 2);
        assert!(svg.contains(">0 = No</text>"));
        assert!(svg.contains(">1 = Yes</text>"));
    }

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), "#3b4cc0");
        assert_eq!(coolwarm(1.0), "#b40426");
        assert_eq!(coolwarm(0.0), "#f7f7f7");
    }
}
