//! Horizontal text bar chart of per-asset performance.

use crate::models::AssetMetrics;

const DEFAULT_HALF_WIDTH: usize = 30;

/// Renders one line per asset. Gains extend right of the axis, losses left;
/// bar lengths are scaled so the largest finite magnitude fills `half_width` cells.
/// Infinite values draw a full-width bar; NaN is shown as `n/a`.
pub fn render_performance_chart(metrics: &[AssetMetrics], half_width: usize) -> String {
    let half_width = half_width.max(1);
    let label_width = metrics.iter().map(|m| m.asset.chars().count()).max().unwrap_or(0);
    let max_abs = metrics
        .iter()
        .filter_map(|m| m.performance_percent)
        .filter(|p| p.is_finite())
        .fold(0.0_f64, |acc, p| acc.max(p.abs()));

    let mut out = String::from("Portfolio Performance (%)\n");
    for m in metrics {
        let line = match m.performance_percent.filter(|p| !p.is_nan()) {
            Some(p) => {
                let cells = if p.is_infinite() {
                    half_width
                } else if max_abs > 0.0 {
                    (((p.abs() / max_abs) * half_width as f64).round() as usize).min(half_width)
                } else {
                    0
                };
                let (left, right) = if p < 0.0 {
                    (format!("{:>width$}", "#".repeat(cells), width = half_width), String::new())
                } else {
                    (" ".repeat(half_width), "#".repeat(cells))
                };
                format!("{:<lw$} {}|{} {:.2}%", m.asset, left, right, p, lw = label_width)
            }
            None => format!("{:<lw$} {}| n/a", m.asset, " ".repeat(half_width), lw = label_width),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_default(metrics: &[AssetMetrics]) -> String {
    render_performance_chart(metrics, DEFAULT_HALF_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(asset: &str, performance: Option<f64>) -> AssetMetrics {
        AssetMetrics {
            asset: asset.to_string(),
            current_value: 0.0,
            performance_percent: performance,
        }
    }

    #[test]
    fn test_largest_magnitude_fills_half_width() {
        let chart = render_performance_chart(&[metric("ACME", Some(20.0)), metric("BETA", Some(-10.0))], 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("ACME {}|{} 20.00%", " ".repeat(10), "#".repeat(10)));
        assert_eq!(lines[2], format!("BETA {}{}| -10.00%", " ".repeat(5), "#".repeat(5)));
    }

    #[test]
    fn test_undefined_performance_has_no_bar() {
        let chart = render_performance_chart(&[metric("FREE", None)], 4);
        assert!(chart.lines().nth(1).unwrap().ends_with("| n/a"));
    }

    #[test]
    fn test_infinite_performance_draws_full_bar() {
        let chart = render_performance_chart(
            &[metric("ACME", Some(20.0)), metric("MOON", Some(f64::INFINITY)), metric("PIT", Some(f64::NEG_INFINITY))],
            10,
        );
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[1], format!("ACME {}|{} 20.00%", " ".repeat(10), "#".repeat(10)));
        assert_eq!(lines[2], format!("MOON {}|{} inf%", " ".repeat(10), "#".repeat(10)));
        assert_eq!(lines[3], format!("PIT  {}| -inf%", "#".repeat(10)));
    }

    #[test]
    fn test_nan_performance_has_no_bar() {
        let chart = render_performance_chart(&[metric("ODD", Some(f64::NAN))], 4);
        assert!(chart.lines().nth(1).unwrap().ends_with("| n/a"));
    }

    #[test]
    fn test_all_zero_does_not_divide_by_zero() {
        let chart = render_performance_chart(&[metric("FLAT", Some(0.0))], 4);
        assert!(chart.contains("FLAT     | 0.00%"));
    }
}
