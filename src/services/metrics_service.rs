use crate::models::{AssetMetrics, AssetRecord, PortfolioSummary, PortfolioTable};

/// Percentage change from `base` to `value`. `None` when `base` is zero.
fn percent_change(value: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        None
    } else {
        Some((value - base) / base * 100.0)
    }
}

fn row_metrics(record: &AssetRecord) -> AssetMetrics {
    AssetMetrics {
        asset: record.asset.clone(),
        current_value: record.current_value(),
        performance_percent: percent_change(record.current_price, record.purchase_price),
    }
}

/// Current value and performance for every row, in table order.
pub fn compute_row_metrics(table: &PortfolioTable) -> Vec<AssetMetrics> {
    table.records().iter().map(row_metrics).collect()
}

/// Totals across the table. Returns `None` for an empty portfolio.
pub fn compute_aggregate(table: &PortfolioTable) -> Option<PortfolioSummary> {
    if table.is_empty() {
        return None;
    }

    let total_value: f64 = table.records().iter().map(AssetRecord::current_value).sum();
    let total_cost_basis: f64 = table.records().iter().map(AssetRecord::cost_basis).sum();

    Some(PortfolioSummary {
        total_value,
        total_cost_basis,
        overall_change_percent: percent_change(total_value, total_cost_basis),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, f64, f64, f64)]) -> PortfolioTable {
        PortfolioTable::from_records(
            rows.iter()
                .map(|&(name, purchase, quantity, current)| AssetRecord::new(name, purchase, quantity, current))
                .collect(),
        )
    }

    #[test]
    fn test_single_asset_scenario() {
        let t = table(&[("ACME", 10.0, 5.0, 12.0)]);

        let rows = compute_row_metrics(&t);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].current_value, 60.0);
        assert!((rows[0].performance_percent.unwrap() - 20.0).abs() < 1e-9);

        let summary = compute_aggregate(&t).unwrap();
        assert_eq!(summary.total_value, 60.0);
        assert!((summary.overall_change_percent.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_gain_and_loss_cancel_out() {
        // ACME: cost 50, value 60. BETA: cost 100, value 90.
        let t = table(&[("ACME", 10.0, 5.0, 12.0), ("BETA", 20.0, 5.0, 18.0)]);

        let summary = compute_aggregate(&t).unwrap();

        assert_eq!(summary.total_value, 150.0);
        assert_eq!(summary.total_cost_basis, 150.0);
        assert_eq!(summary.overall_change_percent, Some(0.0));
    }

    #[test]
    fn test_row_values_sum_to_total() {
        let t = table(&[
            ("ACME", 10.0, 5.0, 12.0),
            ("BETA", 20.0, 3.5, 18.25),
            ("GAMMA", 0.5, 1000.0, 0.75),
        ]);

        let row_sum: f64 = compute_row_metrics(&t).iter().map(|m| m.current_value).sum();
        let total = compute_aggregate(&t).unwrap().total_value;

        assert!((row_sum - total).abs() < 1e-9);
    }

    #[test]
    fn test_empty_portfolio_has_no_aggregate() {
        let t = PortfolioTable::new();
        assert!(compute_row_metrics(&t).is_empty());
        assert!(compute_aggregate(&t).is_none());
    }

    #[test]
    fn test_zero_purchase_price_is_undefined_without_affecting_others() {
        let t = table(&[("FREE", 0.0, 10.0, 3.0), ("ACME", 10.0, 5.0, 12.0)]);

        let rows = compute_row_metrics(&t);

        assert_eq!(rows[0].performance_percent, None);
        assert_eq!(rows[0].current_value, 30.0);
        assert!((rows[1].performance_percent.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_cost_basis_gives_undefined_overall_change() {
        let t = table(&[("FREE", 0.0, 10.0, 3.0)]);

        let summary = compute_aggregate(&t).unwrap();

        assert_eq!(summary.total_value, 30.0);
        assert_eq!(summary.overall_change_percent, None);
    }

    #[test]
    fn test_price_update_is_reflected_immediately() {
        let mut t = table(&[("ACME", 10.0, 5.0, 12.0)]);

        t.update_price("ACME", 15.0);
        let rows = compute_row_metrics(&t);

        assert_eq!(rows[0].current_value, 75.0);
        assert!((rows[0].performance_percent.unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_performance() {
        let t = table(&[("BETA", 20.0, 5.0, 18.0)]);
        let rows = compute_row_metrics(&t);
        assert!((rows[0].performance_percent.unwrap() + 10.0).abs() < 1e-9);
    }
}
