use serde::Serialize;

/// Per-row figures derived from an [`super::AssetRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetMetrics {
    pub asset: String,
    pub current_value: f64,
    /// `None` when the purchase price is zero and the ratio is undefined.
    pub performance_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_cost_basis: f64,
    /// `None` when the total cost basis is zero.
    pub overall_change_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub assets: Vec<AssetMetrics>,
    pub summary: Option<PortfolioSummary>,
}
