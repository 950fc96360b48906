mod asset;
mod metrics;
mod portfolio;

pub use asset::{AssetRecord, CreateAsset, TIMESTAMP_FORMAT};
pub use metrics::{AssetMetrics, MetricsResponse, PortfolioSummary};
pub use portfolio::{PortfolioTable, UpdateOutcome, COLUMNS};
