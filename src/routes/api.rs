use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::{AssetRecord, MetricsResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(fetch_assets))
        .route("/metrics", get(fetch_metrics))
}

pub async fn fetch_assets(State(state): State<AppState>) -> Json<Vec<AssetRecord>> {
    info!("GET /api/assets - Fetching all assets");
    Json(state.portfolio.lock().table().records().to_vec())
}

pub async fn fetch_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    info!("GET /api/metrics - Fetching portfolio metrics");
    Json(state.portfolio.lock().metrics())
}
