use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(show_metrics))
}

pub async fn show_metrics(State(state): State<AppState>) -> Response {
    info!("GET /metrics - Computing portfolio metrics");
    let metrics = state.portfolio.lock().metrics();

    match &metrics.summary {
        Some(summary) => Html(views::render_metrics(&metrics, summary)).into_response(),
        None => views::EMPTY_PORTFOLIO_MESSAGE.into_response(),
    }
}
