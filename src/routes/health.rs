use axum::routing::get;
use axum::Router;
use tracing::debug;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Liveness only; does not touch the portfolio file.
pub async fn health_check() -> &'static str {
    debug!("GET /health - Liveness check");
    "OK"
}
