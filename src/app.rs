use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{api, assets, health, metrics};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(assets::router())
        .merge(metrics::router())
        .nest("/health", health::router())
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
