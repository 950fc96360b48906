use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::CreateAsset;
use crate::state::AppState;
use crate::views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assets))
        .route("/add_asset", get(add_asset_form).post(add_asset))
}

pub async fn list_assets(State(state): State<AppState>) -> Html<String> {
    info!("GET / - Listing portfolio");
    let portfolio = state.portfolio.lock();
    Html(views::render_index(portfolio.table()))
}

pub async fn add_asset_form() -> Html<String> {
    info!("GET /add_asset - Showing add asset form");
    Html(views::render_add_form())
}

pub async fn add_asset(
    State(state): State<AppState>,
    Form(form): Form<CreateAsset>,
) -> Result<Redirect, AppError> {
    info!("POST /add_asset - Adding asset {}", form.asset_name);
    let record = form.into_record().map_err(|e| {
        error!("Rejected add asset form: {}", e);
        AppError::Validation(e)
    })?;

    state.portfolio.lock().add_and_save(record).map_err(|e| {
        error!("Failed to save portfolio: {}", e);
        e
    })?;

    Ok(Redirect::to("/"))
}
