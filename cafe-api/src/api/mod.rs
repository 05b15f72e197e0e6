//! API routes for cafe-api

pub mod cafes;
pub mod health;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(cafes::home))
        .route("/health", get(health::health_check))
        .route("/random", get(cafes::random_cafe))
        .route("/all", get(cafes::all_cafes))
        .route("/search", get(cafes::search))
        .route("/add", post(cafes::add_cafe))
        .route("/update-price/{id}", patch(cafes::update_price))
        .route("/report-closed/{id}", delete(cafes::report_closed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
