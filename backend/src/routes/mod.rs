//! Route definitions for the Run Outfit Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/advice", advice_routes())
        .route("/score", get(handlers::get_score))
}

/// Run advice routes
fn advice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_advice))
        .route("/evaluate", post(handlers::evaluate_advice))
}
