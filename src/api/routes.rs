//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Analysis (both spellings accepted)
        .route("/analyse", post(handlers::analyse))
        .route("/analyze", post(handlers::analyse))
        // Scenario catalog
        .route("/scenarios", get(handlers::list_scenarios))
        .route("/scenarios/:name", get(handlers::get_scenario))
        .with_state(state)
}
