/// API request handlers
use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::analysis::Analyzer;
use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;

// Re-export sub-modules
pub mod analyse;
pub mod scenarios;

// Re-export handlers
pub use analyse::*;
pub use scenarios::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        scorer: state.analyzer.scorer_name().to_string(),
    }))
}
