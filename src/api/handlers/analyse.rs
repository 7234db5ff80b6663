//! Conversation analysis endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::AppState;
use crate::api::types::ApiError;
use crate::models::AnalyseRequest;
use crate::models::AnalysisResult;
use crate::TeamPulseError;

/// Analyse a message batch (POST /api/analyse)
///
/// Malformed bodies never reach the analyzer; they come back as
/// 400 `{ "error": ... }`.
pub async fn analyse(
    State(state): State<AppState>,
    payload: Result<Json<AnalyseRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let start_time = std::time::Instant::now();

    let Json(request) = payload.map_err(|rejection| {
        warn!("❌ POST /api/analyse - 400 ({})", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    })?;
    request.validate().map_err(|e| {
        warn!("❌ POST /api/analyse - 400 ({})", e);
        ApiError::from(e)
    })?;

    let scenario = request.scenario_name.clone();
    let messages = request.into_messages();

    // Scoring is CPU-bound; keep it off the async worker threads
    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&messages))
        .await
        .map_err(|e| TeamPulseError::Custom(format!("Analysis task failed: {e}")))?
        .map_err(|e| {
            error!("❌ POST /api/analyse - analysis failed: {}", e);
            e
        })?;

    info!(
        "✅ POST /api/analyse - {}ms - 200 ({} messages, scenario: {}, {} nudges)",
        start_time.elapsed().as_millis(),
        result.message_count(),
        scenario.as_deref().unwrap_or("-"),
        result.nudges.len()
    );
    Ok(Json(result))
}
