/// Scenario catalog handlers
use axum::extract::Path;
use axum::Json;
use tracing::info;

use crate::api::types::ApiResponse;
use crate::api::types::ScenarioSummary;
use crate::scenarios;
use crate::scenarios::Scenario;

/// List built-in scenarios (GET /api/scenarios)
pub async fn list_scenarios() -> Json<ApiResponse<Vec<ScenarioSummary>>> {
    info!("GET /api/scenarios");

    let summaries = scenarios::all()
        .iter()
        .map(|s| ScenarioSummary {
            name: s.name.to_string(),
            message_count: s.messages.len(),
        })
        .collect();
    Json(ApiResponse::success(summaries))
}

/// Messages of one scenario (GET /api/scenarios/:name)
pub async fn get_scenario(Path(name): Path<String>) -> Json<ApiResponse<Scenario>> {
    info!("GET /api/scenarios/{}", name);

    match scenarios::find(&name) {
        Some(scenario) => Json(ApiResponse::success(scenario.clone())),
        None => Json(ApiResponse::error(format!("Scenario '{name}' not found"))),
    }
}
