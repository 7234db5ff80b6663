//! HTTP server implementation

use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::Analyzer;
use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::Result;

/// Build the full application router with middleware
pub fn build_app(state: AppState, enable_cors: bool, request_timeout: Duration) -> Router {
    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout));

    // Add CORS if enabled
    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting TeamPulse API server...");

    let analyzer = Analyzer::from_config(config);
    info!(
        "🧮 Scorer: {} | nudge thresholds: {:?}",
        analyzer.scorer_name(),
        analyzer.thresholds()
    );

    let app = build_app(
        AppState::new(analyzer),
        enable_cors,
        Duration::from_secs(config.request_timeout()),
    );

    // Start server
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health     - Health check");
    info!("  POST /api/analyse    - Analyse a message batch");
    info!("  GET  /api/scenarios  - List built-in scenarios");

    axum::serve(listener, app).await?;

    Ok(())
}
