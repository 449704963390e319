pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use posture_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: &Config) -> Router {
    let app_state = state::AppState::new(config.snapshot_path.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/api/health", get(routes::health::health))
        // Summaries
        .route("/api/summaries", get(routes::summaries::get_summaries))
        .route("/api/summaries", post(routes::summaries::post_summaries))
        // Frameworks
        .route(
            "/api/frameworks/{id}/summary",
            post(routes::frameworks::framework_summary),
        )
        .route(
            "/api/frameworks/{id}/controls",
            post(routes::frameworks::framework_controls),
        )
        // Badge
        .route("/api/badge", post(routes::badge::badge))
        // Billing
        .route("/api/billing/preview", post(routes::billing::preview))
        // Storage
        .route("/api/storage/extract-key", post(routes::storage::extract_key))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the posture API server.
///
/// Each inbound request runs one independent derivation over its own
/// snapshot; there is no shared mutable state between requests.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let actual = listener.local_addr()?;

    tracing::info!("posture API listening on http://{actual}");

    axum::serve(listener, app).await?;
    Ok(())
}
