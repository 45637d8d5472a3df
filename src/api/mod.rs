//! API handlers for the impact REST endpoints

pub mod health;
pub mod impact;
pub mod openapi;
pub mod reports;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Dashboard
        .route("/impact", get(impact::get_impact))
        // Reports
        .route("/reports", get(reports::list_reports).post(reports::generate_report))
        .route("/reports/:id", get(reports::get_report))
        .route("/reports/:id/publish", post(reports::publish_report))
        .route("/reports/:id/verify", get(reports::verify_report))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
