//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, impact, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "E-waste Impact API",
        version = "0.3.0",
        description = "Environmental impact figures and reports for e-waste collection"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Impact
        impact::get_impact,
        // Reports
        reports::generate_report,
        reports::list_reports,
        reports::get_report,
        reports::publish_report,
        reports::verify_report,
    ),
    components(
        schemas(
            // Impact
            crate::models::ImpactSummary,
            crate::models::MaterialsRecovered,
            crate::models::EnvironmentalEquivalents,
            crate::models::DeviceTypeBreakdown,
            crate::models::DeviceType,
            crate::models::report::ImpactQuery,
            // Reports
            crate::models::Report,
            crate::models::ReportType,
            crate::models::ReportStatus,
            crate::models::ReportOptions,
            crate::models::DateRange,
            crate::models::GenerateReportRequest,
            crate::models::report::ReportQuery,
            crate::models::report::ReportVerification,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "impact", description = "Dashboard impact figures"),
        (name = "reports", description = "Impact report generation and publication")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
