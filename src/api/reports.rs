//! Report endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        report::{ReportQuery, ReportVerification},
        GenerateReportRequest, Report,
    },
    AppState,
};

/// Generate a draft report
#[utoipa::path(
    post,
    path = "/reports",
    tag = "reports",
    request_body = GenerateReportRequest,
    responses(
        (status = 201, description = "Report generated", body = Report),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid device record", body = crate::error::ErrorResponse)
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> AppResult<(StatusCode, Json<Report>)> {
    let report = state.services.reports.generate(&request).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// List reports
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Reports list", body = Vec<Report>)
    )
)]
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = state.services.reports.list(&query).await?;
    Ok(Json(reports))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report", body = Report),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Report>> {
    let report = state.services.reports.get(id).await?;
    Ok(Json(report))
}

/// Publish a draft report
#[utoipa::path(
    post,
    path = "/reports/{id}/publish",
    tag = "reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report published", body = Report),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Report already published", body = crate::error::ErrorResponse)
    )
)]
pub async fn publish_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Report>> {
    let report = state.services.reports.publish(id).await?;
    Ok(Json(report))
}

/// Recompute a report from its own device set and compare
#[utoipa::path(
    get,
    path = "/reports/{id}/verify",
    tag = "reports",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Verification result", body = ReportVerification),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn verify_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ReportVerification>> {
    let verification = state.services.reports.verify(id).await?;
    Ok(Json(verification))
}
