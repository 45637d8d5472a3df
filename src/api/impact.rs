//! Dashboard impact endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{report::ImpactQuery, DateRange, ImpactSummary},
    AppState,
};

/// Impact summary for a date range
#[utoipa::path(
    get,
    path = "/impact",
    tag = "impact",
    params(ImpactQuery),
    responses(
        (status = 200, description = "Impact summary", body = ImpactSummary),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid device record", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_impact(
    State(state): State<AppState>,
    Query(query): Query<ImpactQuery>,
) -> AppResult<Json<ImpactSummary>> {
    let range = DateRange::new(query.start_date, query.end_date)?;
    let summary = state.services.impact.summary(range, query.client_id).await?;
    Ok(Json(summary))
}
