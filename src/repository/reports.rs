//! Reports repository

use chrono::Utc;
use sqlx::{postgres::PgRow, types::Json, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        report::ReportQuery, DateRange, DeviceTypeBreakdown, ImpactSummary, Report, ReportOptions,
        ReportStatus, ReportType,
    },
};

const COLUMNS: &str = "id, title, report_type, start_date, end_date, client_id, options, \
    impact_summary, device_breakdown, pickup_count, reference_tables_version, status, \
    generated_at, published_at";

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Postgres>,
}

fn from_row(row: &PgRow) -> AppResult<Report> {
    let id: Uuid = row.try_get("id")?;

    let report_type: String = row.try_get("report_type")?;
    let report_type = ReportType::parse(&report_type).ok_or_else(|| {
        AppError::Internal(format!("report {} has unknown type '{}'", id, report_type))
    })?;
    let status: String = row.try_get("status")?;
    let status = ReportStatus::parse(&status).ok_or_else(|| {
        AppError::Internal(format!("report {} has unknown status '{}'", id, status))
    })?;

    let options: Json<ReportOptions> = row.try_get("options")?;
    let impact_summary: Json<ImpactSummary> = row.try_get("impact_summary")?;
    let device_breakdown: Option<Json<Vec<DeviceTypeBreakdown>>> = row.try_get("device_breakdown")?;

    Ok(Report {
        id,
        title: row.try_get("title")?,
        report_type,
        date_range: DateRange {
            start: row.try_get("start_date")?,
            end: row.try_get("end_date")?,
        },
        company: row.try_get("client_id")?,
        options: options.0,
        impact_summary: impact_summary.0,
        device_breakdown: device_breakdown.map(|b| b.0),
        pickup_count: row.try_get("pickup_count")?,
        reference_tables_version: row.try_get("reference_tables_version")?,
        status,
        generated_at: row.try_get("generated_at")?,
        published_at: row.try_get("published_at")?,
    })
}

impl ReportsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Persist a freshly generated report
    pub async fn insert(&self, report: &Report) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reports (
                id, title, report_type, start_date, end_date, client_id, options,
                impact_summary, device_breakdown, pickup_count, reference_tables_version,
                status, generated_at, published_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(report.id)
        .bind(&report.title)
        .bind(report.report_type.as_str())
        .bind(report.date_range.start)
        .bind(report.date_range.end)
        .bind(report.company)
        .bind(Json(&report.options))
        .bind(Json(&report.impact_summary))
        .bind(report.device_breakdown.as_ref().map(Json))
        .bind(report.pickup_count)
        .bind(&report.reference_tables_version)
        .bind(report.status.as_str())
        .bind(report.generated_at)
        .bind(report.published_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Get report by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Report> {
        let query = format!("SELECT {} FROM reports WHERE id = $1", COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;
        from_row(&row)
    }

    /// List reports, newest first
    pub async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.client_id.is_some() {
            conditions.push(format!("client_id = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!(
            "SELECT {} FROM reports {} ORDER BY generated_at DESC",
            COLUMNS, where_clause
        );
        let mut builder = sqlx::query(&select_q);
        if let Some(cid) = query.client_id {
            builder = builder.bind(cid);
        }
        if let Some(status) = query.status {
            builder = builder.bind(status.as_str());
        }

        builder
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(from_row)
            .collect()
    }

    /// Draft → published. The conditional update serializes concurrent publishes.
    pub async fn publish(&self, id: Uuid) -> AppResult<Report> {
        let result = sqlx::query(
            "UPDATE reports SET status = 'published', published_at = $2 WHERE id = $1 AND status = 'draft'",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let report = self.get_by_id(id).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!("Report {} is already published", id)));
        }
        Ok(report)
    }
}
