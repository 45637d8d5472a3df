//! Report model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::{
    enums::{ReportStatus, ReportType},
    impact::{DeviceTypeBreakdown, ImpactSummary},
};
use crate::error::{AppError, AppResult};

/// Inclusive calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        let range = Self { start, end };
        range.validate_order()?;
        Ok(range)
    }

    pub fn validate_order(&self) -> AppResult<()> {
        if self.start > self.end {
            return Err(AppError::Validation(format!(
                "start date ({}) must be before or equal to end date ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Inclusion flags consumed by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportOptions {
    pub charts: bool,
    pub detailed_breakdown: bool,
    pub environmental_impact: bool,
    pub financial_summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            charts: true,
            detailed_breakdown: false,
            environmental_impact: true,
            financial_summary: false,
        }
    }
}

/// Generate report request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub date_range: DateRange,
    /// Restrict to one client; absent means all clients
    pub client_id: Option<i32>,
    #[serde(default)]
    pub options: ReportOptions,
}

/// Generated impact report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub date_range: DateRange,
    /// Client id; `None` means all clients
    pub company: Option<i32>,
    pub options: ReportOptions,
    pub impact_summary: ImpactSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_breakdown: Option<Vec<DeviceTypeBreakdown>>,
    pub pickup_count: i64,
    /// Reference table version the figures were computed with
    pub reference_tables_version: String,
    pub status: ReportStatus,
    pub generated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Move a draft to published. Impact figures are left untouched.
    pub fn publish(&mut self, at: DateTime<Utc>) -> AppResult<()> {
        if self.status == ReportStatus::Published {
            return Err(AppError::Conflict(format!(
                "Report {} is already published",
                self.id
            )));
        }
        self.status = ReportStatus::Published;
        self.published_at = Some(at);
        Ok(())
    }
}

/// Query parameters for report listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ReportQuery {
    /// Filter by client id
    pub client_id: Option<i32>,
    /// Filter by status (draft, published)
    pub status: Option<ReportStatus>,
}

/// Query parameters for the dashboard impact summary
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ImpactQuery {
    /// Start date (YYYY-MM-DD), inclusive
    pub start_date: NaiveDate,
    /// End date (YYYY-MM-DD), inclusive
    pub end_date: NaiveDate,
    /// Restrict to one client
    pub client_id: Option<i32>,
}

/// Outcome of recomputing a stored report from its own device set
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportVerification {
    pub report_id: Uuid,
    pub matches: bool,
    pub stored: ImpactSummary,
    pub recomputed: ImpactSummary,
}
