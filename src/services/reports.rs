//! Report generation and publication service

use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    impact::{self, assembler::validate_request, RecordSnapshot, RecordSource, ReferenceTables},
    models::{report::{ReportQuery, ReportVerification}, GenerateReportRequest, Report},
    repository::ReportStore,
};

#[derive(Clone)]
pub struct ReportsService {
    source: Arc<dyn RecordSource>,
    store: Arc<dyn ReportStore>,
    tables: Arc<ReferenceTables>,
}

impl ReportsService {
    pub fn new(
        source: Arc<dyn RecordSource>,
        store: Arc<dyn ReportStore>,
        tables: Arc<ReferenceTables>,
    ) -> Self {
        Self { source, store, tables }
    }

    /// Generate and store a draft report
    pub async fn generate(&self, request: &GenerateReportRequest) -> AppResult<Report> {
        validate_request(request)?;

        tracing::info!(
            "Generating {} report: start={}, end={}, client={:?}",
            request.report_type.as_str(),
            request.date_range.start,
            request.date_range.end,
            request.client_id
        );

        let snapshot =
            RecordSnapshot::load(self.source.as_ref(), &request.date_range, request.client_id).await?;
        let report = impact::assemble_report(request, &snapshot, &self.tables)?;

        if report.impact_summary.total_inventory == 0 {
            tracing::warn!(
                "Empty report generated for period {} to {}",
                request.date_range.start,
                request.date_range.end
            );
        } else {
            tracing::info!(
                report_id = %report.id,
                pickups = report.pickup_count,
                devices = report.impact_summary.total_inventory,
                processed = report.impact_summary.total_devices_collected,
                "Report generated"
            );
        }

        self.store.insert(&report).await?;
        Ok(report)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Report> {
        self.store.get(id).await
    }

    pub async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>> {
        self.store.list(query).await
    }

    /// Publish a draft report
    pub async fn publish(&self, id: Uuid) -> AppResult<Report> {
        let report = self.store.publish(id).await?;
        tracing::info!(report_id = %id, "Report published");
        Ok(report)
    }

    /// Recompute a stored report with the tables it was generated with
    pub async fn verify(&self, id: Uuid) -> AppResult<ReportVerification> {
        let report = self.store.get(id).await?;

        let tables = if report.reference_tables_version == self.tables.version {
            self.tables.as_ref().clone()
        } else {
            ReferenceTables::builtin(&report.reference_tables_version).ok_or_else(|| {
                AppError::Conflict(format!(
                    "Reference tables {} are no longer available",
                    report.reference_tables_version
                ))
            })?
        };

        let snapshot =
            RecordSnapshot::load(self.source.as_ref(), &report.date_range, report.company).await?;
        let recomputed = impact::recompute_summary(&report, &snapshot, &tables)?;
        let matches = recomputed == report.impact_summary;
        if !matches {
            tracing::warn!(report_id = %id, "Stored impact summary differs from recomputation");
        }

        Ok(ReportVerification {
            report_id: report.id,
            matches,
            stored: report.impact_summary,
            recomputed,
        })
    }
}
