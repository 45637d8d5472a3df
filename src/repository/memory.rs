//! In-memory report store (tests, local runs without a database)

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{report::ReportQuery, Report},
};

use super::ReportStore;

#[derive(Default)]
pub struct InMemoryReportStore {
    reports: RwLock<HashMap<Uuid, Report>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert(&self, report: &Report) -> AppResult<()> {
        let mut reports = self.reports.write().await;
        if reports.contains_key(&report.id) {
            return Err(AppError::Conflict(format!("Report {} already exists", report.id)));
        }
        reports.insert(report.id, report.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Report> {
        self.reports
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>> {
        let reports = self.reports.read().await;
        let mut rows: Vec<Report> = reports
            .values()
            .filter(|r| query.client_id.map_or(true, |c| r.company == Some(c)))
            .filter(|r| query.status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        Ok(rows)
    }

    async fn publish(&self, id: Uuid) -> AppResult<Report> {
        // Write lock held across check and update.
        let mut reports = self.reports.write().await;
        let report = reports
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;
        report.publish(Utc::now())?;
        Ok(report.clone())
    }
}
