//! Repository layer for database operations

pub mod devices;
pub mod memory;
pub mod pickups;
pub mod reports;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    impact::RecordSource,
    models::{report::ReportQuery, DateRange, DeviceRecord, PickupRecord, Report},
};

/// Persistence of generated reports and their publication state
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, report: &Report) -> AppResult<()>;
    async fn get(&self, id: Uuid) -> AppResult<Report>;
    async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>>;
    /// Draft → published; `Conflict` when the report is already published
    async fn publish(&self, id: Uuid) -> AppResult<Report>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub pickups: pickups::PickupsRepository,
    pub devices: devices::DevicesRepository,
    pub reports: reports::ReportsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pickups: pickups::PickupsRepository::new(pool.clone()),
            devices: devices::DevicesRepository::new(pool.clone()),
            reports: reports::ReportsRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl RecordSource for Repository {
    async fn pickups_in_range(
        &self,
        range: &DateRange,
        client_id: Option<i32>,
    ) -> AppResult<Vec<PickupRecord>> {
        self.pickups.list_in_range(range, client_id).await
    }

    async fn devices_for_pickups(&self, pickup_ids: &[i32]) -> AppResult<Vec<DeviceRecord>> {
        self.devices.list_for_pickups(pickup_ids).await
    }
}

#[async_trait]
impl ReportStore for Repository {
    async fn insert(&self, report: &Report) -> AppResult<()> {
        self.reports.insert(report).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Report> {
        self.reports.get_by_id(id).await
    }

    async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>> {
        self.reports.list(query).await
    }

    async fn publish(&self, id: Uuid) -> AppResult<Report> {
        self.reports.publish(id).await
    }
}
