//! Record source: the data-access collaborator feeding the engine

use async_trait::async_trait;
use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{DateRange, DeviceRecord, PickupRecord},
};

/// Supplies already-validated pickup and device records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Pickups scheduled within `range`, optionally for one client
    async fn pickups_in_range(
        &self,
        range: &DateRange,
        client_id: Option<i32>,
    ) -> AppResult<Vec<PickupRecord>>;

    /// Devices owned by any of `pickup_ids`, ordered by id
    async fn devices_for_pickups(&self, pickup_ids: &[i32]) -> AppResult<Vec<DeviceRecord>>;
}

/// Immutable set of records a report is computed from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSnapshot {
    pub pickups: Vec<PickupRecord>,
    pub devices: Vec<DeviceRecord>,
}

impl RecordSnapshot {
    pub fn new(pickups: Vec<PickupRecord>, devices: Vec<DeviceRecord>) -> Self {
        Self { pickups, devices }
    }

    /// Read a snapshot for `range`/`client_id` from `source`
    pub async fn load(
        source: &dyn RecordSource,
        range: &DateRange,
        client_id: Option<i32>,
    ) -> AppResult<Self> {
        let pickups = source.pickups_in_range(range, client_id).await?;
        let devices = if pickups.is_empty() {
            Vec::new()
        } else {
            let ids: Vec<i32> = pickups.iter().map(|p| p.id).collect();
            source.devices_for_pickups(&ids).await?
        };
        Ok(Self { pickups, devices })
    }
}

#[async_trait]
impl RecordSource for RecordSnapshot {
    async fn pickups_in_range(
        &self,
        range: &DateRange,
        client_id: Option<i32>,
    ) -> AppResult<Vec<PickupRecord>> {
        Ok(self
            .pickups
            .iter()
            .filter(|p| range.contains(p.scheduled_date))
            .filter(|p| client_id.map_or(true, |c| p.client_id == c))
            .cloned()
            .collect())
    }

    async fn devices_for_pickups(&self, pickup_ids: &[i32]) -> AppResult<Vec<DeviceRecord>> {
        let ids: HashSet<i32> = pickup_ids.iter().copied().collect();
        let mut devices: Vec<DeviceRecord> = self
            .devices
            .iter()
            .filter(|d| ids.contains(&d.pickup_id))
            .cloned()
            .collect();
        devices.sort_by_key(|d| d.id);
        Ok(devices)
    }
}
