//! Device model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{DeviceType, Disposition};

/// One physical unit collected during a pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: i32,
    pub pickup_id: i32,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub weight_kg: f64,
    pub disposition: Disposition,
    /// Set once the disposition reaches refurbished, recycled or disposed
    pub processed_at: Option<DateTime<Utc>>,
}

impl DeviceRecord {
    pub fn is_processed(&self) -> bool {
        self.disposition.is_processed()
    }
}
