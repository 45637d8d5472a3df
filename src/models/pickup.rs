//! Pickup model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::PickupStatus;

/// One collection event for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupRecord {
    pub id: i32,
    pub client_id: i32,
    pub scheduled_date: NaiveDate,
    pub status: PickupStatus,
}
