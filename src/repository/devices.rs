//! Devices repository

use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{DeviceRecord, DeviceType, Disposition},
};

#[derive(Clone)]
pub struct DevicesRepository {
    pool: Pool<Postgres>,
}

fn from_row(row: &PgRow) -> AppResult<DeviceRecord> {
    let id: i32 = row.try_get("id")?;

    let type_label: Option<String> = row.try_get("device_type")?;
    let device_type = match type_label.as_deref().map(DeviceType::parse) {
        Some(Some(t)) => t,
        _ => {
            tracing::warn!(
                device_id = id,
                device_type = ?type_label,
                "Unknown device type, counting as 'other'"
            );
            DeviceType::Other
        }
    };

    let disposition: String = row.try_get("disposition")?;
    let disposition = Disposition::parse(&disposition).ok_or_else(|| {
        AppError::InvalidRecord(format!("device {} has unknown disposition '{}'", id, disposition))
    })?;

    Ok(DeviceRecord {
        id,
        pickup_id: row.try_get("pickup_id")?,
        device_type,
        weight_kg: row.try_get("weight_kg")?,
        disposition,
        processed_at: row.try_get("processed_at")?,
    })
}

impl DevicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Devices belonging to any of the given pickups, ordered by id
    pub async fn list_for_pickups(&self, pickup_ids: &[i32]) -> AppResult<Vec<DeviceRecord>> {
        if pickup_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query(
            r#"
            SELECT id, pickup_id, device_type, weight_kg, disposition, processed_at
            FROM devices
            WHERE pickup_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(pickup_ids)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(from_row)
        .collect()
    }
}
