//! Pickups repository

use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{DateRange, PickupRecord, PickupStatus},
};

#[derive(Clone)]
pub struct PickupsRepository {
    pool: Pool<Postgres>,
}

fn from_row(row: &PgRow) -> AppResult<PickupRecord> {
    let id: i32 = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let status = PickupStatus::parse(&status).ok_or_else(|| {
        AppError::InvalidRecord(format!("pickup {} has unknown status '{}'", id, status))
    })?;

    Ok(PickupRecord {
        id,
        client_id: row.try_get("client_id")?,
        scheduled_date: row.try_get("scheduled_date")?,
        status,
    })
}

impl PickupsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List pickups scheduled within a date range, optionally for one client
    pub async fn list_in_range(
        &self,
        range: &DateRange,
        client_id: Option<i32>,
    ) -> AppResult<Vec<PickupRecord>> {
        let mut query = String::from(
            "SELECT id, client_id, scheduled_date, status FROM pickups \
             WHERE scheduled_date >= $1 AND scheduled_date <= $2",
        );
        if client_id.is_some() {
            query.push_str(" AND client_id = $3");
        }
        query.push_str(" ORDER BY id");

        let mut builder = sqlx::query(&query).bind(range.start).bind(range.end);
        if let Some(cid) = client_id {
            builder = builder.bind(cid);
        }

        builder
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(from_row)
            .collect()
    }
}
