//! Dashboard impact figures

use std::sync::Arc;

use crate::{
    error::AppResult,
    impact::{self, RecordSnapshot, RecordSource, ReferenceTables},
    models::{DateRange, ImpactSummary},
};

#[derive(Clone)]
pub struct ImpactService {
    source: Arc<dyn RecordSource>,
    tables: Arc<ReferenceTables>,
}

impl ImpactService {
    pub fn new(source: Arc<dyn RecordSource>, tables: Arc<ReferenceTables>) -> Self {
        Self { source, tables }
    }

    /// Impact summary for a date range, optionally for one client
    pub async fn summary(&self, range: DateRange, client_id: Option<i32>) -> AppResult<ImpactSummary> {
        range.validate_order()?;
        let snapshot = RecordSnapshot::load(self.source.as_ref(), &range, client_id).await?;
        impact::summarize(&snapshot, &range, client_id, &self.tables)
    }

    pub fn table_version(&self) -> &str {
        &self.tables.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        impact::source::MockRecordSource,
        models::{DeviceRecord, DeviceType, Disposition, PickupRecord, PickupStatus},
    };
    use chrono::NaiveDate;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_reversed_range_never_reads_records() {
        let mut source = MockRecordSource::new();
        source.expect_pickups_in_range().never();
        source.expect_devices_for_pickups().never();

        let service = ImpactService::new(Arc::new(source), Arc::new(ReferenceTables::default()));
        let err = service
            .summary(range((2024, 5, 1), (2024, 4, 1)), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_no_pickups_skips_device_lookup() {
        let mut source = MockRecordSource::new();
        source
            .expect_pickups_in_range()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        source.expect_devices_for_pickups().never();

        let service = ImpactService::new(Arc::new(source), Arc::new(ReferenceTables::default()));
        let summary = service
            .summary(range((2024, 1, 1), (2024, 1, 31)), Some(3))
            .await
            .unwrap();
        assert_eq!(summary, ImpactSummary::default());
    }

    #[tokio::test]
    async fn test_summary_from_source() {
        let mut source = MockRecordSource::new();
        source
            .expect_pickups_in_range()
            .withf(|_, client| *client == Some(3))
            .returning(|_, _| {
                Ok(vec![PickupRecord {
                    id: 8,
                    client_id: 3,
                    scheduled_date: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
                    status: PickupStatus::Completed,
                }])
            });
        source
            .expect_devices_for_pickups()
            .withf(|ids| ids.to_vec() == vec![8])
            .returning(|_| {
                Ok(vec![DeviceRecord {
                    id: 1,
                    pickup_id: 8,
                    device_type: DeviceType::Server,
                    weight_kg: 10.0,
                    disposition: Disposition::Recycled,
                    processed_at: None,
                }])
            });

        let service = ImpactService::new(Arc::new(source), Arc::new(ReferenceTables::default()));
        let summary = service
            .summary(range((2024, 1, 1), (2024, 1, 31)), Some(3))
            .await
            .unwrap();
        assert_eq!(summary.total_devices_collected, 1);
        assert_eq!(summary.total_co2_saved, 14.0);
        assert_eq!(summary.materials_recovered.metals, 8.0);
        assert_eq!(service.table_version(), "2024.1");
    }
}
