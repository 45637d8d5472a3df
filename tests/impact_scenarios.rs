//! End-to-end engine scenarios through the public library API

use chrono::NaiveDate;

use ewaste_impact::{
    error::AppError,
    impact::{aggregate, assemble_report, compute_contribution, recompute_summary, RecordSnapshot, ReferenceTables},
    models::{
        DateRange, DeviceRecord, DeviceType, Disposition, GenerateReportRequest, ImpactSummary,
        PickupRecord, PickupStatus, ReportOptions, ReportStatus, ReportType,
    },
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn device(id: i32, device_type: DeviceType, weight_kg: f64, disposition: Disposition) -> DeviceRecord {
    DeviceRecord {
        id,
        pickup_id: 1,
        device_type,
        weight_kg,
        disposition,
        processed_at: None,
    }
}

fn request(start: NaiveDate, end: NaiveDate) -> GenerateReportRequest {
    GenerateReportRequest {
        title: "Scenario".to_string(),
        report_type: ReportType::Custom,
        date_range: DateRange { start, end },
        client_id: None,
        options: ReportOptions::default(),
    }
}

#[test]
fn refurbished_laptop() {
    let c = compute_contribution(
        &device(1, DeviceType::Laptop, 2.5, Disposition::Refurbished),
        ReferenceTables::current(),
    );
    assert_eq!(c.co2_saved_kg, 187.5);
}

#[test]
fn recycled_server() {
    let c = compute_contribution(
        &device(1, DeviceType::Server, 10.0, Disposition::Recycled),
        ReferenceTables::current(),
    );
    assert_eq!(c.co2_saved_kg, 14.0);
    assert_eq!(c.materials_recovered_kg.metals, 8.0);
}

#[test]
fn empty_range_yields_zero_summary() {
    let snapshot = RecordSnapshot::new(
        vec![PickupRecord {
            id: 1,
            client_id: 1,
            scheduled_date: date(2024, 5, 5),
            status: PickupStatus::Completed,
        }],
        vec![device(1, DeviceType::Laptop, 2.5, Disposition::Refurbished)],
    );
    let report = assemble_report(
        &request(date(2023, 1, 1), date(2023, 12, 31)),
        &snapshot,
        ReferenceTables::current(),
    )
    .unwrap();
    assert_eq!(report.impact_summary, ImpactSummary::default());
    assert_eq!(report.impact_summary.landfill_diversion_rate_percent, 0.0);
}

#[test]
fn mixed_dispositions_exclude_in_processing() {
    let devices = vec![
        device(1, DeviceType::Laptop, 2.1, Disposition::Refurbished),
        device(2, DeviceType::Desktop, 8.0, Disposition::Refurbished),
        device(3, DeviceType::Tablet, 0.5, Disposition::Refurbished),
        device(4, DeviceType::Monitor, 5.5, Disposition::Recycled),
        device(5, DeviceType::Networking, 1.2, Disposition::Recycled),
        device(6, DeviceType::Printer, 7.0, Disposition::InProcessing),
    ];
    let summary = aggregate(&devices, ReferenceTables::current()).unwrap();
    assert_eq!(summary.total_devices_collected, 5);
    assert_eq!(
        summary.total_refurbished + summary.total_recycled + summary.total_disposed,
        5
    );
}

#[test]
fn reversed_range_raises_validation_error() {
    let result = assemble_report(
        &request(date(2024, 6, 1), date(2024, 1, 1)),
        &RecordSnapshot::default(),
        ReferenceTables::current(),
    );
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn stored_summary_recomputes_exactly() {
    let snapshot = RecordSnapshot::new(
        vec![
            PickupRecord {
                id: 1,
                client_id: 3,
                scheduled_date: date(2024, 8, 1),
                status: PickupStatus::Completed,
            },
            PickupRecord {
                id: 2,
                client_id: 4,
                scheduled_date: date(2024, 8, 20),
                status: PickupStatus::Completed,
            },
        ],
        vec![
            DeviceRecord { pickup_id: 1, ..device(1, DeviceType::Phone, 0.17, Disposition::Recycled) },
            DeviceRecord { pickup_id: 1, ..device(2, DeviceType::Peripheral, 0.9, Disposition::Disposed) },
            DeviceRecord { pickup_id: 2, ..device(3, DeviceType::Server, 23.4, Disposition::Refurbished) },
        ],
    );
    let tables = ReferenceTables::current();

    let report = assemble_report(&request(date(2024, 8, 1), date(2024, 8, 31)), &snapshot, tables).unwrap();
    assert_eq!(report.status, ReportStatus::Draft);
    let recomputed = recompute_summary(&report, &snapshot, tables).unwrap();
    assert_eq!(recomputed, report.impact_summary);
    assert_eq!(
        recomputed.total_co2_saved.to_bits(),
        report.impact_summary.total_co2_saved.to_bits()
    );
}
