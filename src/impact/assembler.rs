//! Report assembly: resolve the device set for a request and summarize it

use chrono::Utc;
use std::collections::{BTreeSet, HashSet};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        DateRange, DeviceRecord, DeviceType, GenerateReportRequest, ImpactSummary, PickupRecord,
        Report, ReportStatus,
    },
};

use super::{
    aggregator::{aggregate, aggregate_by_type},
    source::RecordSnapshot,
    tables::ReferenceTables,
};

/// Pickups and devices selected for a date range and client filter
#[derive(Debug, Default)]
pub struct ResolvedSet<'a> {
    pub pickups: Vec<&'a PickupRecord>,
    pub devices: Vec<&'a DeviceRecord>,
}

/// Select devices whose pickup is scheduled within `range` and, when
/// given, belongs to `client_id`. Snapshot order is preserved.
pub fn resolve_devices<'a>(
    snapshot: &'a RecordSnapshot,
    range: &DateRange,
    client_id: Option<i32>,
) -> ResolvedSet<'a> {
    let pickups: Vec<&PickupRecord> = snapshot
        .pickups
        .iter()
        .filter(|p| range.contains(p.scheduled_date))
        .filter(|p| client_id.map_or(true, |c| p.client_id == c))
        .collect();

    let pickup_ids: HashSet<i32> = pickups.iter().map(|p| p.id).collect();
    let devices = snapshot
        .devices
        .iter()
        .filter(|d| pickup_ids.contains(&d.pickup_id))
        .collect();

    ResolvedSet { pickups, devices }
}

pub fn validate_request(request: &GenerateReportRequest) -> AppResult<()> {
    request.validate()?;
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be blank".to_string()));
    }
    request.date_range.validate_order()
}

// The calculator silently falls back to `other`; surface it here once per type.
fn warn_table_fallbacks(devices: &[&DeviceRecord], tables: &ReferenceTables) {
    let missing: BTreeSet<DeviceType> = devices
        .iter()
        .map(|d| d.device_type)
        .filter(|t| !tables.has_entry(*t))
        .collect();
    for device_type in missing {
        tracing::warn!(
            device_type = %device_type,
            table_version = %tables.version,
            "No reference table row for device type, using 'other'"
        );
    }
}

/// Impact summary for a range and optional client (dashboard figures)
pub fn summarize(
    snapshot: &RecordSnapshot,
    range: &DateRange,
    client_id: Option<i32>,
    tables: &ReferenceTables,
) -> AppResult<ImpactSummary> {
    range.validate_order()?;
    let resolved = resolve_devices(snapshot, range, client_id);
    warn_table_fallbacks(&resolved.devices, tables);
    aggregate(resolved.devices.iter().copied(), tables)
}

/// Build a draft report for `request` from `snapshot`.
///
/// Either every figure is computed or an error is returned; no partial
/// report is produced.
pub fn assemble_report(
    request: &GenerateReportRequest,
    snapshot: &RecordSnapshot,
    tables: &ReferenceTables,
) -> AppResult<Report> {
    validate_request(request)?;

    let resolved = resolve_devices(snapshot, &request.date_range, request.client_id);
    warn_table_fallbacks(&resolved.devices, tables);

    let impact_summary = aggregate(resolved.devices.iter().copied(), tables)?;
    let device_breakdown = if request.options.detailed_breakdown {
        Some(aggregate_by_type(resolved.devices.iter().copied(), tables)?)
    } else {
        None
    };

    Ok(Report {
        id: Uuid::new_v4(),
        title: request.title.trim().to_string(),
        report_type: request.report_type,
        date_range: request.date_range,
        company: request.client_id,
        options: request.options,
        impact_summary,
        device_breakdown,
        pickup_count: resolved.pickups.len() as i64,
        reference_tables_version: tables.version.clone(),
        status: ReportStatus::Draft,
        generated_at: Utc::now(),
        published_at: None,
    })
}

/// Recompute a stored report's summary from its own device set
pub fn recompute_summary(
    report: &Report,
    snapshot: &RecordSnapshot,
    tables: &ReferenceTables,
) -> AppResult<ImpactSummary> {
    if tables.version != report.reference_tables_version {
        return Err(AppError::Validation(format!(
            "report {} was generated with tables {}, got {}",
            report.id, report.reference_tables_version, tables.version
        )));
    }
    let resolved = resolve_devices(snapshot, &report.date_range, report.company);
    aggregate(resolved.devices.iter().copied(), tables)
}
