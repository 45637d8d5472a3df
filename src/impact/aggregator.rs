//! Fold device contributions into an `ImpactSummary`

use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::{
        DeviceRecord, DeviceType, DeviceTypeBreakdown, Disposition, EnvironmentalEquivalents,
        ImpactSummary,
    },
};

use super::{
    calculator::compute_contribution,
    tables::{DisposedPolicy, ReferenceTables},
};

fn check_record(device: &DeviceRecord) -> AppResult<()> {
    if !device.weight_kg.is_finite() || device.weight_kg < 0.0 {
        return Err(AppError::InvalidRecord(format!(
            "device {} has invalid weight {}",
            device.id, device.weight_kg
        )));
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn equivalents(co2_saved: f64, tables: &ReferenceTables) -> EnvironmentalEquivalents {
    let trees = if tables.tree_absorption_kg_per_year > 0.0 {
        (co2_saved / tables.tree_absorption_kg_per_year).round() as i64
    } else {
        0
    };
    let cars = if tables.car_annual_emissions_kg > 0.0 {
        round2(co2_saved / tables.car_annual_emissions_kg)
    } else {
        0.0
    };
    EnvironmentalEquivalents { trees, cars }
}

/// Aggregate a device set.
///
/// Headline counts and weights cover the processed set only; every device
/// is counted in `total_inventory`. Any record with a negative or
/// non-finite weight aborts the whole batch.
pub fn aggregate<'a, I>(devices: I, tables: &ReferenceTables) -> AppResult<ImpactSummary>
where
    I: IntoIterator<Item = &'a DeviceRecord>,
{
    let mut summary = ImpactSummary::default();

    for device in devices {
        check_record(device)?;
        summary.total_inventory += 1;

        if !device.is_processed() {
            continue;
        }

        let contribution = compute_contribution(device, tables);
        summary.total_devices_collected += 1;
        summary.total_weight_collected += device.weight_kg;
        summary.total_co2_saved += contribution.co2_saved_kg;
        summary.materials_recovered += contribution.materials_recovered_kg;

        match device.disposition {
            Disposition::Refurbished => {
                summary.total_refurbished += 1;
                summary.total_landfill_diverted += device.weight_kg;
            }
            Disposition::Recycled => {
                summary.total_recycled += 1;
                summary.total_landfill_diverted += device.weight_kg;
            }
            Disposition::Disposed => {
                summary.total_disposed += 1;
                if tables.disposed_policy == DisposedPolicy::Diverted {
                    summary.total_landfill_diverted += device.weight_kg;
                }
            }
            Disposition::Received | Disposition::InProcessing => {}
        }
    }

    summary.landfill_diversion_rate_percent = if summary.total_weight_collected > 0.0 {
        (summary.total_landfill_diverted / summary.total_weight_collected * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    summary.environmental_equivalents = equivalents(summary.total_co2_saved, tables);

    Ok(summary)
}

/// Per-type breakdown of the processed set, one `aggregate` call per type
pub fn aggregate_by_type<'a, I>(devices: I, tables: &ReferenceTables) -> AppResult<Vec<DeviceTypeBreakdown>>
where
    I: IntoIterator<Item = &'a DeviceRecord>,
{
    let mut partitions: BTreeMap<DeviceType, Vec<&DeviceRecord>> = BTreeMap::new();
    for device in devices {
        check_record(device)?;
        if device.is_processed() {
            partitions.entry(device.device_type).or_default().push(device);
        }
    }

    partitions
        .into_iter()
        .map(|(device_type, partition)| -> AppResult<DeviceTypeBreakdown> {
            let summary = aggregate(partition, tables)?;
            Ok(DeviceTypeBreakdown {
                device_type,
                count: summary.total_devices_collected,
                weight: summary.total_weight_collected,
                co2_saved: summary.total_co2_saved,
                refurbished: summary.total_refurbished,
                recycled: summary.total_recycled,
                disposed: summary.total_disposed,
            })
        })
        .collect()
}
