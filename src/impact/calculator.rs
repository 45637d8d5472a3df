//! Per-device impact contribution

use crate::models::{DeviceImpactContribution, DeviceRecord, Disposition};

use super::tables::ReferenceTables;

/// Impact of a single device under `tables`.
///
/// Unprocessed devices contribute nothing. Refurbishment savings come from
/// the avoided manufacturing footprint and ignore the unit's weight;
/// recycled and disposed devices save CO2 proportionally to weight.
/// Material recovery is weight-proportional for every processed device.
/// Never fails: types without a table row use the `other` entry.
pub fn compute_contribution(device: &DeviceRecord, tables: &ReferenceTables) -> DeviceImpactContribution {
    let co2_saved_kg = match device.disposition {
        Disposition::Received | Disposition::InProcessing => {
            return DeviceImpactContribution::zero();
        }
        Disposition::Refurbished => {
            tables.manufacturing_footprint_kg(device.device_type) * tables.refurb_savings_ratio
        }
        Disposition::Recycled | Disposition::Disposed => {
            device.weight_kg * tables.recycle_savings_per_kg
        }
    };

    DeviceImpactContribution {
        co2_saved_kg,
        materials_recovered_kg: tables
            .material_composition(device.device_type)
            .apply(device.weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviceType;

    fn device(device_type: DeviceType, weight_kg: f64, disposition: Disposition) -> DeviceRecord {
        DeviceRecord {
            id: 1,
            pickup_id: 1,
            device_type,
            weight_kg,
            disposition,
            processed_at: None,
        }
    }

    #[test]
    fn test_unprocessed_devices_contribute_nothing() {
        let tables = ReferenceTables::current();
        for disposition in [Disposition::Received, Disposition::InProcessing] {
            let c = compute_contribution(&device(DeviceType::Server, 40.0, disposition), tables);
            assert_eq!(c, DeviceImpactContribution::zero());
        }
    }

    #[test]
    fn test_refurbished_laptop() {
        let c = compute_contribution(
            &device(DeviceType::Laptop, 2.5, Disposition::Refurbished),
            ReferenceTables::current(),
        );
        assert_eq!(c.co2_saved_kg, 187.5);
    }

    #[test]
    fn test_refurbished_savings_ignore_weight() {
        let tables = ReferenceTables::current();
        let light = compute_contribution(&device(DeviceType::Laptop, 1.2, Disposition::Refurbished), tables);
        let heavy = compute_contribution(&device(DeviceType::Laptop, 3.9, Disposition::Refurbished), tables);
        assert_eq!(light.co2_saved_kg, heavy.co2_saved_kg);
        assert!(light.materials_recovered_kg.total() < heavy.materials_recovered_kg.total());
    }

    #[test]
    fn test_recycled_server() {
        let c = compute_contribution(
            &device(DeviceType::Server, 10.0, Disposition::Recycled),
            ReferenceTables::current(),
        );
        assert_eq!(c.co2_saved_kg, 14.0);
        assert_eq!(c.materials_recovered_kg.metals, 8.0);
    }

    #[test]
    fn test_disposed_matches_recycled() {
        let tables = ReferenceTables::current();
        let recycled = compute_contribution(&device(DeviceType::Monitor, 6.0, Disposition::Recycled), tables);
        let disposed = compute_contribution(&device(DeviceType::Monitor, 6.0, Disposition::Disposed), tables);
        assert_eq!(recycled, disposed);
    }

    #[test]
    fn test_materials_sum_to_weight_for_every_type() {
        let tables = ReferenceTables::current();
        for device_type in DeviceType::ALL {
            for weight in [0.0, 0.35, 2.5, 17.0, 120.75] {
                let c = compute_contribution(&device(device_type, weight, Disposition::Recycled), tables);
                let m = c.materials_recovered_kg;
                for part in [m.metals, m.plastics, m.glass, m.rare_earth_metals, m.other] {
                    assert!(part >= 0.0);
                }
                assert!((m.total() - weight).abs() < 1e-9, "{} @ {}", device_type, weight);
            }
        }
    }
}
