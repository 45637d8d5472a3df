//! Derived impact figures (never persisted on their own)

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use utoipa::ToSchema;

use super::enums::DeviceType;

/// Recovered mass per material category, in kilograms
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsRecovered {
    pub metals: f64,
    pub plastics: f64,
    pub glass: f64,
    pub rare_earth_metals: f64,
    pub other: f64,
}

impl MaterialsRecovered {
    pub fn total(&self) -> f64 {
        self.metals + self.plastics + self.glass + self.rare_earth_metals + self.other
    }
}

impl AddAssign for MaterialsRecovered {
    fn add_assign(&mut self, rhs: Self) {
        self.metals += rhs.metals;
        self.plastics += rhs.plastics;
        self.glass += rhs.glass;
        self.rare_earth_metals += rhs.rare_earth_metals;
        self.other += rhs.other;
    }
}

/// Impact contribution of a single device
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceImpactContribution {
    pub co2_saved_kg: f64,
    pub materials_recovered_kg: MaterialsRecovered,
}

impl DeviceImpactContribution {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Human-scale equivalents of the CO2 saved
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnvironmentalEquivalents {
    /// Trees absorbing the same CO2 over a year (whole trees)
    pub trees: i64,
    /// Cars taken off the road for a year (2 decimals)
    pub cars: f64,
}

/// Aggregate impact over a set of devices.
///
/// Field names are relied upon by the PDF/CSV renderers and dashboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    /// Processed devices (refurbished, recycled or disposed)
    pub total_devices_collected: i64,
    /// Every device in the resolved set, processed or not
    pub total_inventory: i64,
    pub total_weight_collected: f64,
    #[serde(rename = "totalCO2Saved")]
    pub total_co2_saved: f64,
    pub total_landfill_diverted: f64,
    pub total_refurbished: i64,
    pub total_recycled: i64,
    pub total_disposed: i64,
    pub materials_recovered: MaterialsRecovered,
    pub environmental_equivalents: EnvironmentalEquivalents,
    pub landfill_diversion_rate_percent: f64,
}

/// Per-device-type slice of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceTypeBreakdown {
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub count: i64,
    pub weight: f64,
    #[serde(rename = "co2Saved")]
    pub co2_saved: f64,
    pub refurbished: i64,
    pub recycled: i64,
    pub disposed: i64,
}
