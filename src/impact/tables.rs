//! Versioned reference tables
//!
//! Manufacturing footprints, material composition and the scalar savings
//! constants. A `ReferenceTables` value is passed explicitly to the
//! calculator and aggregator; built-in versions are immutable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{DeviceType, MaterialsRecovered},
};

/// Version used for newly generated reports unless configured otherwise
pub const CURRENT_TABLE_VERSION: &str = "2024.1";

/// Footprint used when a table has no entry for `other` either
const OTHER_FOOTPRINT_KG: f64 = 100.0;

const OTHER_COMPOSITION: MaterialComposition = MaterialComposition::new(0.40, 0.35, 0.10, 0.02, 0.13);

/// Fractions of a device's mass per material category (sum to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialComposition {
    pub metals: f64,
    pub plastics: f64,
    pub glass: f64,
    pub rare_earth_metals: f64,
    pub other: f64,
}

impl MaterialComposition {
    pub const fn new(metals: f64, plastics: f64, glass: f64, rare_earth_metals: f64, other: f64) -> Self {
        Self {
            metals,
            plastics,
            glass,
            rare_earth_metals,
            other,
        }
    }

    pub fn total(&self) -> f64 {
        self.metals + self.plastics + self.glass + self.rare_earth_metals + self.other
    }

    /// Split `weight_kg` across categories
    pub fn apply(&self, weight_kg: f64) -> MaterialsRecovered {
        MaterialsRecovered {
            metals: weight_kg * self.metals,
            plastics: weight_kg * self.plastics,
            glass: weight_kg * self.glass,
            rare_earth_metals: weight_kg * self.rare_earth_metals,
            other: weight_kg * self.other,
        }
    }

    fn fractions(&self) -> [f64; 5] {
        [self.metals, self.plastics, self.glass, self.rare_earth_metals, self.other]
    }
}

/// How disposed devices are counted for landfill diversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DisposedPolicy {
    /// Disposed weight is the landfill outcome and is not diverted
    Landfilled,
    /// Disposed weight counts as diverted, like refurbished and recycled
    Diverted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub version: String,
    /// kg CO2 to manufacture a new device of each type
    pub manufacturing_footprint_kg: BTreeMap<DeviceType, f64>,
    pub material_composition: BTreeMap<DeviceType, MaterialComposition>,
    /// Fraction of the manufacturing footprint avoided by refurbishing
    pub refurb_savings_ratio: f64,
    /// kg CO2 avoided per kg recycled
    pub recycle_savings_per_kg: f64,
    pub tree_absorption_kg_per_year: f64,
    pub car_annual_emissions_kg: f64,
    pub disposed_policy: DisposedPolicy,
}

static V2024_1: Lazy<ReferenceTables> = Lazy::new(|| {
    use DeviceType::*;

    let manufacturing_footprint_kg = BTreeMap::from([
        (Laptop, 250.0),
        (Desktop, 350.0),
        (Monitor, 175.0),
        (Phone, 65.0),
        (Tablet, 110.0),
        (Server, 750.0),
        (Printer, 120.0),
        (Networking, 100.0),
        (Other, OTHER_FOOTPRINT_KG),
    ]);

    let material_composition = BTreeMap::from([
        (Laptop, MaterialComposition::new(0.40, 0.35, 0.10, 0.05, 0.10)),
        (Desktop, MaterialComposition::new(0.60, 0.25, 0.05, 0.02, 0.08)),
        (Monitor, MaterialComposition::new(0.30, 0.25, 0.35, 0.02, 0.08)),
        (Phone, MaterialComposition::new(0.35, 0.30, 0.20, 0.08, 0.07)),
        (Tablet, MaterialComposition::new(0.35, 0.25, 0.25, 0.07, 0.08)),
        (Server, MaterialComposition::new(0.80, 0.10, 0.02, 0.03, 0.05)),
        (Printer, MaterialComposition::new(0.30, 0.55, 0.05, 0.01, 0.09)),
        (Networking, MaterialComposition::new(0.50, 0.35, 0.02, 0.03, 0.10)),
        (Other, OTHER_COMPOSITION),
    ]);

    ReferenceTables {
        version: CURRENT_TABLE_VERSION.to_string(),
        manufacturing_footprint_kg,
        material_composition,
        refurb_savings_ratio: 0.75,
        recycle_savings_per_kg: 1.4,
        tree_absorption_kg_per_year: 22.0,
        car_annual_emissions_kg: 4600.0,
        disposed_policy: DisposedPolicy::Landfilled,
    }
});

impl ReferenceTables {
    /// Look up a shipped table version by name
    pub fn builtin(version: &str) -> Option<Self> {
        match version {
            CURRENT_TABLE_VERSION => Some(V2024_1.clone()),
            _ => None,
        }
    }

    pub fn current() -> &'static ReferenceTables {
        &V2024_1
    }

    pub fn manufacturing_footprint_kg(&self, device_type: DeviceType) -> f64 {
        self.manufacturing_footprint_kg
            .get(&device_type)
            .or_else(|| self.manufacturing_footprint_kg.get(&DeviceType::Other))
            .copied()
            .unwrap_or(OTHER_FOOTPRINT_KG)
    }

    pub fn material_composition(&self, device_type: DeviceType) -> MaterialComposition {
        self.material_composition
            .get(&device_type)
            .or_else(|| self.material_composition.get(&DeviceType::Other))
            .copied()
            .unwrap_or(OTHER_COMPOSITION)
    }

    /// Whether `device_type` has its own rows in both tables (no `other` fallback)
    pub fn has_entry(&self, device_type: DeviceType) -> bool {
        self.manufacturing_footprint_kg.contains_key(&device_type)
            && self.material_composition.contains_key(&device_type)
    }

    /// Check compositions sum to 1.0 and constants are finite and non-negative
    pub fn validate(&self) -> AppResult<()> {
        let scalars = [
            ("refurb_savings_ratio", self.refurb_savings_ratio),
            ("recycle_savings_per_kg", self.recycle_savings_per_kg),
            ("tree_absorption_kg_per_year", self.tree_absorption_kg_per_year),
            ("car_annual_emissions_kg", self.car_annual_emissions_kg),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Validation(format!(
                    "tables {}: {} must be a non-negative number",
                    self.version, name
                )));
            }
        }

        for (device_type, kg) in &self.manufacturing_footprint_kg {
            if !kg.is_finite() || *kg < 0.0 {
                return Err(AppError::Validation(format!(
                    "tables {}: footprint for {} must be a non-negative number",
                    self.version, device_type
                )));
            }
        }

        for (device_type, composition) in &self.material_composition {
            if composition.fractions().iter().any(|f| !f.is_finite() || *f < 0.0) {
                return Err(AppError::Validation(format!(
                    "tables {}: composition for {} has a negative fraction",
                    self.version, device_type
                )));
            }
            if (composition.total() - 1.0).abs() > 1e-6 {
                return Err(AppError::Validation(format!(
                    "tables {}: composition for {} sums to {}",
                    self.version,
                    device_type,
                    composition.total()
                )));
            }
        }

        Ok(())
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        V2024_1.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = ReferenceTables::builtin(CURRENT_TABLE_VERSION).unwrap();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.version, CURRENT_TABLE_VERSION);
        assert_eq!(ReferenceTables::current().version, CURRENT_TABLE_VERSION);
        assert!(ReferenceTables::builtin("0.0").is_none());
    }

    #[test]
    fn test_footprints() {
        let tables = ReferenceTables::current();
        assert_eq!(tables.manufacturing_footprint_kg(DeviceType::Laptop), 250.0);
        assert_eq!(tables.manufacturing_footprint_kg(DeviceType::Server), 750.0);
        assert_eq!(tables.manufacturing_footprint_kg(DeviceType::Phone), 65.0);
        assert_eq!(tables.manufacturing_footprint_kg(DeviceType::Other), 100.0);
    }

    #[test]
    fn test_peripheral_falls_back_to_other() {
        let tables = ReferenceTables::current();
        assert!(!tables.has_entry(DeviceType::Peripheral));
        assert_eq!(tables.manufacturing_footprint_kg(DeviceType::Peripheral), 100.0);
        assert_eq!(
            tables.material_composition(DeviceType::Peripheral),
            tables.material_composition(DeviceType::Other)
        );
    }

    #[test]
    fn test_missing_other_row_uses_hard_fallback() {
        let mut tables = ReferenceTables::default();
        tables.manufacturing_footprint_kg.clear();
        tables.material_composition.clear();
        assert_eq!(tables.manufacturing_footprint_kg(DeviceType::Laptop), OTHER_FOOTPRINT_KG);
        assert_eq!(tables.material_composition(DeviceType::Laptop), OTHER_COMPOSITION);
    }

    #[test]
    fn test_composition_highlights() {
        let tables = ReferenceTables::current();
        assert_eq!(tables.material_composition(DeviceType::Server).metals, 0.80);
        assert_eq!(tables.material_composition(DeviceType::Monitor).glass, 0.35);
    }

    #[test]
    fn test_validate_rejects_bad_composition() {
        let mut tables = ReferenceTables::default();
        tables
            .material_composition
            .insert(DeviceType::Phone, MaterialComposition::new(0.5, 0.5, 0.5, 0.0, 0.0));
        assert!(matches!(tables.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_negative_constant() {
        let mut tables = ReferenceTables::default();
        tables.recycle_savings_per_kg = -1.0;
        assert!(tables.validate().is_err());
    }
}
