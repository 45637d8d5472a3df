//! Data models for the impact engine

pub mod device;
pub mod enums;
pub mod impact;
pub mod pickup;
pub mod report;

// Re-export commonly used types
pub use device::DeviceRecord;
pub use enums::{DeviceType, Disposition, PickupStatus, ReportStatus, ReportType};
pub use impact::{
    DeviceImpactContribution, DeviceTypeBreakdown, EnvironmentalEquivalents, ImpactSummary,
    MaterialsRecovered,
};
pub use pickup::PickupRecord;
pub use report::{DateRange, GenerateReportRequest, Report, ReportOptions};
