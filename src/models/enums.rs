//! Shared domain enums
//!
//! All enums are stored as text columns and serialized with their
//! lowercase (kebab-case) label.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// DeviceType
// ---------------------------------------------------------------------------

/// Kind of collected device
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Laptop,
    Desktop,
    Tablet,
    Phone,
    Printer,
    Monitor,
    Server,
    Networking,
    Peripheral,
    #[serde(other)]
    Other,
}

impl DeviceType {
    pub const ALL: [DeviceType; 10] = [
        DeviceType::Laptop,
        DeviceType::Desktop,
        DeviceType::Tablet,
        DeviceType::Phone,
        DeviceType::Printer,
        DeviceType::Monitor,
        DeviceType::Server,
        DeviceType::Networking,
        DeviceType::Peripheral,
        DeviceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "laptop",
            DeviceType::Desktop => "desktop",
            DeviceType::Tablet => "tablet",
            DeviceType::Phone => "phone",
            DeviceType::Printer => "printer",
            DeviceType::Monitor => "monitor",
            DeviceType::Server => "server",
            DeviceType::Networking => "networking",
            DeviceType::Peripheral => "peripheral",
            DeviceType::Other => "other",
        }
    }

    /// Parse a stored label; `None` when the label is not a known type.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Disposition
// ---------------------------------------------------------------------------

/// Processing state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Disposition {
    Received,
    InProcessing,
    Refurbished,
    Recycled,
    Disposed,
}

impl Disposition {
    /// Final dispositions; only these contribute to impact totals.
    pub fn is_processed(&self) -> bool {
        matches!(
            self,
            Disposition::Refurbished | Disposition::Recycled | Disposition::Disposed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Received => "received",
            Disposition::InProcessing => "in-processing",
            Disposition::Refurbished => "refurbished",
            Disposition::Recycled => "recycled",
            Disposition::Disposed => "disposed",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "received" => Some(Disposition::Received),
            "in-processing" | "in_processing" | "processing" => Some(Disposition::InProcessing),
            "refurbished" => Some(Disposition::Refurbished),
            "recycled" => Some(Disposition::Recycled),
            "disposed" => Some(Disposition::Disposed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PickupStatus
// ---------------------------------------------------------------------------

/// Pickup lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PickupStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl PickupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupStatus::Pending => "pending",
            PickupStatus::Scheduled => "scheduled",
            PickupStatus::InProgress => "in-progress",
            PickupStatus::Completed => "completed",
            PickupStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(PickupStatus::Pending),
            "scheduled" => Some(PickupStatus::Scheduled),
            "in-progress" | "in_progress" => Some(PickupStatus::InProgress),
            "completed" => Some(PickupStatus::Completed),
            "cancelled" | "canceled" => Some(PickupStatus::Cancelled),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ReportType
// ---------------------------------------------------------------------------

/// Report classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Pickup,
    Monthly,
    Quarterly,
    Annual,
    Custom,
    Client,
    Compliance,
    Financial,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Pickup => "pickup",
            ReportType::Monthly => "monthly",
            ReportType::Quarterly => "quarterly",
            ReportType::Annual => "annual",
            ReportType::Custom => "custom",
            ReportType::Client => "client",
            ReportType::Compliance => "compliance",
            ReportType::Financial => "financial",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "pickup" => Some(ReportType::Pickup),
            "monthly" => Some(ReportType::Monthly),
            "quarterly" => Some(ReportType::Quarterly),
            "annual" => Some(ReportType::Annual),
            "custom" => Some(ReportType::Custom),
            "client" => Some(ReportType::Client),
            "compliance" => Some(ReportType::Compliance),
            "financial" => Some(ReportType::Financial),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Publication state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Published,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Published => "published",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "draft" => Some(ReportStatus::Draft),
            "published" => Some(ReportStatus::Published),
            _ => None,
        }
    }
}
