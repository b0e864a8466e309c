//! # Domain Enumerations — Single Source of Truth
//!
//! Category and status enums shared by every entity schema. Each enum is
//! defined once here; the storage layer persists the `as_str()` value and
//! parses it back with [`parse`](BusinessType::parse) on read, so an
//! unknown stored string surfaces as an error instead of a silent default.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// The kind of business operation a tindahan registration covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    /// Fixed-stall sari-sari store.
    FixedStall,
    /// Mobile street vendor.
    StreetHawker,
    /// Door-to-door seller.
    Peddler,
    /// Food cart vendor.
    FoodCart,
    /// Anything not covered above.
    Other,
}

impl BusinessType {
    /// Return all business types as a slice.
    pub fn all() -> &'static [BusinessType] {
        &[
            Self::FixedStall,
            Self::StreetHawker,
            Self::Peddler,
            Self::FoodCart,
            Self::Other,
        ]
    }

    /// The string value persisted for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedStall => "fixed_stall",
            Self::StreetHawker => "street_hawker",
            Self::Peddler => "peddler",
            Self::FoodCart => "food_cart",
            Self::Other => "other",
        }
    }

    /// Parse a persisted string value back into the enum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownVariant`] for any string that is
    /// not one of the persisted values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "business_type",
                value: value.to_string(),
            })
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse summary of a business's regulatory standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// In good standing.
    Compliant,
    /// Minor findings on record; operating normally.
    Warning,
    /// Unresolved violation on record.
    Violation,
    /// Operations suspended by the barangay.
    Suspended,
}

impl ComplianceStatus {
    /// Return all compliance statuses as a slice.
    pub fn all() -> &'static [ComplianceStatus] {
        &[
            Self::Compliant,
            Self::Warning,
            Self::Violation,
            Self::Suspended,
        ]
    }

    /// The string value persisted for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Warning => "warning",
            Self::Violation => "violation",
            Self::Suspended => "suspended",
        }
    }

    /// Parse a persisted string value back into the enum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownVariant`] for unrecognized values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "compliance_status",
                value: value.to_string(),
            })
    }
}

impl Default for ComplianceStatus {
    /// Every registration starts compliant.
    fn default() -> Self {
        Self::Compliant
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why an inspection was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InspectionType {
    /// Regular scheduled inspection.
    Routine,
    /// Inspection triggered by a complaint.
    Complaint,
    /// Follow-up on a previous inspection.
    FollowUp,
    /// Inspection for permit renewal.
    Renewal,
    /// Emergency inspection.
    Emergency,
}

impl InspectionType {
    /// Return all inspection types as a slice.
    pub fn all() -> &'static [InspectionType] {
        &[
            Self::Routine,
            Self::Complaint,
            Self::FollowUp,
            Self::Renewal,
            Self::Emergency,
        ]
    }

    /// The string value persisted for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Complaint => "complaint",
            Self::FollowUp => "follow_up",
            Self::Renewal => "renewal",
            Self::Emergency => "emergency",
        }
    }

    /// Parse a persisted string value back into the enum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownVariant`] for unrecognized values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "inspection_type",
                value: value.to_string(),
            })
    }
}

impl std::fmt::Display for InspectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of an inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    /// Booked but not started.
    Scheduled,
    /// Inspector on site.
    InProgress,
    /// Findings recorded.
    Completed,
    /// Called off.
    Cancelled,
}

impl InspectionStatus {
    /// Return all inspection statuses as a slice.
    pub fn all() -> &'static [InspectionStatus] {
        &[
            Self::Scheduled,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
        ]
    }

    /// The string value persisted for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a persisted string value back into the enum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownVariant`] for unrecognized values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "status",
                value: value.to_string(),
            })
    }
}

impl Default for InspectionStatus {
    /// New inspections start scheduled.
    fn default() -> Self {
        Self::Scheduled
    }
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The regulatory ground on which a violation was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Operating without a permit.
    NoPermit,
    /// Permit has lapsed.
    ExpiredPermit,
    /// Operating outside the permitted area.
    UnauthorizedLocation,
    /// Hygiene or sanitation findings.
    UnsanitaryConditions,
    /// Excessive noise.
    NoiseViolation,
    /// Blocking pedestrian or vehicle traffic.
    BlockingTraffic,
    /// Selling above regulated prices.
    Overpricing,
    /// Selling prohibited items.
    UnauthorizedProducts,
    /// Anything not covered above.
    Other,
}

impl ViolationType {
    /// Return all violation types as a slice.
    pub fn all() -> &'static [ViolationType] {
        &[
            Self::NoPermit,
            Self::ExpiredPermit,
            Self::UnauthorizedLocation,
            Self::UnsanitaryConditions,
            Self::NoiseViolation,
            Self::BlockingTraffic,
            Self::Overpricing,
            Self::UnauthorizedProducts,
            Self::Other,
        ]
    }

    /// The string value persisted for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPermit => "no_permit",
            Self::ExpiredPermit => "expired_permit",
            Self::UnauthorizedLocation => "unauthorized_location",
            Self::UnsanitaryConditions => "unsanitary_conditions",
            Self::NoiseViolation => "noise_violation",
            Self::BlockingTraffic => "blocking_traffic",
            Self::Overpricing => "overpricing",
            Self::UnauthorizedProducts => "unauthorized_products",
            Self::Other => "other",
        }
    }

    /// Parse a persisted string value back into the enum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownVariant`] for unrecognized values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "violation_type",
                value: value.to_string(),
            })
    }
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of compliance report being filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Monthly compliance summary.
    Monthly,
    /// Quarterly compliance report.
    Quarterly,
    /// Annual compliance report.
    Annual,
    /// Report scoped to a single barangay zone.
    ZoneSpecific,
    /// Summary of violations.
    ViolationSummary,
    /// Permit status report.
    PermitStatus,
}

impl ReportType {
    /// Return all report types as a slice.
    pub fn all() -> &'static [ReportType] {
        &[
            Self::Monthly,
            Self::Quarterly,
            Self::Annual,
            Self::ZoneSpecific,
            Self::ViolationSummary,
            Self::PermitStatus,
        ]
    }

    /// The string value persisted for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
            Self::ZoneSpecific => "zone_specific",
            Self::ViolationSummary => "violation_summary",
            Self::PermitStatus => "permit_status",
        }
    }

    /// Parse a persisted string value back into the enum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownVariant`] for unrecognized values.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: "report_type",
                value: value.to_string(),
            })
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
