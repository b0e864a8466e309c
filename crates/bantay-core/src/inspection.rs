//! # Inspection & Violation Schemas
//!
//! An inspection is a visit to one registered tindahan; violations are
//! findings recorded under an inspection. Many inspections may reference
//! one tindahan, and one inspection owns many violations. Referential
//! integrity for both references is enforced at the store layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{InspectionStatus, InspectionType, ViolationType};
use crate::error::ValidationError;
use crate::validate::{max_len, required, severity_in_range, Validate};

/// The full persisted shape of an inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InspectionRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// The tindahan being inspected.
    pub tindahan_id: i64,
    /// Why the inspection was scheduled.
    pub inspection_type: InspectionType,
    /// Name of the inspector.
    pub inspector_name: String,
    /// Date of the inspection.
    pub inspection_date: DateTime<Utc>,
    /// Lifecycle state. Defaults to scheduled at creation.
    pub status: InspectionStatus,
    /// Inspector's notes.
    pub notes: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload to schedule a new inspection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InspectionCreate {
    /// The tindahan being inspected. Must reference an existing record.
    pub tindahan_id: i64,
    /// Why the inspection was scheduled.
    pub inspection_type: InspectionType,
    /// Name of the inspector.
    pub inspector_name: String,
    /// Date of the inspection.
    pub inspection_date: DateTime<Utc>,
    /// Initial lifecycle state. Defaults to scheduled.
    #[serde(default)]
    pub status: InspectionStatus,
    /// Inspector's notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for InspectionCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("inspector_name", &self.inspector_name)?;
        max_len("inspector_name", &self.inspector_name, 100)?;
        if let Some(notes) = &self.notes {
            max_len("notes", notes, 1000)?;
        }
        Ok(())
    }
}

/// Partial-update payload for an inspection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct InspectionUpdate {
    /// New inspection type.
    #[serde(default)]
    pub inspection_type: Option<InspectionType>,
    /// New inspector name.
    #[serde(default)]
    pub inspector_name: Option<String>,
    /// New inspection date.
    #[serde(default)]
    pub inspection_date: Option<DateTime<Utc>>,
    /// New lifecycle state. Completing an inspection does not cascade
    /// any status change to the parent tindahan.
    #[serde(default)]
    pub status: Option<InspectionStatus>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl InspectionUpdate {
    /// Merge this partial update into a stored record. Absent fields are
    /// untouched.
    pub fn apply(&self, record: &mut InspectionRecord) {
        if let Some(v) = self.inspection_type {
            record.inspection_type = v;
        }
        if let Some(v) = &self.inspector_name {
            record.inspector_name = v.clone();
        }
        if let Some(v) = self.inspection_date {
            record.inspection_date = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = &self.notes {
            record.notes = Some(v.clone());
        }
    }
}

impl Validate for InspectionUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(v) = &self.inspector_name {
            required("inspector_name", v)?;
            max_len("inspector_name", v, 100)?;
        }
        if let Some(v) = &self.notes {
            max_len("notes", v, 1000)?;
        }
        Ok(())
    }
}

/// The full persisted shape of a violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViolationRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// The inspection where the violation was found.
    pub inspection_id: i64,
    /// Regulatory ground for the violation.
    pub violation_type: ViolationType,
    /// Detailed description of the violation.
    pub description: String,
    /// Severity on a 1–5 scale, 5 most severe.
    pub severity: i32,
    /// Whether the violation has been resolved. Defaults to false.
    pub is_resolved: bool,
    /// Notes on how the violation was resolved.
    pub resolution_notes: Option<String>,
    /// Date the violation was resolved.
    pub resolution_date: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload to record a new violation under an inspection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ViolationCreate {
    /// The inspection where the violation was found. Must reference an
    /// existing record.
    pub inspection_id: i64,
    /// Regulatory ground for the violation.
    pub violation_type: ViolationType,
    /// Detailed description of the violation.
    pub description: String,
    /// Severity on a 1–5 scale, inclusive.
    pub severity: i32,
    /// Whether the violation is already resolved. Defaults to false.
    #[serde(default)]
    pub is_resolved: bool,
    /// Notes on how the violation was resolved.
    #[serde(default)]
    pub resolution_notes: Option<String>,
    /// Date the violation was resolved.
    #[serde(default)]
    pub resolution_date: Option<DateTime<Utc>>,
}

impl Validate for ViolationCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("description", &self.description)?;
        max_len("description", &self.description, 500)?;
        severity_in_range(self.severity)?;
        if let Some(notes) = &self.resolution_notes {
            max_len("resolution_notes", notes, 500)?;
        }
        Ok(())
    }
}

/// Partial-update payload for a violation. Resolution travels as flag,
/// notes and date, but the trio is not enforced together. Resolving a
/// violation does not cascade any status change to the parent tindahan.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ViolationUpdate {
    /// New violation type.
    #[serde(default)]
    pub violation_type: Option<ViolationType>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New severity.
    #[serde(default)]
    pub severity: Option<i32>,
    /// New resolved flag.
    #[serde(default)]
    pub is_resolved: Option<bool>,
    /// New resolution notes.
    #[serde(default)]
    pub resolution_notes: Option<String>,
    /// New resolution date.
    #[serde(default)]
    pub resolution_date: Option<DateTime<Utc>>,
}

impl ViolationUpdate {
    /// Merge this partial update into a stored record. Absent fields are
    /// untouched.
    pub fn apply(&self, record: &mut ViolationRecord) {
        if let Some(v) = self.violation_type {
            record.violation_type = v;
        }
        if let Some(v) = &self.description {
            record.description = v.clone();
        }
        if let Some(v) = self.severity {
            record.severity = v;
        }
        if let Some(v) = self.is_resolved {
            record.is_resolved = v;
        }
        if let Some(v) = &self.resolution_notes {
            record.resolution_notes = Some(v.clone());
        }
        if let Some(v) = self.resolution_date {
            record.resolution_date = Some(v);
        }
    }
}

impl Validate for ViolationUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(v) = &self.description {
            required("description", v)?;
            max_len("description", v, 500)?;
        }
        if let Some(s) = self.severity {
            severity_in_range(s)?;
        }
        if let Some(v) = &self.resolution_notes {
            max_len("resolution_notes", v, 500)?;
        }
        Ok(())
    }
}
