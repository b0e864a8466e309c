//! # Tindahan Registration Schemas
//!
//! A tindahan is a small local retail business (sari-sari store) or
//! mobile vendor registered with the barangay for compliance monitoring.
//! The record is never physically deleted: `is_active = false` marks a
//! logical deletion and excludes the registration from active listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BusinessType, ComplianceStatus};
use crate::error::ValidationError;
use crate::validate::{max_len, required, Validate};

/// The full persisted shape of a tindahan registration.
///
/// Serves as the response body for every registration endpoint. The `id`
/// is assigned by the store at insert and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TindahanRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// Business/tindahan name.
    pub business_name: String,
    /// Owner/operator name.
    pub owner_name: String,
    /// Kind of business operation.
    pub business_type: BusinessType,
    /// Business address.
    pub address: String,
    /// Contact number, if provided.
    pub contact_number: Option<String>,
    /// Barangay zone/section.
    pub barangay_zone: String,
    /// Whether the business is currently operating. False marks a
    /// logical deletion.
    pub is_active: bool,
    /// Barangay business permit number, if issued.
    pub business_permit_number: Option<String>,
    /// Date the permit was issued.
    pub permit_issued_date: Option<DateTime<Utc>>,
    /// Date the permit expires.
    pub permit_expiry_date: Option<DateTime<Utc>>,
    /// Current compliance standing. Defaults to compliant at creation.
    pub compliance_status: ComplianceStatus,
    /// Date of the most recent inspection.
    pub last_inspection_date: Option<DateTime<Utc>>,
    /// Next inspection due date.
    pub next_inspection_due: Option<DateTime<Utc>>,
    /// When the business was registered with the barangay.
    pub registered_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Registration payload for a new tindahan.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TindahanCreate {
    /// Business/tindahan name.
    pub business_name: String,
    /// Owner/operator name.
    pub owner_name: String,
    /// Kind of business operation.
    pub business_type: BusinessType,
    /// Business address.
    pub address: String,
    /// Contact number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Barangay zone/section.
    pub barangay_zone: String,
    /// Whether the business is operating. Defaults to true.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Barangay business permit number.
    #[serde(default)]
    pub business_permit_number: Option<String>,
    /// Date the permit was issued.
    #[serde(default)]
    pub permit_issued_date: Option<DateTime<Utc>>,
    /// Date the permit expires.
    #[serde(default)]
    pub permit_expiry_date: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Validate for TindahanCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("business_name", &self.business_name)?;
        max_len("business_name", &self.business_name, 100)?;
        required("owner_name", &self.owner_name)?;
        max_len("owner_name", &self.owner_name, 100)?;
        required("address", &self.address)?;
        max_len("address", &self.address, 200)?;
        if let Some(contact) = &self.contact_number {
            max_len("contact_number", contact, 20)?;
        }
        required("barangay_zone", &self.barangay_zone)?;
        max_len("barangay_zone", &self.barangay_zone, 50)?;
        if let Some(permit) = &self.business_permit_number {
            max_len("business_permit_number", permit, 50)?;
        }
        Ok(())
    }
}

/// Partial-update payload for a tindahan registration.
///
/// Every field is optional; only fields present in the request are
/// applied. Absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TindahanUpdate {
    /// New business name.
    #[serde(default)]
    pub business_name: Option<String>,
    /// New owner name.
    #[serde(default)]
    pub owner_name: Option<String>,
    /// New business type.
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    /// New address.
    #[serde(default)]
    pub address: Option<String>,
    /// New contact number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// New barangay zone.
    #[serde(default)]
    pub barangay_zone: Option<String>,
    /// New permit number.
    #[serde(default)]
    pub business_permit_number: Option<String>,
    /// New permit issue date.
    #[serde(default)]
    pub permit_issued_date: Option<DateTime<Utc>>,
    /// New permit expiry date.
    #[serde(default)]
    pub permit_expiry_date: Option<DateTime<Utc>>,
    /// New compliance standing.
    #[serde(default)]
    pub compliance_status: Option<ComplianceStatus>,
    /// New active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TindahanUpdate {
    /// Merge this partial update into a stored record.
    ///
    /// Overwrites exactly the fields present in the payload; absent
    /// fields are untouched by construction. Timestamps are the store's
    /// responsibility, not the merge's.
    pub fn apply(&self, record: &mut TindahanRecord) {
        if let Some(v) = &self.business_name {
            record.business_name = v.clone();
        }
        if let Some(v) = &self.owner_name {
            record.owner_name = v.clone();
        }
        if let Some(v) = self.business_type {
            record.business_type = v;
        }
        if let Some(v) = &self.address {
            record.address = v.clone();
        }
        if let Some(v) = &self.contact_number {
            record.contact_number = Some(v.clone());
        }
        if let Some(v) = &self.barangay_zone {
            record.barangay_zone = v.clone();
        }
        if let Some(v) = &self.business_permit_number {
            record.business_permit_number = Some(v.clone());
        }
        if let Some(v) = self.permit_issued_date {
            record.permit_issued_date = Some(v);
        }
        if let Some(v) = self.permit_expiry_date {
            record.permit_expiry_date = Some(v);
        }
        if let Some(v) = self.compliance_status {
            record.compliance_status = v;
        }
        if let Some(v) = self.is_active {
            record.is_active = v;
        }
    }

    /// Whether the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.owner_name.is_none()
            && self.business_type.is_none()
            && self.address.is_none()
            && self.contact_number.is_none()
            && self.barangay_zone.is_none()
            && self.business_permit_number.is_none()
            && self.permit_issued_date.is_none()
            && self.permit_expiry_date.is_none()
            && self.compliance_status.is_none()
            && self.is_active.is_none()
    }
}

impl Validate for TindahanUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(v) = &self.business_name {
            required("business_name", v)?;
            max_len("business_name", v, 100)?;
        }
        if let Some(v) = &self.owner_name {
            required("owner_name", v)?;
            max_len("owner_name", v, 100)?;
        }
        if let Some(v) = &self.address {
            required("address", v)?;
            max_len("address", v, 200)?;
        }
        if let Some(v) = &self.contact_number {
            max_len("contact_number", v, 20)?;
        }
        if let Some(v) = &self.barangay_zone {
            required("barangay_zone", v)?;
            max_len("barangay_zone", v, 50)?;
        }
        if let Some(v) = &self.business_permit_number {
            max_len("business_permit_number", v, 50)?;
        }
        Ok(())
    }
}
