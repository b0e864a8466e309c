#![deny(missing_docs)]

//! # bantay-core — Domain Types for the Bantay Compliance Registry
//!
//! This crate defines the entity schemas and enumerated domain types that
//! the API service persists and serves. It has no internal crate
//! dependencies, only `serde`, `thiserror`, `chrono`, and `utoipa` from
//! the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Three schema variants per entity.** Each entity has a `*Create`
//!    payload (required fields, explicit optionals), a `*Update` payload
//!    (every field optional, applied by explicit merge), and a `*Record`
//!    (the full persisted shape, including id and timestamps).
//!
//! 2. **Explicit merge, not reflection.** Partial updates go through
//!    `*Update::apply`, which overwrites exactly the fields present in
//!    the payload. Absent fields are untouched by construction.
//!
//! 3. **Enums round-trip as strings.** Every category/status enum exposes
//!    `as_str()` and `parse()` so the storage layer can persist string
//!    values and validate them on read. An unknown stored value is an
//!    error, never a silent default.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with
//!    `thiserror` carrying the offending field and limit.

pub mod domain;
pub mod error;
pub mod inspection;
pub mod report;
pub mod tindahan;
pub mod util;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use domain::{
    BusinessType, ComplianceStatus, InspectionStatus, InspectionType, ReportType, ViolationType,
};
pub use error::ValidationError;
pub use inspection::{
    InspectionCreate, InspectionRecord, InspectionUpdate, ViolationCreate, ViolationRecord,
    ViolationUpdate,
};
pub use report::{ComplianceMetrics, ComplianceReportCreate, ComplianceReportRecord};
pub use tindahan::{TindahanCreate, TindahanRecord, TindahanUpdate};
pub use validate::Validate;
