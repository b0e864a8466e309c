//! # Compliance Report Schemas
//!
//! A compliance report is filed once for a reporting period with a fixed
//! point-in-time metrics snapshot. Reports have no update or delete
//! operation. The metrics snapshot is a structured nested record,
//! persisted as a validated JSON document and parsed back on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ReportType;
use crate::error::ValidationError;
use crate::validate::{max_len, required, Validate};

/// Point-in-time aggregate snapshot embedded in a compliance report.
///
/// These are stored as-of-generation figures, not live-computed from the
/// other entities at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplianceMetrics {
    /// Total number of registered tindahan.
    pub total_tindahan: i64,
    /// Number of compliant tindahan.
    pub compliant_tindahan: i64,
    /// Number of tindahan with warnings.
    pub warning_tindahan: i64,
    /// Number of tindahan with violations.
    pub violation_tindahan: i64,
    /// Number of suspended tindahan.
    pub suspended_tindahan: i64,
    /// Number of expired permits.
    pub expired_permits: i64,
    /// Number of pending inspections.
    pub pending_inspections: i64,
    /// Total number of violations.
    pub total_violations: i64,
    /// Number of resolved violations.
    pub resolved_violations: i64,
    /// Overall compliance rate percentage.
    pub compliance_rate: f64,
}

/// The full persisted shape of a compliance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplianceReportRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// Kind of report.
    pub report_type: ReportType,
    /// Start of the reporting period.
    pub report_period_start: DateTime<Utc>,
    /// End of the reporting period.
    pub report_period_end: DateTime<Utc>,
    /// Specific zone, for zone-scoped reports.
    pub barangay_zone: Option<String>,
    /// Name of the official who generated the report.
    pub generated_by: String,
    /// Report summary.
    pub summary: String,
    /// Recommendations for improvement.
    pub recommendations: Option<String>,
    /// Metrics snapshot taken when the report was generated.
    pub metrics: Option<ComplianceMetrics>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload to file a new compliance report.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ComplianceReportCreate {
    /// Kind of report.
    pub report_type: ReportType,
    /// Start of the reporting period.
    pub report_period_start: DateTime<Utc>,
    /// End of the reporting period.
    pub report_period_end: DateTime<Utc>,
    /// Specific zone, for zone-scoped reports.
    #[serde(default)]
    pub barangay_zone: Option<String>,
    /// Name of the official generating the report.
    pub generated_by: String,
    /// Report summary.
    pub summary: String,
    /// Recommendations for improvement.
    #[serde(default)]
    pub recommendations: Option<String>,
    /// Metrics snapshot to embed.
    #[serde(default)]
    pub metrics: Option<ComplianceMetrics>,
}

impl Validate for ComplianceReportCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(zone) = &self.barangay_zone {
            max_len("barangay_zone", zone, 50)?;
        }
        required("generated_by", &self.generated_by)?;
        max_len("generated_by", &self.generated_by, 100)?;
        required("summary", &self.summary)?;
        max_len("summary", &self.summary, 1000)?;
        if let Some(rec) = &self.recommendations {
            max_len("recommendations", rec, 1000)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> ComplianceMetrics {
        ComplianceMetrics {
            total_tindahan: 48,
            compliant_tindahan: 40,
            warning_tindahan: 5,
            violation_tindahan: 2,
            suspended_tindahan: 1,
            expired_permits: 3,
            pending_inspections: 6,
            total_violations: 11,
            resolved_violations: 9,
            compliance_rate: 83.3,
        }
    }

    #[test]
    fn metrics_survive_json_round_trip() {
        let metrics = sample_metrics();
        let json = serde_json::to_value(&metrics).unwrap();
        let back: ComplianceMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn metrics_reject_structurally_invalid_documents() {
        // A stored document missing fields must fail to parse rather than
        // fill in defaults.
        let broken = serde_json::json!({"total_tindahan": 48});
        assert!(serde_json::from_value::<ComplianceMetrics>(broken).is_err());
    }

    #[test]
    fn create_requires_summary() {
        let create = ComplianceReportCreate {
            report_type: ReportType::Monthly,
            report_period_start: Utc::now(),
            report_period_end: Utc::now(),
            barangay_zone: None,
            generated_by: "Sec. Dela Cruz".to_string(),
            summary: "".to_string(),
            recommendations: None,
            metrics: Some(sample_metrics()),
        };
        assert!(matches!(
            create.validate().unwrap_err(),
            ValidationError::EmptyField { field: "summary" }
        ));
    }

    #[test]
    fn create_caps_summary_length() {
        let create = ComplianceReportCreate {
            report_type: ReportType::ViolationSummary,
            report_period_start: Utc::now(),
            report_period_end: Utc::now(),
            barangay_zone: Some("Zone 2".to_string()),
            generated_by: "Sec. Dela Cruz".to_string(),
            summary: "s".repeat(1001),
            recommendations: None,
            metrics: None,
        };
        assert!(create.validate().is_err());
    }
}
