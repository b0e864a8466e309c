//! Compliance report persistence.
//!
//! Reports are filed once with a fixed metrics snapshot; there are no
//! update or delete operations. The snapshot is persisted as a JSON
//! document column and parsed back into [`ComplianceMetrics`] on read,
//! so a structurally invalid stored document is a decode error.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bantay_core::{ComplianceMetrics, ComplianceReportCreate, ComplianceReportRecord, ReportType};

use super::decode_err;

const COLUMNS: &str = "id, report_type, report_period_start, report_period_end, \
     barangay_zone, generated_by, summary, recommendations, metrics, created_at, updated_at";

/// Serialize a metrics snapshot for the document column.
fn serialize_metrics(
    metrics: &Option<ComplianceMetrics>,
) -> Result<Option<serde_json::Value>, sqlx::Error> {
    metrics
        .as_ref()
        .map(|m| {
            serde_json::to_value(m).map_err(|e| {
                tracing::error!(error = %e, "failed to serialize report metrics");
                sqlx::Error::Encode(Box::new(e))
            })
        })
        .transpose()
}

/// Insert a new report, assigning its id and timestamps.
pub async fn insert(
    pool: &SqlitePool,
    create: &ComplianceReportCreate,
) -> Result<ComplianceReportRecord, sqlx::Error> {
    let now = Utc::now();
    let metrics_doc = serialize_metrics(&create.metrics)?;

    let result = sqlx::query(
        "INSERT INTO compliance_reports (report_type, report_period_start, \
         report_period_end, barangay_zone, generated_by, summary, recommendations, \
         metrics, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )
    .bind(create.report_type.as_str())
    .bind(create.report_period_start)
    .bind(create.report_period_end)
    .bind(&create.barangay_zone)
    .bind(&create.generated_by)
    .bind(&create.summary)
    .bind(&create.recommendations)
    .bind(metrics_doc)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(ComplianceReportRecord {
        id: result.last_insert_rowid(),
        report_type: create.report_type,
        report_period_start: create.report_period_start,
        report_period_end: create.report_period_end,
        barangay_zone: create.barangay_zone.clone(),
        generated_by: create.generated_by.clone(),
        summary: create.summary.clone(),
        recommendations: create.recommendations.clone(),
        metrics: create.metrics.clone(),
        created_at: now,
        updated_at: now,
    })
}

/// Fetch a report by id.
pub async fn get_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<ComplianceReportRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, ReportRow>(&format!(
        "SELECT {COLUMNS} FROM compliance_reports WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(ReportRow::into_record).transpose()
}

/// List reports in insertion order with offset pagination.
pub async fn list(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<ComplianceReportRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReportRow>(&format!(
        "SELECT {COLUMNS} FROM compliance_reports ORDER BY id LIMIT ?1 OFFSET ?2"
    ))
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ReportRow::into_record).collect()
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct ReportRow {
    id: i64,
    report_type: String,
    report_period_start: DateTime<Utc>,
    report_period_end: DateTime<Utc>,
    barangay_zone: Option<String>,
    generated_by: String,
    summary: String,
    recommendations: Option<String>,
    metrics: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReportRow {
    fn into_record(self) -> Result<ComplianceReportRecord, sqlx::Error> {
        let metrics = self
            .metrics
            .map(serde_json::from_value::<ComplianceMetrics>)
            .transpose()
            .map_err(|e| {
                tracing::error!(error = %e, report_id = self.id, "stored report metrics do not parse");
                sqlx::Error::Decode(Box::new(e))
            })?;

        Ok(ComplianceReportRecord {
            id: self.id,
            report_type: ReportType::parse(&self.report_type).map_err(decode_err)?,
            report_period_start: self.report_period_start,
            report_period_end: self.report_period_end,
            barangay_zone: self.barangay_zone,
            generated_by: self.generated_by,
            summary: self.summary,
            recommendations: self.recommendations,
            metrics,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
