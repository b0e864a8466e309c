//! Violation persistence.
//!
//! Violations are owned by an inspection (`inspection_id` foreign key).
//! Resolution happens via partial update: flag, notes and date travel
//! together by convention but are not enforced atomically, and resolving
//! a violation does not cascade to the parent records.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bantay_core::{ViolationCreate, ViolationRecord, ViolationType, ViolationUpdate};

use super::decode_err;

const COLUMNS: &str = "id, inspection_id, violation_type, description, severity, \
     is_resolved, resolution_notes, resolution_date, created_at, updated_at";

/// Insert a new violation, assigning its id and timestamps.
pub async fn insert(
    pool: &SqlitePool,
    create: &ViolationCreate,
) -> Result<ViolationRecord, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        "INSERT INTO violations (inspection_id, violation_type, description, severity, \
         is_resolved, resolution_notes, resolution_date, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(create.inspection_id)
    .bind(create.violation_type.as_str())
    .bind(&create.description)
    .bind(create.severity)
    .bind(create.is_resolved)
    .bind(&create.resolution_notes)
    .bind(create.resolution_date)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(ViolationRecord {
        id: result.last_insert_rowid(),
        inspection_id: create.inspection_id,
        violation_type: create.violation_type,
        description: create.description.clone(),
        severity: create.severity,
        is_resolved: create.is_resolved,
        resolution_notes: create.resolution_notes.clone(),
        resolution_date: create.resolution_date,
        created_at: now,
        updated_at: now,
    })
}

/// Fetch a violation by id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ViolationRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, ViolationRow>(&format!(
        "SELECT {COLUMNS} FROM violations WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(ViolationRow::into_record).transpose()
}

/// List every violation recorded under one inspection, in insertion order.
pub async fn list_by_inspection(
    pool: &SqlitePool,
    inspection_id: i64,
) -> Result<Vec<ViolationRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ViolationRow>(&format!(
        "SELECT {COLUMNS} FROM violations WHERE inspection_id = ?1 ORDER BY id"
    ))
    .bind(inspection_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ViolationRow::into_record).collect()
}

/// Apply a partial update, refreshing the update timestamp.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: &ViolationUpdate,
) -> Result<Option<ViolationRecord>, sqlx::Error> {
    let Some(mut record) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    changes.apply(&mut record);
    record.updated_at = Utc::now();

    sqlx::query(
        "UPDATE violations SET violation_type = ?1, description = ?2, severity = ?3, \
         is_resolved = ?4, resolution_notes = ?5, resolution_date = ?6, updated_at = ?7 \
         WHERE id = ?8",
    )
    .bind(record.violation_type.as_str())
    .bind(&record.description)
    .bind(record.severity)
    .bind(record.is_resolved)
    .bind(&record.resolution_notes)
    .bind(record.resolution_date)
    .bind(record.updated_at)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(record))
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct ViolationRow {
    id: i64,
    inspection_id: i64,
    violation_type: String,
    description: String,
    severity: i32,
    is_resolved: bool,
    resolution_notes: Option<String>,
    resolution_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ViolationRow {
    fn into_record(self) -> Result<ViolationRecord, sqlx::Error> {
        Ok(ViolationRecord {
            id: self.id,
            inspection_id: self.inspection_id,
            violation_type: ViolationType::parse(&self.violation_type).map_err(decode_err)?,
            description: self.description,
            severity: self.severity,
            is_resolved: self.is_resolved,
            resolution_notes: self.resolution_notes,
            resolution_date: self.resolution_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{inspections, test_pool, tindahan};
    use bantay_core::{
        BusinessType, InspectionCreate, InspectionStatus, InspectionType, TindahanCreate,
    };

    async fn scheduled_inspection(pool: &SqlitePool) -> i64 {
        let store = TindahanCreate {
            business_name: "Store With Findings".to_string(),
            owner_name: "Nena Reyes".to_string(),
            business_type: BusinessType::FoodCart,
            address: "Corner of Rizal Ave".to_string(),
            contact_number: None,
            barangay_zone: "Zone 1".to_string(),
            is_active: true,
            business_permit_number: None,
            permit_issued_date: None,
            permit_expiry_date: None,
        };
        let tindahan_id = tindahan::insert(pool, &store).await.unwrap().id;

        let inspection = InspectionCreate {
            tindahan_id,
            inspection_type: InspectionType::Complaint,
            inspector_name: "Kagawad Santos".to_string(),
            inspection_date: Utc::now(),
            status: InspectionStatus::default(),
            notes: None,
        };
        inspections::insert(pool, &inspection).await.unwrap().id
    }

    fn sample_create(inspection_id: i64) -> ViolationCreate {
        ViolationCreate {
            inspection_id,
            violation_type: ViolationType::UnsanitaryConditions,
            description: "Uncovered food bins".to_string(),
            severity: 2,
            is_resolved: false,
            resolution_notes: None,
            resolution_date: None,
        }
    }

    #[tokio::test]
    async fn insert_and_fetch_round_trip() {
        let pool = test_pool().await;
        let inspection_id = scheduled_inspection(&pool).await;

        let violation = insert(&pool, &sample_create(inspection_id)).await.unwrap();
        assert!(!violation.is_resolved);

        let fetched = get_by_id(&pool, violation.id).await.unwrap().unwrap();
        assert_eq!(fetched, violation);
    }

    #[tokio::test]
    async fn insert_rejects_missing_inspection() {
        let pool = test_pool().await;
        let err = insert(&pool, &sample_create(404)).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Database(_)));
    }

    #[tokio::test]
    async fn resolution_via_partial_update() {
        let pool = test_pool().await;
        let inspection_id = scheduled_inspection(&pool).await;
        let violation = insert(&pool, &sample_create(inspection_id)).await.unwrap();

        let resolved_on = Utc::now();
        let changes = ViolationUpdate {
            is_resolved: Some(true),
            resolution_notes: Some("Bins covered on re-visit".to_string()),
            resolution_date: Some(resolved_on),
            ..ViolationUpdate::default()
        };
        let updated = update(&pool, violation.id, &changes).await.unwrap().unwrap();

        assert!(updated.is_resolved);
        assert_eq!(updated.resolution_date, Some(resolved_on));
        assert_eq!(updated.severity, violation.severity);
        assert!(updated.updated_at > violation.updated_at);
    }

    #[tokio::test]
    async fn one_inspection_owns_many_violations() {
        let pool = test_pool().await;
        let inspection_id = scheduled_inspection(&pool).await;

        for severity in [1, 3, 5] {
            let mut create = sample_create(inspection_id);
            create.severity = severity;
            insert(&pool, &create).await.unwrap();
        }

        let owned = list_by_inspection(&pool, inspection_id).await.unwrap();
        assert_eq!(owned.len(), 3);
        assert_eq!(
            owned.iter().map(|v| v.severity).collect::<Vec<_>>(),
            vec![1, 3, 5]
        );
        assert!(list_by_inspection(&pool, 404).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let pool = test_pool().await;
        let result = update(&pool, 9, &ViolationUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }
}
