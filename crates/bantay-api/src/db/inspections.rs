//! Inspection persistence.
//!
//! The `tindahan_id` reference is enforced by a foreign key: inserting
//! an inspection for a registration that does not exist is a store-level
//! error, not a silent orphan.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bantay_core::{InspectionCreate, InspectionRecord, InspectionType, InspectionUpdate};

use super::decode_err;

const COLUMNS: &str = "id, tindahan_id, inspection_type, inspector_name, inspection_date, \
     status, notes, created_at, updated_at";

/// Insert a new inspection, assigning its id and timestamps.
pub async fn insert(
    pool: &SqlitePool,
    create: &InspectionCreate,
) -> Result<InspectionRecord, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        "INSERT INTO inspections (tindahan_id, inspection_type, inspector_name, \
         inspection_date, status, notes, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(create.tindahan_id)
    .bind(create.inspection_type.as_str())
    .bind(&create.inspector_name)
    .bind(create.inspection_date)
    .bind(create.status.as_str())
    .bind(&create.notes)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(InspectionRecord {
        id: result.last_insert_rowid(),
        tindahan_id: create.tindahan_id,
        inspection_type: create.inspection_type,
        inspector_name: create.inspector_name.clone(),
        inspection_date: create.inspection_date,
        status: create.status,
        notes: create.notes.clone(),
        created_at: now,
        updated_at: now,
    })
}

/// Fetch an inspection by id.
pub async fn get_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<InspectionRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, InspectionRow>(&format!(
        "SELECT {COLUMNS} FROM inspections WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(InspectionRow::into_record).transpose()
}

/// List inspections in insertion order with offset pagination.
pub async fn list(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<InspectionRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, InspectionRow>(&format!(
        "SELECT {COLUMNS} FROM inspections ORDER BY id LIMIT ?1 OFFSET ?2"
    ))
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(InspectionRow::into_record).collect()
}

/// List every inspection of one tindahan, in insertion order.
pub async fn list_by_tindahan(
    pool: &SqlitePool,
    tindahan_id: i64,
) -> Result<Vec<InspectionRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, InspectionRow>(&format!(
        "SELECT {COLUMNS} FROM inspections WHERE tindahan_id = ?1 ORDER BY id"
    ))
    .bind(tindahan_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(InspectionRow::into_record).collect()
}

/// Apply a partial update, refreshing the update timestamp.
///
/// Completing an inspection does not cascade any status change to the
/// parent tindahan.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: &InspectionUpdate,
) -> Result<Option<InspectionRecord>, sqlx::Error> {
    let Some(mut record) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    changes.apply(&mut record);
    record.updated_at = Utc::now();

    sqlx::query(
        "UPDATE inspections SET inspection_type = ?1, inspector_name = ?2, \
         inspection_date = ?3, status = ?4, notes = ?5, updated_at = ?6 WHERE id = ?7",
    )
    .bind(record.inspection_type.as_str())
    .bind(&record.inspector_name)
    .bind(record.inspection_date)
    .bind(record.status.as_str())
    .bind(&record.notes)
    .bind(record.updated_at)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(record))
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct InspectionRow {
    id: i64,
    tindahan_id: i64,
    inspection_type: String,
    inspector_name: String,
    inspection_date: DateTime<Utc>,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InspectionRow {
    fn into_record(self) -> Result<InspectionRecord, sqlx::Error> {
        Ok(InspectionRecord {
            id: self.id,
            tindahan_id: self.tindahan_id,
            inspection_type: InspectionType::parse(&self.inspection_type).map_err(decode_err)?,
            inspector_name: self.inspector_name,
            inspection_date: self.inspection_date,
            status: bantay_core::InspectionStatus::parse(&self.status).map_err(decode_err)?,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{test_pool, tindahan};
    use bantay_core::{BusinessType, InspectionStatus, TindahanCreate};

    async fn registered_tindahan(pool: &SqlitePool) -> i64 {
        let create = TindahanCreate {
            business_name: "Inspected Store".to_string(),
            owner_name: "Nena Reyes".to_string(),
            business_type: BusinessType::FixedStall,
            address: "123 Mabini St".to_string(),
            contact_number: None,
            barangay_zone: "Zone 4".to_string(),
            is_active: true,
            business_permit_number: None,
            permit_issued_date: None,
            permit_expiry_date: None,
        };
        tindahan::insert(pool, &create).await.unwrap().id
    }

    fn sample_create(tindahan_id: i64) -> InspectionCreate {
        InspectionCreate {
            tindahan_id,
            inspection_type: InspectionType::Routine,
            inspector_name: "Kagawad Santos".to_string(),
            inspection_date: Utc::now(),
            status: InspectionStatus::default(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn insert_defaults_to_scheduled() {
        let pool = test_pool().await;
        let tindahan_id = registered_tindahan(&pool).await;

        let inspection = insert(&pool, &sample_create(tindahan_id)).await.unwrap();
        assert_eq!(inspection.status, InspectionStatus::Scheduled);

        let fetched = get_by_id(&pool, inspection.id).await.unwrap().unwrap();
        assert_eq!(fetched, inspection);
    }

    #[tokio::test]
    async fn insert_rejects_missing_tindahan() {
        let pool = test_pool().await;
        let err = insert(&pool, &sample_create(404)).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Database(_)));
    }

    #[tokio::test]
    async fn completing_an_inspection_does_not_touch_the_tindahan() {
        let pool = test_pool().await;
        let tindahan_id = registered_tindahan(&pool).await;
        let inspection = insert(&pool, &sample_create(tindahan_id)).await.unwrap();

        let changes = InspectionUpdate {
            status: Some(InspectionStatus::Completed),
            notes: Some("No findings".to_string()),
            ..InspectionUpdate::default()
        };
        let updated = update(&pool, inspection.id, &changes)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, InspectionStatus::Completed);
        assert_eq!(updated.notes.as_deref(), Some("No findings"));

        let parent = tindahan::get_by_id(&pool, tindahan_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            parent.compliance_status,
            bantay_core::ComplianceStatus::Compliant
        );
        assert!(parent.last_inspection_date.is_none());
    }

    #[tokio::test]
    async fn list_by_tindahan_returns_only_its_inspections() {
        let pool = test_pool().await;
        let first = registered_tindahan(&pool).await;
        let second = registered_tindahan(&pool).await;

        insert(&pool, &sample_create(first)).await.unwrap();
        insert(&pool, &sample_create(first)).await.unwrap();
        insert(&pool, &sample_create(second)).await.unwrap();

        assert_eq!(list_by_tindahan(&pool, first).await.unwrap().len(), 2);
        assert_eq!(list_by_tindahan(&pool, second).await.unwrap().len(), 1);
        assert_eq!(list(&pool, 0, 100).await.unwrap().len(), 3);
        assert_eq!(list(&pool, 2, 100).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let pool = test_pool().await;
        let result = update(&pool, 7, &InspectionUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }
}
