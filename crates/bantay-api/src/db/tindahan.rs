//! Tindahan registration persistence.
//!
//! All functions take a `&SqlitePool` and operate on the `tindahan`
//! table. Deactivation flips `is_active`; rows are never deleted.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bantay_core::{
    BusinessType, ComplianceStatus, TindahanCreate, TindahanRecord, TindahanUpdate,
};

use super::decode_err;

const COLUMNS: &str = "id, business_name, owner_name, business_type, address, \
     contact_number, barangay_zone, is_active, business_permit_number, \
     permit_issued_date, permit_expiry_date, compliance_status, \
     last_inspection_date, next_inspection_due, registered_at, updated_at";

/// Insert a new registration.
///
/// Assigns the id, stamps both timestamps, and defaults the compliance
/// status to compliant. Returns the full stored record.
pub async fn insert(
    pool: &SqlitePool,
    create: &TindahanCreate,
) -> Result<TindahanRecord, sqlx::Error> {
    let now = Utc::now();
    let compliance_status = ComplianceStatus::default();

    let result = sqlx::query(
        "INSERT INTO tindahan (business_name, owner_name, business_type, address, \
         contact_number, barangay_zone, is_active, business_permit_number, \
         permit_issued_date, permit_expiry_date, compliance_status, \
         last_inspection_date, next_inspection_due, registered_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
    )
    .bind(&create.business_name)
    .bind(&create.owner_name)
    .bind(create.business_type.as_str())
    .bind(&create.address)
    .bind(&create.contact_number)
    .bind(&create.barangay_zone)
    .bind(create.is_active)
    .bind(&create.business_permit_number)
    .bind(create.permit_issued_date)
    .bind(create.permit_expiry_date)
    .bind(compliance_status.as_str())
    .bind(None::<DateTime<Utc>>)
    .bind(None::<DateTime<Utc>>)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(TindahanRecord {
        id: result.last_insert_rowid(),
        business_name: create.business_name.clone(),
        owner_name: create.owner_name.clone(),
        business_type: create.business_type,
        address: create.address.clone(),
        contact_number: create.contact_number.clone(),
        barangay_zone: create.barangay_zone.clone(),
        is_active: create.is_active,
        business_permit_number: create.business_permit_number.clone(),
        permit_issued_date: create.permit_issued_date,
        permit_expiry_date: create.permit_expiry_date,
        compliance_status,
        last_inspection_date: None,
        next_inspection_due: None,
        registered_at: now,
        updated_at: now,
    })
}

/// Fetch a registration by id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<TindahanRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, TindahanRow>(&format!(
        "SELECT {COLUMNS} FROM tindahan WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(TindahanRow::into_record).transpose()
}

/// Fetch a registration by business name.
///
/// Duplicate names are permitted; the first match in insertion order is
/// returned so the lookup stays deterministic.
pub async fn get_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<TindahanRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, TindahanRow>(&format!(
        "SELECT {COLUMNS} FROM tindahan WHERE business_name = ?1 ORDER BY id LIMIT 1"
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;

    row.map(TindahanRow::into_record).transpose()
}

/// List registrations in insertion order with offset pagination.
///
/// When `active_only` is set, deactivated registrations are excluded.
pub async fn list(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
    active_only: bool,
) -> Result<Vec<TindahanRecord>, sqlx::Error> {
    let rows = if active_only {
        sqlx::query_as::<_, TindahanRow>(&format!(
            "SELECT {COLUMNS} FROM tindahan WHERE is_active = TRUE \
             ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, TindahanRow>(&format!(
            "SELECT {COLUMNS} FROM tindahan ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?
    };

    rows.into_iter().map(TindahanRow::into_record).collect()
}

/// Apply a partial update, refreshing the update timestamp.
///
/// Only fields present in the payload change. Returns the updated record,
/// or `None` if the id does not exist. The update timestamp is refreshed
/// even when the payload is empty.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: &TindahanUpdate,
) -> Result<Option<TindahanRecord>, sqlx::Error> {
    let Some(mut record) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    changes.apply(&mut record);
    record.updated_at = Utc::now();

    sqlx::query(
        "UPDATE tindahan SET business_name = ?1, owner_name = ?2, business_type = ?3, \
         address = ?4, contact_number = ?5, barangay_zone = ?6, is_active = ?7, \
         business_permit_number = ?8, permit_issued_date = ?9, permit_expiry_date = ?10, \
         compliance_status = ?11, updated_at = ?12 WHERE id = ?13",
    )
    .bind(&record.business_name)
    .bind(&record.owner_name)
    .bind(record.business_type.as_str())
    .bind(&record.address)
    .bind(&record.contact_number)
    .bind(&record.barangay_zone)
    .bind(record.is_active)
    .bind(&record.business_permit_number)
    .bind(record.permit_issued_date)
    .bind(record.permit_expiry_date)
    .bind(record.compliance_status.as_str())
    .bind(record.updated_at)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(Some(record))
}

/// Soft-delete a registration by clearing its active flag.
///
/// Idempotent: deactivating an already-inactive registration still
/// succeeds. Returns false only when the id does not exist. The row is
/// never physically removed.
pub async fn deactivate(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE tindahan SET is_active = FALSE, updated_at = ?1 WHERE id = ?2")
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct TindahanRow {
    id: i64,
    business_name: String,
    owner_name: String,
    business_type: String,
    address: String,
    contact_number: Option<String>,
    barangay_zone: String,
    is_active: bool,
    business_permit_number: Option<String>,
    permit_issued_date: Option<DateTime<Utc>>,
    permit_expiry_date: Option<DateTime<Utc>>,
    compliance_status: String,
    last_inspection_date: Option<DateTime<Utc>>,
    next_inspection_due: Option<DateTime<Utc>>,
    registered_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TindahanRow {
    fn into_record(self) -> Result<TindahanRecord, sqlx::Error> {
        Ok(TindahanRecord {
            id: self.id,
            business_name: self.business_name,
            owner_name: self.owner_name,
            business_type: BusinessType::parse(&self.business_type).map_err(decode_err)?,
            address: self.address,
            contact_number: self.contact_number,
            barangay_zone: self.barangay_zone,
            is_active: self.is_active,
            business_permit_number: self.business_permit_number,
            permit_issued_date: self.permit_issued_date,
            permit_expiry_date: self.permit_expiry_date,
            compliance_status: ComplianceStatus::parse(&self.compliance_status)
                .map_err(decode_err)?,
            last_inspection_date: self.last_inspection_date,
            next_inspection_due: self.next_inspection_due,
            registered_at: self.registered_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn sample_create(name: &str) -> TindahanCreate {
        TindahanCreate {
            business_name: name.to_string(),
            owner_name: "Nena Reyes".to_string(),
            business_type: BusinessType::FixedStall,
            address: "123 Mabini St".to_string(),
            contact_number: Some("09171234567".to_string()),
            barangay_zone: "Zone 4".to_string(),
            is_active: true,
            business_permit_number: None,
            permit_issued_date: None,
            permit_expiry_date: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids_and_defaults() {
        let pool = test_pool().await;

        let first = insert(&pool, &sample_create("Store A")).await.unwrap();
        let second = insert(&pool, &sample_create("Store B")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.compliance_status, ComplianceStatus::Compliant);
        assert!(first.is_active);
        assert!(first.last_inspection_date.is_none());
        assert_eq!(first.registered_at, first.updated_at);
    }

    #[tokio::test]
    async fn fetch_by_id_round_trips_the_record() {
        let pool = test_pool().await;
        let stored = insert(&pool, &sample_create("Aling Nena's Store"))
            .await
            .unwrap();

        let fetched = get_by_id(&pool, stored.id).await.unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn fetch_missing_id_is_none_not_error() {
        let pool = test_pool().await;
        assert!(get_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_caps_at_limit_preserving_insertion_order() {
        let pool = test_pool().await;
        for i in 0..150 {
            insert(&pool, &sample_create(&format!("Store {i:03}")))
                .await
                .unwrap();
        }

        let page = list(&pool, 0, 100, true).await.unwrap();
        assert_eq!(page.len(), 100);
        assert_eq!(page[0].business_name, "Store 000");
        assert_eq!(page[99].business_name, "Store 099");

        let rest = list(&pool, 100, 100, true).await.unwrap();
        assert_eq!(rest.len(), 50);
        assert_eq!(rest[0].business_name, "Store 100");
    }

    #[tokio::test]
    async fn list_active_only_excludes_deactivated() {
        let pool = test_pool().await;
        let keep = insert(&pool, &sample_create("Open Store")).await.unwrap();
        let drop = insert(&pool, &sample_create("Closed Store")).await.unwrap();

        assert!(deactivate(&pool, drop.id).await.unwrap());

        let active = list(&pool, 0, 100, true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, keep.id);

        let everything = list(&pool, 0, 100, false).await.unwrap();
        assert_eq!(everything.len(), 2);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let pool = test_pool().await;
        let stored = insert(&pool, &sample_create("Aling Nena's Store"))
            .await
            .unwrap();

        let changes = TindahanUpdate {
            owner_name: Some("Rosa Reyes".to_string()),
            ..TindahanUpdate::default()
        };
        let updated = update(&pool, stored.id, &changes).await.unwrap().unwrap();

        assert_eq!(updated.owner_name, "Rosa Reyes");
        assert_eq!(updated.business_name, stored.business_name);
        assert_eq!(updated.address, stored.address);
        assert!(updated.updated_at > stored.registered_at);

        // The write is durable, not just the returned value.
        let fetched = get_by_id(&pool, stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.owner_name, "Rosa Reyes");
    }

    #[tokio::test]
    async fn empty_update_bumps_only_the_timestamp() {
        let pool = test_pool().await;
        let stored = insert(&pool, &sample_create("Store")).await.unwrap();

        let updated = update(&pool, stored.id, &TindahanUpdate::default())
            .await
            .unwrap()
            .unwrap();

        assert!(updated.updated_at > stored.updated_at);
        assert_eq!(updated.business_name, stored.business_name);
        assert_eq!(updated.owner_name, stored.owner_name);
        assert_eq!(updated.compliance_status, stored.compliance_status);
        assert_eq!(updated.registered_at, stored.registered_at);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let pool = test_pool().await;
        let result = update(&pool, 42, &TindahanUpdate::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn deactivate_is_idempotent() {
        let pool = test_pool().await;
        let stored = insert(&pool, &sample_create("Store")).await.unwrap();

        assert!(deactivate(&pool, stored.id).await.unwrap());
        assert!(list(&pool, 0, 100, true).await.unwrap().is_empty());

        // Second call still succeeds and the record stays excluded.
        assert!(deactivate(&pool, stored.id).await.unwrap());
        assert!(list(&pool, 0, 100, true).await.unwrap().is_empty());

        // The row still exists.
        let fetched = get_by_id(&pool, stored.id).await.unwrap().unwrap();
        assert!(!fetched.is_active);
    }

    #[tokio::test]
    async fn deactivate_missing_id_reports_not_found() {
        let pool = test_pool().await;
        assert!(!deactivate(&pool, 999).await.unwrap());
    }

    #[tokio::test]
    async fn get_by_name_returns_first_match_for_duplicates() {
        let pool = test_pool().await;
        let first = insert(&pool, &sample_create("Twin Store")).await.unwrap();
        let _second = insert(&pool, &sample_create("Twin Store")).await.unwrap();

        let found = get_by_name(&pool, "Twin Store").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);

        assert!(get_by_name(&pool, "No Such Store").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_enum_value_is_a_decode_error() {
        let pool = test_pool().await;
        let stored = insert(&pool, &sample_create("Store")).await.unwrap();

        sqlx::query("UPDATE tindahan SET compliance_status = 'unknown' WHERE id = ?1")
            .bind(stored.id)
            .execute(&pool)
            .await
            .unwrap();

        let err = get_by_id(&pool, stored.id).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Decode(_)));
    }
}
