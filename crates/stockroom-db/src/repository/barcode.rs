//! # Barcode Repository
//!
//! Database operations for barcodes.
//!
//! ## Key Operations
//! - CRUD with store-assigned integer ids
//! - Conditional soft-delete / restore
//! - Exact-value lookup backing the uniqueness rule
//!
//! Every function takes the caller's `&mut SqliteConnection`; see the
//! [module docs](crate::repository) for the ownership rule.

use chrono::NaiveDate;
use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::error::DbResult;
use stockroom_core::{Barcode, BarcodeKind};

/// One row of the `barcode` table.
#[derive(Debug, sqlx::FromRow)]
struct BarcodeRow {
    id: i64,
    kind: String,
    value: String,
    assigned_date: NaiveDate,
    notes: Option<String>,
    deleted: bool,
}

impl BarcodeRow {
    fn into_barcode(self) -> Barcode {
        let kind = decode_kind(self.id, &self.kind);
        Barcode {
            id: self.id,
            kind,
            value: self.value,
            assigned_date: Some(self.assigned_date),
            notes: self.notes,
            deleted: self.deleted,
        }
    }
}

/// Decodes a stored kind string, tolerating unrecognized values.
///
/// The column is free-form text; a value this build doesn't know decodes to
/// `None` with a warning instead of failing the whole read.
pub(crate) fn decode_kind(id: i64, raw: &str) -> Option<BarcodeKind> {
    let kind = BarcodeKind::parse(raw);
    if kind.is_none() {
        warn!(barcode_id = id, kind = %raw, "Unrecognized barcode kind in database");
    }
    kind
}

const SELECT_COLUMNS: &str = "SELECT id, kind, value, assigned_date, notes, deleted FROM barcode";

/// Inserts a new barcode and writes the generated id back onto the entity.
///
/// Notes are trimmed, and blank notes are stored as NULL.
///
/// ## Arguments
/// * `conn` - The caller's connection; the caller owns commit/rollback
/// * `barcode` - Barcode to insert; `barcode.id` is populated on success
pub async fn insert(conn: &mut SqliteConnection, barcode: &mut Barcode) -> DbResult<()> {
    debug!(value = %barcode.value, "Inserting barcode");

    let kind = barcode.kind.map(|k| k.as_str());
    let notes = barcode
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let result = sqlx::query(
        r#"
        INSERT INTO barcode (kind, value, assigned_date, notes)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(kind)
    .bind(&barcode.value)
    .bind(barcode.assigned_date)
    .bind(notes)
    .execute(&mut *conn)
    .await?;

    barcode.id = result.last_insert_rowid();
    Ok(())
}

/// Overwrites all mutable fields of a barcode by id.
///
/// No existence check at this layer: updating an absent id silently
/// affects zero rows.
pub async fn update(conn: &mut SqliteConnection, barcode: &Barcode) -> DbResult<()> {
    debug!(id = barcode.id, "Updating barcode");

    let kind = barcode.kind.map(|k| k.as_str());
    let notes = barcode
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    sqlx::query(
        r#"
        UPDATE barcode
        SET kind = ?1, value = ?2, assigned_date = ?3, notes = ?4
        WHERE id = ?5
        "#,
    )
    .bind(kind)
    .bind(&barcode.value)
    .bind(barcode.assigned_date)
    .bind(notes)
    .bind(barcode.id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Flags a barcode as deleted, only where it is currently active.
///
/// ## Returns
/// `true` if a row changed; `false` makes a repeat call a no-op.
pub async fn soft_delete(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    debug!(id, "Soft-deleting barcode");

    let result = sqlx::query("UPDATE barcode SET deleted = 1 WHERE id = ?1 AND deleted = 0")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Clears the deleted flag, only where it is currently set.
pub async fn restore(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    debug!(id, "Restoring barcode");

    let result = sqlx::query("UPDATE barcode SET deleted = 0 WHERE id = ?1 AND deleted = 1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Gets the active barcode with this id.
///
/// ## Returns
/// * `Ok(Some(Barcode))` - Active barcode found
/// * `Ok(None)` - No such id, or the row is soft-deleted
pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> DbResult<Option<Barcode>> {
    let row: Option<BarcodeRow> =
        sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?1 AND deleted = 0"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(row.map(BarcodeRow::into_barcode))
}

/// Gets all active barcodes. Order is not guaranteed.
pub async fn get_all(conn: &mut SqliteConnection) -> DbResult<Vec<Barcode>> {
    let rows: Vec<BarcodeRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE deleted = 0"))
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(BarcodeRow::into_barcode).collect())
}

/// Gets the active barcode matching this value exactly.
pub async fn get_by_value(conn: &mut SqliteConnection, value: &str) -> DbResult<Option<Barcode>> {
    let row: Option<BarcodeRow> =
        sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE value = ?1 AND deleted = 0"))
            .bind(value)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(row.map(BarcodeRow::into_barcode))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Barcode {
        Barcode::new(BarcodeKind::Ean13, "7791234567890", date(2025, 10, 1))
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut barcode = sample();
        barcode.notes = Some("  Lot L123  ".to_string());
        insert(&mut conn, &mut barcode).await.unwrap();
        assert!(barcode.id > 0);

        let found = get_by_id(&mut conn, barcode.id).await.unwrap().unwrap();
        assert_eq!(found.id, barcode.id);
        assert_eq!(found.kind, Some(BarcodeKind::Ean13));
        assert_eq!(found.value, "7791234567890");
        assert_eq!(found.assigned_date, Some(date(2025, 10, 1)));
        assert_eq!(found.notes.as_deref(), Some("Lot L123")); // trimmed on write
        assert!(!found.deleted);
    }

    #[tokio::test]
    async fn test_blank_notes_stored_as_null() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut barcode = sample();
        barcode.notes = Some("   ".to_string());
        insert(&mut conn, &mut barcode).await.unwrap();

        let found = get_by_id(&mut conn, barcode.id).await.unwrap().unwrap();
        assert_eq!(found.notes, None);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut barcode = sample();
        insert(&mut conn, &mut barcode).await.unwrap();

        barcode.kind = Some(BarcodeKind::Upc);
        barcode.value = "042100005264".to_string();
        barcode.assigned_date = Some(date(2025, 12, 24));
        barcode.notes = Some("relabelled".to_string());
        update(&mut conn, &barcode).await.unwrap();

        let found = get_by_id(&mut conn, barcode.id).await.unwrap().unwrap();
        assert_eq!(found.kind, Some(BarcodeKind::Upc));
        assert_eq!(found.value, "042100005264");
        assert_eq!(found.assigned_date, Some(date(2025, 12, 24)));
        assert_eq!(found.notes.as_deref(), Some("relabelled"));
    }

    #[tokio::test]
    async fn test_update_of_absent_id_affects_nothing() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut ghost = sample();
        ghost.id = 999;
        update(&mut conn, &ghost).await.unwrap();

        assert!(get_all(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_soft_delete_is_conditional() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut barcode = sample();
        insert(&mut conn, &mut barcode).await.unwrap();

        assert!(soft_delete(&mut conn, barcode.id).await.unwrap());
        // second call is a no-op, not an error
        assert!(!soft_delete(&mut conn, barcode.id).await.unwrap());
        // unknown id is a no-op too
        assert!(!soft_delete(&mut conn, 999).await.unwrap());

        assert!(get_by_id(&mut conn, barcode.id).await.unwrap().is_none());
        assert!(get_all(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_restore_is_conditional() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut barcode = sample();
        insert(&mut conn, &mut barcode).await.unwrap();

        // active row: restore has nothing to do
        assert!(!restore(&mut conn, barcode.id).await.unwrap());

        soft_delete(&mut conn, barcode.id).await.unwrap();
        assert!(restore(&mut conn, barcode.id).await.unwrap());

        let found = get_by_id(&mut conn, barcode.id).await.unwrap().unwrap();
        assert!(!found.deleted);
    }

    #[tokio::test]
    async fn test_get_by_value_exact_match_active_only() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut barcode = sample();
        insert(&mut conn, &mut barcode).await.unwrap();

        let found = get_by_value(&mut conn, "7791234567890").await.unwrap();
        assert_eq!(found.unwrap().id, barcode.id);

        assert!(get_by_value(&mut conn, "7791234567")
            .await
            .unwrap()
            .is_none());

        soft_delete(&mut conn, barcode.id).await.unwrap();
        assert!(get_by_value(&mut conn, "7791234567890")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_unrecognized_kind_decodes_to_none() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        sqlx::query(
            "INSERT INTO barcode (kind, value, assigned_date) VALUES ('QR', '123456', '2025-10-01')",
        )
        .execute(&mut *conn)
        .await
        .unwrap();

        let found = get_by_value(&mut conn, "123456").await.unwrap().unwrap();
        assert_eq!(found.kind, None);
        assert_eq!(found.value, "123456");
    }
}
