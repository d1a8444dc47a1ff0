//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD with store-assigned integer ids
//! - Reads join the linked barcode so products come back fully populated
//! - Narrow `assign_barcode` update touching only the link column
//!
//! ## The Barcode Join
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              How Product Reads Resolve the Barcode                  │
//! │                                                                     │
//! │  product ──LEFT JOIN──► barcode ON barcode_id = barcode.id          │
//! │                                 AND barcode.deleted = 0             │
//! │                                                                     │
//! │  link column NULL          → product with no barcode                │
//! │  link target soft-deleted  → product with no barcode (join filters  │
//! │                              it, exactly like a missing link)       │
//! │  link target active        → product carries the barcode            │
//! │                                                                     │
//! │  Never an error: an unreadable link degrades to "no barcode".       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function takes the caller's `&mut SqliteConnection`; see the
//! [module docs](crate::repository) for the ownership rule.

use chrono::NaiveDate;
use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::barcode::decode_kind;
use stockroom_core::{Barcode, Money, Product, ProductCategory, Weight};

/// One row of the `product` table joined with its active barcode.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    brand: Option<String>,
    category: Option<String>,
    price_cents: i64,
    weight_grams: Option<i64>,
    stock: i64,
    deleted: bool,
    code_id: Option<i64>,
    code_kind: Option<String>,
    code_value: Option<String>,
    code_date: Option<NaiveDate>,
    code_notes: Option<String>,
    code_deleted: Option<bool>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        let category = match self.category.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let parsed = ProductCategory::parse(raw);
                if parsed.is_none() {
                    warn!(
                        product_id = self.id,
                        category = %raw,
                        "Unrecognized product category in database"
                    );
                }
                parsed
            }
            _ => None,
        };

        let barcode = match self.code_id {
            Some(code_id) if code_id > 0 => Some(Barcode {
                id: code_id,
                kind: self
                    .code_kind
                    .as_deref()
                    .and_then(|raw| decode_kind(code_id, raw)),
                value: self.code_value.unwrap_or_default(),
                assigned_date: self.code_date,
                notes: self.code_notes,
                deleted: self.code_deleted.unwrap_or(false),
            }),
            _ => None,
        };

        Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            category,
            price: Money::from_cents(self.price_cents),
            weight: Weight::from_grams(self.weight_grams.unwrap_or(0)),
            stock: self.stock,
            deleted: self.deleted,
            barcode,
        }
    }
}

const SELECT_JOINED: &str = r#"
SELECT p.id, p.name, p.brand, p.category, p.price_cents, p.weight_grams,
       p.stock, p.deleted,
       c.id AS code_id, c.kind AS code_kind, c.value AS code_value,
       c.assigned_date AS code_date, c.notes AS code_notes,
       c.deleted AS code_deleted
FROM product p
LEFT JOIN barcode c ON p.barcode_id = c.id AND c.deleted = 0
"#;

/// The barcode id to store in the link column: the held barcode's id when
/// it is persisted, NULL otherwise.
fn linked_barcode_id(product: &Product) -> Option<i64> {
    product
        .barcode
        .as_ref()
        .filter(|b| b.is_persisted())
        .map(|b| b.id)
}

/// Inserts a new product and writes the generated id back onto the entity.
///
/// ## Arguments
/// * `conn` - The caller's connection; the caller owns commit/rollback
/// * `product` - Product to insert; `product.id` is populated on success
pub async fn insert(conn: &mut SqliteConnection, product: &mut Product) -> DbResult<()> {
    debug!(name = %product.name, "Inserting product");

    let result = sqlx::query(
        r#"
        INSERT INTO product (name, brand, category, price_cents, weight_grams, stock, barcode_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(&product.name)
    .bind(&product.brand)
    .bind(product.category.map(|c| c.as_str()))
    .bind(product.price.cents())
    .bind(product.weight.grams())
    .bind(product.stock)
    .bind(linked_barcode_id(product))
    .execute(&mut *conn)
    .await?;

    product.id = result.last_insert_rowid();
    Ok(())
}

/// Overwrites all mutable fields of a product by id, including the
/// barcode link.
///
/// No existence check at this layer: updating an absent id silently
/// affects zero rows.
pub async fn update(conn: &mut SqliteConnection, product: &Product) -> DbResult<()> {
    debug!(id = product.id, "Updating product");

    sqlx::query(
        r#"
        UPDATE product
        SET name = ?1, brand = ?2, category = ?3, price_cents = ?4,
            weight_grams = ?5, stock = ?6, barcode_id = ?7
        WHERE id = ?8
        "#,
    )
    .bind(&product.name)
    .bind(&product.brand)
    .bind(product.category.map(|c| c.as_str()))
    .bind(product.price.cents())
    .bind(product.weight.grams())
    .bind(product.stock)
    .bind(linked_barcode_id(product))
    .bind(product.id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Updates only the barcode link column.
///
/// Stores the product's currently-held barcode reference, or clears the
/// link when the product holds none. Narrower than [`update`]: no other
/// column is touched.
pub async fn assign_barcode(conn: &mut SqliteConnection, product: &Product) -> DbResult<()> {
    debug!(id = product.id, "Assigning barcode to product");

    sqlx::query("UPDATE product SET barcode_id = ?1 WHERE id = ?2")
        .bind(linked_barcode_id(product))
        .bind(product.id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Flags a product as deleted, only where it is currently active.
///
/// ## Returns
/// `true` if a row changed; `false` makes a repeat call a no-op.
pub async fn soft_delete(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    debug!(id, "Soft-deleting product");

    let result = sqlx::query("UPDATE product SET deleted = 1 WHERE id = ?1 AND deleted = 0")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Clears the deleted flag, only where it is currently set.
pub async fn restore(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    debug!(id, "Restoring product");

    let result = sqlx::query("UPDATE product SET deleted = 0 WHERE id = ?1 AND deleted = 1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Gets the active product with this id, barcode populated.
///
/// ## Returns
/// * `Ok(Some(Product))` - Active product found
/// * `Ok(None)` - No such id, or the row is soft-deleted
pub async fn get_by_id(conn: &mut SqliteConnection, id: i64) -> DbResult<Option<Product>> {
    let row: Option<ProductRow> =
        sqlx::query_as(&format!("{SELECT_JOINED} WHERE p.id = ?1 AND p.deleted = 0"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(row.map(ProductRow::into_product))
}

/// Gets all active products, barcodes populated. Order is not guaranteed.
pub async fn get_all(conn: &mut SqliteConnection) -> DbResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("{SELECT_JOINED} WHERE p.deleted = 0"))
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(ProductRow::into_product).collect())
}

/// Gets the active product matching this name exactly.
pub async fn get_by_name(conn: &mut SqliteConnection, name: &str) -> DbResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!(
        "{SELECT_JOINED} WHERE p.name = ?1 AND p.deleted = 0"
    ))
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(ProductRow::into_product))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::repository::barcode;
    use chrono::NaiveDate;
    use stockroom_core::BarcodeKind;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milk() -> Product {
        let mut product = Product::new(
            "Whole Milk",
            Some("La Serenisima".to_string()),
            Money::from_cents(193750),
            Weight::from_grams(1000),
            45,
        );
        product.category = Some(ProductCategory::Food);
        product
    }

    #[tokio::test]
    async fn test_insert_and_get_without_barcode() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut product = milk();
        insert(&mut conn, &mut product).await.unwrap();
        assert!(product.id > 0);

        let found = get_by_id(&mut conn, product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Whole Milk");
        assert_eq!(found.brand.as_deref(), Some("La Serenisima"));
        assert_eq!(found.category, Some(ProductCategory::Food));
        assert_eq!(found.price, Money::from_cents(193750));
        assert_eq!(found.weight, Weight::from_grams(1000));
        assert_eq!(found.stock, 45);
        assert!(found.barcode.is_none());
    }

    #[tokio::test]
    async fn test_get_joins_active_barcode() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut code = Barcode::new(BarcodeKind::Ean13, "7791234567890", date(2025, 10, 1));
        barcode::insert(&mut conn, &mut code).await.unwrap();

        let mut product = milk();
        product.barcode = Some(code.clone());
        insert(&mut conn, &mut product).await.unwrap();

        let found = get_by_id(&mut conn, product.id).await.unwrap().unwrap();
        let linked = found.barcode.expect("barcode should be joined");
        assert_eq!(linked.id, code.id);
        assert_eq!(linked.value, "7791234567890");
        assert_eq!(linked.kind, Some(BarcodeKind::Ean13));
    }

    #[tokio::test]
    async fn test_soft_deleted_barcode_reads_as_absent() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut code = Barcode::new(BarcodeKind::Ean8, "77912345", date(2025, 10, 2));
        barcode::insert(&mut conn, &mut code).await.unwrap();

        let mut product = milk();
        product.barcode = Some(code.clone());
        insert(&mut conn, &mut product).await.unwrap();

        barcode::soft_delete(&mut conn, code.id).await.unwrap();

        // the product itself is intact, the dangling link just reads as none
        let found = get_by_id(&mut conn, product.id).await.unwrap().unwrap();
        assert!(found.barcode.is_none());
    }

    #[tokio::test]
    async fn test_unrecognized_category_reads_as_absent() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        sqlx::query(
            "INSERT INTO product (name, category, price_cents, stock) VALUES ('Mystery', 'GROCERIES', 100, 1)",
        )
        .execute(&mut *conn)
        .await
        .unwrap();

        let found = get_by_name(&mut conn, "Mystery").await.unwrap().unwrap();
        assert_eq!(found.category, None);
        assert_eq!(found.price, Money::from_cents(100));
    }

    #[tokio::test]
    async fn test_assign_barcode_updates_only_link() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut product = milk();
        insert(&mut conn, &mut product).await.unwrap();

        let mut code = Barcode::new(BarcodeKind::Upc, "042100005264", date(2025, 11, 5));
        barcode::insert(&mut conn, &mut code).await.unwrap();

        // stale fields on the entity must not leak into the row
        product.name = "RENAMED IN MEMORY ONLY".to_string();
        product.barcode = Some(code.clone());
        assign_barcode(&mut conn, &product).await.unwrap();

        let found = get_by_id(&mut conn, product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Whole Milk");
        assert_eq!(found.barcode.unwrap().id, code.id);

        // clearing works too
        product.barcode = None;
        assign_barcode(&mut conn, &product).await.unwrap();
        let found = get_by_id(&mut conn, product.id).await.unwrap().unwrap();
        assert!(found.barcode.is_none());
    }

    #[tokio::test]
    async fn test_soft_delete_and_restore_are_conditional() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut product = milk();
        insert(&mut conn, &mut product).await.unwrap();

        assert!(soft_delete(&mut conn, product.id).await.unwrap());
        assert!(!soft_delete(&mut conn, product.id).await.unwrap());
        assert!(get_by_id(&mut conn, product.id).await.unwrap().is_none());
        assert!(get_all(&mut conn).await.unwrap().is_empty());

        assert!(restore(&mut conn, product.id).await.unwrap());
        assert!(!restore(&mut conn, product.id).await.unwrap());
        assert_eq!(get_all(&mut conn).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_name_exact_match() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let mut product = milk();
        insert(&mut conn, &mut product).await.unwrap();

        assert!(get_by_name(&mut conn, "Whole Milk").await.unwrap().is_some());
        assert!(get_by_name(&mut conn, "Whole").await.unwrap().is_none());
        assert!(get_by_name(&mut conn, "whole milk").await.unwrap().is_none());
    }
}
