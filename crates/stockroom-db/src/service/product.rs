//! # Product Service
//!
//! Validation and transaction management for product operations,
//! including the compound "create product with a new barcode" unit.
//!
//! ## The Compound Insert
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              insert_with_barcode(product, barcode)                  │
//! │                                                                     │
//! │  validate product ── validate barcode      (no connection yet)      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BEGIN                                                              │
//! │    1. value already active?  → DuplicateValue                       │
//! │    2. INSERT barcode         → barcode gets its id                  │
//! │    3. link barcode to product                                       │
//! │    4. INSERT product         → product gets its id                  │
//! │  COMMIT                                                             │
//! │                                                                     │
//! │  Any failure anywhere rolls the whole unit back:                    │
//! │  either both records exist and are linked, or neither exists.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository;
use crate::service::finish;
use stockroom_core::validation::{validate_barcode, validate_product};
use stockroom_core::{Barcode, Product};

/// Service for product operations.
///
/// Every write runs in its own transaction; reads use a plain pool
/// checkout. Cloning is cheap (shared pool).
#[derive(Debug, Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    /// Creates a new ProductService.
    pub fn new(pool: SqlitePool) -> Self {
        ProductService { pool }
    }

    /// Inserts a new product.
    ///
    /// The generated id is written back onto `product`.
    ///
    /// ## Errors
    /// * [`DbError::Validation`] - A business rule failed (nothing written)
    pub async fn insert(&self, product: &mut Product) -> DbResult<()> {
        validate_product(product)?;

        let mut tx = self.pool.begin().await?;
        let result = repository::product::insert(&mut tx, product).await;
        let outcome = finish(tx, result).await;

        if outcome.is_ok() {
            info!(id = product.id, name = %product.name, "Product created");
        }
        outcome
    }

    /// Updates an existing product.
    ///
    /// No existence pre-check: updating an id that does not exist silently
    /// affects zero rows.
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        validate_product(product)?;

        let mut tx = self.pool.begin().await?;
        let result = repository::product::update(&mut tx, product).await;
        finish(tx, result).await
    }

    /// Stores the product's currently-held barcode reference, or clears it.
    ///
    /// Narrow update: only the link column changes.
    pub async fn assign_barcode(&self, product: &Product) -> DbResult<()> {
        validate_product(product)?;

        let mut tx = self.pool.begin().await?;
        let result = repository::product::assign_barcode(&mut tx, product).await;
        finish(tx, result).await
    }

    /// Creates a product together with a brand-new barcode, atomically.
    ///
    /// Validates both entities, checks the barcode value is not held by an
    /// active barcode, inserts the barcode, links it to the product and
    /// inserts the product - all in a single transaction. On success the
    /// product carries the persisted barcode and both ids are populated;
    /// on any failure neither record is persisted.
    ///
    /// ## Errors
    /// * [`DbError::Validation`] - Either entity failed a business rule
    /// * [`DbError::DuplicateValue`] - The barcode value is already in use
    pub async fn insert_with_barcode(
        &self,
        product: &mut Product,
        mut barcode: Barcode,
    ) -> DbResult<()> {
        validate_product(product)?;
        validate_barcode(&barcode)?;

        let mut tx = self.pool.begin().await?;
        let result: DbResult<()> = async {
            if repository::barcode::get_by_value(&mut tx, &barcode.value)
                .await?
                .is_some()
            {
                return Err(DbError::duplicate(&barcode.value));
            }

            repository::barcode::insert(&mut tx, &mut barcode).await?;
            product.barcode = Some(barcode);
            repository::product::insert(&mut tx, &mut *product).await
        }
        .await;
        let outcome = finish(tx, result).await;

        if outcome.is_ok() {
            info!(
                id = product.id,
                name = %product.name,
                barcode_id = product.barcode.as_ref().map(|b| b.id).unwrap_or(0),
                "Product created with new barcode"
            );
        }
        outcome
    }

    /// Soft-deletes a product.
    ///
    /// ## Returns
    /// `true` if a row was deactivated. An unknown or already-deleted id
    /// is a no-op (`false`), not an error.
    pub async fn soft_delete(&self, id: i64) -> DbResult<bool> {
        let mut tx = self.pool.begin().await?;
        let result = repository::product::soft_delete(&mut tx, id).await;
        let deleted = finish(tx, result).await?;

        if deleted {
            info!(id, "Product soft-deleted");
        } else {
            debug!(id, "Soft-delete was a no-op");
        }
        Ok(deleted)
    }

    /// Restores a soft-deleted product.
    ///
    /// ## Errors
    /// * [`DbError::NotDeleted`] - An active product still answers to this
    ///   id, so there is nothing to recover
    pub async fn restore(&self, id: i64) -> DbResult<bool> {
        let mut tx = self.pool.begin().await?;
        let result: DbResult<bool> = async {
            if repository::product::get_by_id(&mut tx, id).await?.is_some() {
                return Err(DbError::not_deleted("product", id));
            }
            repository::product::restore(&mut tx, id).await
        }
        .await;
        let restored = finish(tx, result).await?;

        if restored {
            info!(id, "Product restored");
        }
        Ok(restored)
    }

    /// Gets the active product with this id, barcode populated.
    /// Pass-through read.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let mut conn = self.pool.acquire().await?;
        repository::product::get_by_id(&mut conn, id).await
    }

    /// Gets all active products, barcodes populated. Pass-through read.
    pub async fn get_all(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.pool.acquire().await?;
        repository::product::get_all(&mut conn).await
    }

    /// Gets the active product matching this name exactly.
    /// Pass-through read.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let mut conn = self.pool.acquire().await?;
        repository::product::get_by_name(&mut conn, name).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use stockroom_core::{
        BarcodeKind, Money, ProductCategory, ValidationError, Weight, MAX_PRICE_CENTS,
    };

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bread() -> Product {
        let mut product = Product::new(
            "Sliced Bread",
            Some("Bimbo".to_string()),
            Money::from_cents(151975),
            Weight::from_grams(500),
            32,
        );
        product.category = Some(ProductCategory::Food);
        product
    }

    fn label(value: &str) -> Barcode {
        Barcode::new(BarcodeKind::Ean8, value, date(2025, 10, 2))
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips() {
        let db = test_db().await;
        let service = db.products();

        let mut product = bread();
        service.insert(&mut product).await.unwrap();
        assert!(product.id > 0);

        let found = service.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found, product);
        assert_eq!(found.weight, product.weight);
        assert!(found.barcode.is_none());
        assert!(!found.deleted);
    }

    #[tokio::test]
    async fn test_price_boundary() {
        let db = test_db().await;
        let service = db.products();

        // 99,999,999.99 is accepted
        let mut at_limit = bread();
        at_limit.price = Money::from_cents(MAX_PRICE_CENTS);
        service.insert(&mut at_limit).await.unwrap();

        // 100,000,000.00 is rejected
        let mut past_limit = bread();
        past_limit.name = "Gold Bread".to_string();
        past_limit.price = Money::from_cents(MAX_PRICE_CENTS + 1);
        assert!(matches!(
            service.insert(&mut past_limit).await,
            Err(DbError::Validation(ValidationError::TooLarge { .. }))
        ));

        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_with_barcode_links_both() {
        let db = test_db().await;
        let service = db.products();

        let mut product = bread();
        service
            .insert_with_barcode(&mut product, label("77912345"))
            .await
            .unwrap();

        assert!(product.id > 0);
        let linked = product.barcode.as_ref().expect("barcode should be set");
        assert!(linked.id > 0);

        let found = service.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.barcode.as_ref().unwrap().value, "77912345");

        // the barcode is a real row of its own
        assert_eq!(
            db.barcodes()
                .get_by_value("77912345")
                .await
                .unwrap()
                .unwrap()
                .id,
            linked.id
        );
    }

    #[tokio::test]
    async fn test_insert_with_barcode_is_atomic_on_duplicate() {
        let db = test_db().await;
        let service = db.products();

        // occupy the value
        let mut occupant = label("11112222");
        db.barcodes().insert(&mut occupant).await.unwrap();

        let products_before = service.get_all().await.unwrap();
        let barcodes_before = db.barcodes().get_all().await.unwrap();

        let mut product = bread();
        let err = service
            .insert_with_barcode(&mut product, label("11112222"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::DuplicateValue { .. }));

        // neither a product nor a second barcode was persisted
        assert_eq!(service.get_all().await.unwrap(), products_before);
        assert_eq!(
            db.barcodes().get_all().await.unwrap().len(),
            barcodes_before.len()
        );
        assert_eq!(product.id, 0);
    }

    #[tokio::test]
    async fn test_insert_with_barcode_validates_barcode_first() {
        let db = test_db().await;
        let service = db.products();

        let mut incomplete = label("33334444");
        incomplete.assigned_date = None;

        let mut product = bread();
        assert!(matches!(
            service
                .insert_with_barcode(&mut product, incomplete)
                .await,
            Err(DbError::Validation(_))
        ));
        assert!(service.get_all().await.unwrap().is_empty());
        assert!(db.barcodes().get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_silent_zero_row_update() {
        let db = test_db().await;
        let service = db.products();

        let mut product = bread();
        service.insert(&mut product).await.unwrap();

        product.stock = 31;
        product.category = Some(ProductCategory::Beverages);
        service.update(&product).await.unwrap();

        let found = service.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.stock, 31);
        assert_eq!(found.category, Some(ProductCategory::Beverages));

        // unknown id: zero rows affected, no error
        let mut ghost = bread();
        ghost.id = 999;
        ghost.name = "Ghost".to_string();
        service.update(&ghost).await.unwrap();
        assert!(service.get_by_name("Ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_assign_barcode_round_trip() {
        let db = test_db().await;
        let service = db.products();

        let mut product = bread();
        service.insert(&mut product).await.unwrap();

        let mut code = label("55556666");
        db.barcodes().insert(&mut code).await.unwrap();

        product.barcode = Some(code.clone());
        service.assign_barcode(&product).await.unwrap();

        let found = service.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.barcode.unwrap().id, code.id);
    }

    #[tokio::test]
    async fn test_soft_delete_and_restore_lifecycle() {
        let db = test_db().await;
        let service = db.products();

        let mut product = bread();
        service.insert(&mut product).await.unwrap();

        // active product refuses recovery
        assert!(matches!(
            service.restore(product.id).await,
            Err(DbError::NotDeleted { .. })
        ));

        assert!(service.soft_delete(product.id).await.unwrap());
        assert!(service.get_by_id(product.id).await.unwrap().is_none());
        assert!(!service.soft_delete(product.id).await.unwrap());

        assert!(service.restore(product.id).await.unwrap());
        let found = service.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Sliced Bread");
    }

    #[tokio::test]
    async fn test_category_survives_unrecognized_string() {
        let db = test_db().await;
        let service = db.products();

        let mut product = bread();
        service.insert(&mut product).await.unwrap();

        // someone writes a category this build does not know
        sqlx::query("UPDATE product SET category = 'GROCERIES' WHERE id = ?1")
            .bind(product.id)
            .execute(db.pool())
            .await
            .unwrap();

        // reading it back succeeds, with the category simply absent
        let found = service.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.category, None);
        assert_eq!(found.name, "Sliced Bread");
    }
}
