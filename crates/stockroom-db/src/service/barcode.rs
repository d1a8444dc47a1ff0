//! # Barcode Service
//!
//! Validation and transaction management for barcode operations.
//!
//! ## Uniqueness Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            Value Uniqueness Among Active Barcodes                   │
//! │                                                                     │
//! │  insert("779...")                                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  get_by_value("779...") inside the same transaction                 │
//! │       │                                                             │
//! │       ├── active hit → DuplicateValue, nothing written              │
//! │       │                                                             │
//! │       └── none → insert proceeds                                    │
//! │                                                                     │
//! │  A soft-deleted barcode does NOT block its value from reuse at      │
//! │  this layer (get_by_value filters deleted rows); the UNIQUE         │
//! │  column constraint still guards the physical table.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository;
use crate::service::finish;
use stockroom_core::validation::validate_barcode;
use stockroom_core::Barcode;

/// Service for barcode operations.
///
/// Every write runs in its own transaction; reads use a plain pool
/// checkout. Cloning is cheap (shared pool).
#[derive(Debug, Clone)]
pub struct BarcodeService {
    pool: SqlitePool,
}

impl BarcodeService {
    /// Creates a new BarcodeService.
    pub fn new(pool: SqlitePool) -> Self {
        BarcodeService { pool }
    }

    /// Inserts a new barcode.
    ///
    /// Validates the entity, rejects the value if an active barcode
    /// already holds it, then delegates to the repository. The generated
    /// id is written back onto `barcode`.
    ///
    /// ## Errors
    /// * [`DbError::Validation`] - A business rule failed (nothing written)
    /// * [`DbError::DuplicateValue`] - The value is already in use
    pub async fn insert(&self, barcode: &mut Barcode) -> DbResult<()> {
        validate_barcode(barcode)?;

        let mut tx = self.pool.begin().await?;
        let result: DbResult<()> = async {
            if repository::barcode::get_by_value(&mut tx, &barcode.value)
                .await?
                .is_some()
            {
                return Err(DbError::duplicate(&barcode.value));
            }
            repository::barcode::insert(&mut tx, &mut *barcode).await
        }
        .await;
        let outcome = finish(tx, result).await;

        if outcome.is_ok() {
            info!(id = barcode.id, value = %barcode.value, "Barcode created");
        }
        outcome
    }

    /// Updates an existing barcode.
    ///
    /// When the value is changing, rejects the new value if another active
    /// barcode (different id) already holds it. Updating an id that does
    /// not exist silently affects zero rows.
    pub async fn update(&self, barcode: &Barcode) -> DbResult<()> {
        validate_barcode(barcode)?;

        let mut tx = self.pool.begin().await?;
        let result: DbResult<()> = async {
            let current = repository::barcode::get_by_id(&mut tx, barcode.id).await?;
            if let Some(current) = current {
                if current.value != barcode.value {
                    if let Some(holder) =
                        repository::barcode::get_by_value(&mut tx, &barcode.value).await?
                    {
                        if holder.id != barcode.id {
                            return Err(DbError::duplicate(&barcode.value));
                        }
                    }
                }
            }
            repository::barcode::update(&mut tx, barcode).await
        }
        .await;
        finish(tx, result).await
    }

    /// Soft-deletes a barcode.
    ///
    /// ## Returns
    /// `true` if a row was deactivated. An unknown or already-deleted id
    /// is a no-op (`false`), not an error.
    pub async fn soft_delete(&self, id: i64) -> DbResult<bool> {
        let mut tx = self.pool.begin().await?;
        let result = repository::barcode::soft_delete(&mut tx, id).await;
        let deleted = finish(tx, result).await?;

        if deleted {
            info!(id, "Barcode soft-deleted");
        } else {
            debug!(id, "Soft-delete was a no-op");
        }
        Ok(deleted)
    }

    /// Restores a soft-deleted barcode.
    ///
    /// ## Errors
    /// * [`DbError::NotDeleted`] - An active barcode still answers to this
    ///   id, so there is nothing to recover
    pub async fn restore(&self, id: i64) -> DbResult<bool> {
        let mut tx = self.pool.begin().await?;
        let result: DbResult<bool> = async {
            if repository::barcode::get_by_id(&mut tx, id).await?.is_some() {
                return Err(DbError::not_deleted("barcode", id));
            }
            repository::barcode::restore(&mut tx, id).await
        }
        .await;
        let restored = finish(tx, result).await?;

        if restored {
            info!(id, "Barcode restored");
        }
        Ok(restored)
    }

    /// Gets the active barcode with this id. Pass-through read.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Barcode>> {
        let mut conn = self.pool.acquire().await?;
        repository::barcode::get_by_id(&mut conn, id).await
    }

    /// Gets all active barcodes. Pass-through read.
    pub async fn get_all(&self) -> DbResult<Vec<Barcode>> {
        let mut conn = self.pool.acquire().await?;
        repository::barcode::get_all(&mut conn).await
    }

    /// Gets the active barcode matching this value exactly. Pass-through read.
    pub async fn get_by_value(&self, value: &str) -> DbResult<Option<Barcode>> {
        let mut conn = self.pool.acquire().await?;
        repository::barcode::get_by_value(&mut conn, value).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
