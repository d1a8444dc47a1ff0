//! # Services
//!
//! Business validation and transaction orchestration over the repositories.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Anatomy of a Write Operation                       │
//! │                                                                     │
//! │  validate(entity)          ← rejects before any connection opens    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  pool.begin()              ← one transaction per operation          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  repository calls          ← all on the transaction's connection    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  commit  ───── success                                              │
//! │  rollback ──── any failure (if the rollback itself fails, both      │
//! │                errors surface together as RollbackFailed)           │
//! │                                                                     │
//! │  The checkout is returned to the pool on every exit path.           │
//! │  Reads skip the transaction and use a plain checkout.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calls run to completion on the calling task; there is no background
//! work and no in-process locking. Races between the value-uniqueness
//! check and a concurrent insert are caught by the UNIQUE constraint on
//! `barcode.value`, which surfaces as a storage failure.

use sqlx::{Sqlite, Transaction};

use crate::error::{DbError, DbResult};

pub mod barcode;
pub mod product;

pub use barcode::BarcodeService;
pub use product::ProductService;

/// Ends a transaction according to the outcome of the work done inside it.
///
/// Commit on `Ok`, roll back on `Err`. A failed rollback is promoted to
/// [`DbError::RollbackFailed`] so the caller learns both what went wrong
/// and that the transaction's end state is uncertain.
pub(crate) async fn finish<T>(tx: Transaction<'_, Sqlite>, result: DbResult<T>) -> DbResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(cause) => match tx.rollback().await {
            Ok(()) => Err(cause),
            Err(rollback) => Err(DbError::RollbackFailed {
                cause: Box::new(cause),
                rollback,
            }),
        },
    }
}
