//! # Database Error Types
//!
//! Error types for storage and service operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← Adds the failure kind the caller           │
//! │       │                  actually dispatches on                     │
//! │       ▼                                                             │
//! │  Console menu prints the message; the loop continues                │
//! │                                                                     │
//! │  "Not found" is NOT an error: reads return Ok(None).                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::ValidationError;
use thiserror::Error;

/// Storage and service operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A business rule was violated.
    ///
    /// Raised by services before any connection is opened, so a rejected
    /// entity never costs a transaction.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// An active barcode already holds this value.
    ///
    /// ## When This Occurs
    /// - Inserting a barcode whose value is already in use
    /// - Updating a barcode to a value another active barcode holds
    #[error("a barcode with value '{value}' already exists")]
    DuplicateValue { value: String },

    /// Recovery was requested for a record that is not soft-deleted.
    #[error("{entity} {id} is not deleted")]
    NotDeleted { entity: &'static str, id: i64 },

    /// Opening the database or building the pool failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A migration could not be applied.
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An underlying statement or connectivity error, wrapping the cause.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    /// A storage failure occurred mid-transaction and the rollback attempt
    /// itself failed.
    ///
    /// Surfaced distinctly because the transaction's end state is uncertain:
    /// the caller gets both the original cause and the rollback error.
    #[error("rollback failed after '{cause}': {rollback}")]
    RollbackFailed {
        cause: Box<DbError>,
        #[source]
        rollback: sqlx::Error,
    },
}

impl DbError {
    /// Creates a DuplicateValue error.
    pub fn duplicate(value: impl Into<String>) -> Self {
        DbError::DuplicateValue {
            value: value.into(),
        }
    }

    /// Creates a NotDeleted error.
    pub fn not_deleted(entity: &'static str, id: i64) -> Self {
        DbError::NotDeleted { entity, id }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::duplicate("7791234567890");
        assert_eq!(
            err.to_string(),
            "a barcode with value '7791234567890' already exists"
        );

        let err = DbError::not_deleted("product", 3);
        assert_eq!(err.to_string(), "product 3 is not deleted");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: DbError = ValidationError::Required { field: "name" }.into();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(err.to_string(), "invalid input: name is required");
    }
}
