//! # Error Types
//!
//! Validation error type for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockroom-core errors (this file)                                  │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  stockroom-db errors (separate crate)                               │
//! │  └── DbError          - Storage, uniqueness, transaction failures   │
//! │                         (wraps ValidationError via #[from])         │
//! │                                                                     │
//! │  Flow: ValidationError → DbError → caller (console menu)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limit)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when an entity doesn't meet business rules.
/// Raised by the service layer before any connection is opened, so a
/// rejected entity never costs a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// Value exceeds its upper bound.
    #[error("{field} cannot exceed {max}")]
    TooLarge { field: &'static str, max: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "brand",
            max: 80,
        };
        assert_eq!(err.to_string(), "brand must be at most 80 characters");

        let err = ValidationError::TooLarge {
            field: "price",
            max: "99999999.99".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot exceed 99999999.99");
    }
}
