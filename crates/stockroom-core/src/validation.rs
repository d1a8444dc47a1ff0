//! # Validation Module
//!
//! Business rule validation for Stockroom entities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Console input prompts                                     │
//! │  ├── Type checks (number parses, date parses)                       │
//! │  └── Immediate re-prompting                                         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Services (stockroom-db)                                   │
//! │  └── THIS MODULE: business rule validation, before any              │
//! │      connection is opened                                           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  ├── UNIQUE constraints (barcode value, barcode_id link)            │
//! │  └── Foreign key constraints                                        │
//! │                                                                     │
//! │  Defense in depth: each layer catches different mistakes            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::validate_product_name;
//!
//! validate_product_name("Whole Milk").unwrap();
//! assert!(validate_product_name("").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Barcode, Product};
use crate::{MAX_BRAND_LEN, MAX_NAME_LEN, MAX_NOTES_LEN, MAX_PRICE_CENTS, MAX_VALUE_LEN,
    MAX_WEIGHT_GRAMS};
use crate::money::{Money, Weight};

// =============================================================================
// Field Validators - Product
// =============================================================================

/// Validates a product name: required, at most [`MAX_NAME_LEN`] characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validates an optional brand: at most [`MAX_BRAND_LEN`] characters.
pub fn validate_brand(brand: Option<&str>) -> ValidationResult<()> {
    if let Some(brand) = brand {
        if brand.chars().count() > MAX_BRAND_LEN {
            return Err(ValidationError::TooLong {
                field: "brand",
                max: MAX_BRAND_LEN,
            });
        }
    }
    Ok(())
}

/// Validates a price: non-negative, at most 99,999,999.99.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative { field: "price" });
    }
    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::TooLarge {
            field: "price",
            max: Money::from_cents(MAX_PRICE_CENTS).to_string(),
        });
    }
    Ok(())
}

/// Validates a weight: non-negative, at most 9,999,999.999.
pub fn validate_weight(weight: Weight) -> ValidationResult<()> {
    if weight.is_negative() {
        return Err(ValidationError::Negative { field: "weight" });
    }
    if weight.grams() > MAX_WEIGHT_GRAMS {
        return Err(ValidationError::TooLarge {
            field: "weight",
            max: Weight::from_grams(MAX_WEIGHT_GRAMS).to_string(),
        });
    }
    Ok(())
}

/// Validates a stock count: non-negative.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative { field: "stock" });
    }
    Ok(())
}

// =============================================================================
// Field Validators - Barcode
// =============================================================================

/// Validates a barcode value: required, non-blank, at most
/// [`MAX_VALUE_LEN`] characters.
pub fn validate_barcode_value(value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field: "value" });
    }
    if value.chars().count() > MAX_VALUE_LEN {
        return Err(ValidationError::TooLong {
            field: "value",
            max: MAX_VALUE_LEN,
        });
    }
    Ok(())
}

/// Validates optional notes: at most [`MAX_NOTES_LEN`] characters.
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<()> {
    if let Some(notes) = notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(ValidationError::TooLong {
                field: "notes",
                max: MAX_NOTES_LEN,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every business rule on a product before it is written.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_brand(product.brand.as_deref())?;
    validate_price(product.price)?;
    validate_weight(product.weight)?;
    validate_stock(product.stock)?;
    Ok(())
}

/// Validates every business rule on a barcode before it is written.
///
/// The struct allows `kind` and `assigned_date` to be absent while the
/// entity is being assembled; both are required here.
pub fn validate_barcode(barcode: &Barcode) -> ValidationResult<()> {
    if barcode.kind.is_none() {
        return Err(ValidationError::Required { field: "kind" });
    }
    validate_barcode_value(&barcode.value)?;
    validate_notes(barcode.notes.as_deref())?;
    if barcode.assigned_date.is_none() {
        return Err(ValidationError::Required {
            field: "assigned date",
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
