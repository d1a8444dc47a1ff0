//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the domain types and
//! business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    Console Menu (apps/console)                │  │
//! │  │    Product screens ──► Barcode screens ──► Input prompts      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               stockroom-db (Persistence Layer)                │  │
//! │  │    Services (validation + transactions) ──► Repositories      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ stockroom-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                │  │
//! │  │   │   types   │  │   money   │  │ validation │                │  │
//! │  │   │  Product  │  │   Money   │  │   rules    │                │  │
//! │  │   │  Barcode  │  │  Weight   │  │   checks   │                │  │
//! │  │   └───────────┘  └───────────┘  └────────────┘                │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Barcode, BarcodeKind, ProductCategory)
//! - [`money`] - Fixed-point Money and Weight types (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Fixed-Point Values**: Prices are cents (i64), weights are grams (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Money` instead of
// `use stockroom_core::money::Money`

pub use error::ValidationError;
pub use money::{Money, Weight};
pub use types::{Barcode, BarcodeKind, Product, ProductCategory};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length of a product brand, in characters.
pub const MAX_BRAND_LEN: usize = 80;

/// Maximum length of a barcode value, in characters.
///
/// Covers every supported symbology (EAN-13, EAN-8, UPC) with room for
/// internal formats.
pub const MAX_VALUE_LEN: usize = 20;

/// Maximum length of the free-text notes attached to a barcode.
pub const MAX_NOTES_LEN: usize = 255;

/// Highest representable price: 99,999,999.99 in cents.
///
/// Mirrors the storage contract of a DECIMAL(10,2) column.
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// Highest representable weight: 9,999,999.999 kg in grams.
///
/// Mirrors the storage contract of a DECIMAL(10,3) column.
pub const MAX_WEIGHT_GRAMS: i64 = 9_999_999_999;
