//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides persistence for the Stockroom inventory manager.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                            │
//! │                                                                     │
//! │  Console menu action ("add product with barcode")                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  stockroom-db (THIS CRATE)                    │  │
//! │  │                                                               │  │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────┐       │  │
//! │  │   │  Services  │   │ Repositories │   │  Migrations  │       │  │
//! │  │   │(service/*) │──►│(repository/*)│   │  (embedded)  │       │  │
//! │  │   │            │   │              │   │              │       │  │
//! │  │   │ validation │   │ row ↔ entity │   │ 001_init.sql │       │  │
//! │  │   │ begin/     │   │ translation  │   │ ...          │       │  │
//! │  │   │ commit/    │   │              │   │              │       │  │
//! │  │   │ rollback   │   │              │   │              │       │  │
//! │  │   └─────┬──────┘   └──────┬───────┘   └──────────────┘       │  │
//! │  │         │ owns tx         │ uses caller's conn               │  │
//! │  │         ▼                 ▼                                  │  │
//! │  │   ┌───────────────────────────────────────┐                  │  │
//! │  │   │         Database (pool.rs)            │                  │  │
//! │  │   └───────────────────────────────────────┘                  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (single file, WAL mode)                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Row translation per entity (barcode, product)
//! - [`service`] - Validation + transaction orchestration per entity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/stockroom.db")).await?;
//!
//! let mut product = Product::new("Whole Milk", None, price, weight, 45);
//! db.products().insert(&mut product).await?;
//! assert!(product.id > 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Service re-exports for convenience
pub use service::barcode::BarcodeService;
pub use service::product::ProductService;
