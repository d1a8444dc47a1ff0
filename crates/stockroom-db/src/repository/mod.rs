//! # Repositories
//!
//! Row translation for each entity: SQL in, domain types out. No business
//! validation happens here - that belongs to [`crate::service`].
//!
//! ## Connection Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Who Owns the Transaction?                           │
//! │                                                                     │
//! │  Every repository function takes `&mut SqliteConnection`.           │
//! │  The CALLER owns that connection's lifecycle:                       │
//! │                                                                     │
//! │    Service (writes)                Service (reads)                  │
//! │    ───────────────                 ───────────────                  │
//! │    pool.begin()                    pool.acquire()                   │
//! │       │                               │                             │
//! │       ▼                               ▼                             │
//! │    repository calls                repository calls                 │
//! │       │                               │                             │
//! │       ▼                               ▼                             │
//! │    commit / rollback               checkout returned                │
//! │                                                                     │
//! │  Repositories NEVER begin, commit, roll back or close anything.     │
//! │  Passing a transaction's connection makes a call participate in     │
//! │  that transaction; passing a plain checkout makes it autonomous.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod barcode;
pub mod product;
