//! # stockroom-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `stockroom-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Create the `products` table on startup (embedded sqlx migration)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `stockroom-app` (for port traits) and `stockroom-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod product_repo;

pub use error::StorageError;
pub use pool::Database;
pub use product_repo::SqliteProductRepository;
