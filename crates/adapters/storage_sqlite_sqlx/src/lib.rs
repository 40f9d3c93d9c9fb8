//! # plantstore-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `plantstore-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the schema on startup (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `plantstore-app` (for port traits) and `plantstore-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod plant_repo;
mod pool;

pub use error::StorageError;
pub use plant_repo::SqlitePlantRepository;
pub use pool::{Config, Database};
