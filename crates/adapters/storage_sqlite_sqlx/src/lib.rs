//! # firmdir-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `CompanyRepository` port defined in
//!   `firmdir-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `firmdir-app` (for the port trait) and `firmdir-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

mod company_repo;
mod error;
pub mod pool;

pub use company_repo::SqliteCompanyRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
