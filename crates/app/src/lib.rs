//! # firmdir-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`CompanyRepository`** port that storage adapters implement
//! - Provide **`CompanyService`**, the use-case layer for every company
//!   operation: list, lookups, search, filter, sort, pagination, CRUD, and
//!   logo attachment
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `firmdir-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
