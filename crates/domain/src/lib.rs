//! # firmdir-domain
//!
//! Pure domain model for the firmdir company directory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **Company** entity and its optional **Logo** attachment
//! - Define the **`CompanyView`** projection exposed to external clients
//! - Define **`SortField`** (the closed set of sortable fields) and
//!   **`Page`** (a bounded result slice with totals)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod company;
pub mod error;
pub mod id;
pub mod page;
pub mod sort;
