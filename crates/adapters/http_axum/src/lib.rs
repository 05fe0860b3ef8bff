//! # firmdir-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **company REST API** (`/companies`, `/companies/{id}`,
//!   search, filter, sort, pagination, logo upload/download)
//! - Enforce role-based access in front of each handler via guard
//!   extractors ([`auth::RequireUser`], [`auth::RequireAdmin`])
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `firmdir-app` (for the port trait and service) and
//! `firmdir-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
