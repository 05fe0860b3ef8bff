//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FirmdirError`] at the boundary; storage adapters box their error
//! behind the [`FirmdirError::Storage`] variant.

/// Top-level error for all domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum FirmdirError {
    /// A request failed domain invariants before reaching the store.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed unexpectedly.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on incoming data.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("company name cannot be empty")]
    EmptyName,

    #[error("company description cannot be empty")]
    EmptyDescription,

    #[error("CEO name cannot be empty")]
    EmptyCeo,

    #[error("logo content type cannot be empty")]
    EmptyLogoType,

    #[error("multipart field 'file' is missing")]
    MissingLogoFile,

    #[error("invalid company id: {0}")]
    InvalidId(String),

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u32),
}

/// A lookup that matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind, e.g. `"Company"`.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}
