//! Shared application state for axum handlers.

use std::sync::Arc;

use firmdir_app::ports::CompanyRepository;
use firmdir_app::services::company_service::CompanyService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Company CRUD and query service.
    pub company_service: Arc<CompanyService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            company_service: Arc::clone(&self.company_service),
        }
    }
}

impl<R> AppState<R>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(company_service: CompanyService<R>) -> Self {
        Self {
            company_service: Arc::new(company_service),
        }
    }
}
