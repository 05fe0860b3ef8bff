//! Storage port — the repository trait for company persistence.

use std::future::Future;

use firmdir_domain::company::{Company, Logo};
use firmdir_domain::error::FirmdirError;
use firmdir_domain::id::CompanyId;
use firmdir_domain::page::Page;
use firmdir_domain::sort::SortField;

/// CRUD and query operations on the company store.
///
/// Methods that mutate an existing row (`update`, `delete`, `set_logo`)
/// report whether a row was actually touched, so the caller can translate
/// a miss into a not-found error. `update` replaces only the
/// request-carried fields; logo columns are written exclusively through
/// [`set_logo`](CompanyRepository::set_logo).
pub trait CompanyRepository {
    /// Insert a new company.
    fn create(&self, company: Company) -> impl Future<Output = Result<Company, FirmdirError>> + Send;

    /// Fetch a company by id, including any logo payload.
    fn get_by_id(
        &self,
        id: CompanyId,
    ) -> impl Future<Output = Result<Option<Company>, FirmdirError>> + Send;

    /// Fetch every company in natural store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send;

    /// Exact-match lookup by name. On duplicate names the first stored
    /// match wins.
    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Company>, FirmdirError>> + Send;

    /// Substring search over name and description.
    fn search(&self, query: String)
    -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send;

    /// Every company founded in exactly the given year.
    fn find_by_founded_year(
        &self,
        year: i32,
    ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send;

    /// All companies ordered ascending by the given field.
    fn get_sorted(
        &self,
        field: SortField,
    ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send;

    /// One zero-indexed page of companies plus the overall total.
    /// `page_size` has already been validated to be at least 1.
    fn get_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Page<Company>, FirmdirError>> + Send;

    /// Replace name, description, CEO, and founded year of the row with
    /// `company.id`. Returns `false` when no such row exists.
    fn update(&self, company: Company) -> impl Future<Output = Result<bool, FirmdirError>> + Send;

    /// Remove a company. Returns `false` when no such row exists.
    fn delete(&self, id: CompanyId) -> impl Future<Output = Result<bool, FirmdirError>> + Send;

    /// Attach a logo to an existing company. Returns `false` when no such
    /// row exists.
    fn set_logo(
        &self,
        id: CompanyId,
        logo: Logo,
    ) -> impl Future<Output = Result<bool, FirmdirError>> + Send;
}
