//! `SQLite` implementation of [`CompanyRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use firmdir_app::ports::CompanyRepository;
use firmdir_domain::company::{Company, Logo};
use firmdir_domain::error::FirmdirError;
use firmdir_domain::id::CompanyId;
use firmdir_domain::page::Page;
use firmdir_domain::sort::SortField;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Company`].
struct Wrapper(Company);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Company> {
        value.map(|w| w.0)
    }

    fn list(values: Vec<Self>) -> Vec<Company> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: String = row.try_get("description")?;
        let ceo: String = row.try_get("ceo")?;
        let founded_year: Option<i32> = row.try_get("founded_year")?;
        let logo_data: Option<Vec<u8>> = row.try_get("logo_data")?;
        let logo_type: Option<String> = row.try_get("logo_type")?;

        let id = CompanyId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        // Both columns are written together; a row with only one of them
        // is treated as having no logo.
        let logo = match (logo_data, logo_type) {
            (Some(data), Some(content_type)) => Some(Logo { data, content_type }),
            _ => None,
        };

        Ok(Self(Company {
            id,
            name,
            description,
            ceo,
            founded_year,
            logo,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO companies (id, name, description, ceo, founded_year) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM companies WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM companies";
const SELECT_BY_NAME: &str = "SELECT * FROM companies WHERE name = ? LIMIT 1";
const SEARCH: &str = "SELECT * FROM companies WHERE name LIKE ? OR description LIKE ?";
const SELECT_BY_YEAR: &str = "SELECT * FROM companies WHERE founded_year = ?";
const SELECT_PAGE: &str = "SELECT * FROM companies LIMIT ? OFFSET ?";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM companies";
const UPDATE: &str =
    "UPDATE companies SET name = ?, description = ?, ceo = ?, founded_year = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM companies WHERE id = ?";
const SET_LOGO: &str = "UPDATE companies SET logo_data = ?, logo_type = ? WHERE id = ?";

/// The ORDER BY column for a sort field. Only values of the closed
/// [`SortField`] enum ever reach the query text.
fn sorted_query(field: SortField) -> &'static str {
    match field {
        SortField::Name => "SELECT * FROM companies ORDER BY name ASC",
        SortField::Description => "SELECT * FROM companies ORDER BY description ASC",
        SortField::Ceo => "SELECT * FROM companies ORDER BY ceo ASC",
        SortField::FoundedYear => "SELECT * FROM companies ORDER BY founded_year ASC",
    }
}

/// `SQLite`-backed company repository.
pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CompanyRepository for SqliteCompanyRepository {
    fn create(
        &self,
        company: Company,
    ) -> impl Future<Output = Result<Company, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(company.id.to_string())
                .bind(&company.name)
                .bind(&company.description)
                .bind(&company.ceo)
                .bind(company.founded_year)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(company)
        }
    }

    fn get_by_id(
        &self,
        id: CompanyId,
    ) -> impl Future<Output = Result<Option<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::list(rows))
        }
    }

    fn find_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn search(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        let pattern = format!("%{query}%");
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SEARCH)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::list(rows))
        }
    }

    fn find_by_founded_year(
        &self,
        year: i32,
    ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_YEAR)
                .bind(year)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::list(rows))
        }
    }

    fn get_sorted(
        &self,
        field: SortField,
    ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(sorted_query(field))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::list(rows))
        }
    }

    fn get_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Page<Company>, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let limit = i64::from(page_size);
            let offset = i64::from(page) * limit;

            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_PAGE)
                .bind(limit)
                .bind(offset)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let total: i64 = sqlx::query_scalar(COUNT_ALL)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;
            let total = u64::try_from(total).unwrap_or_default();

            Ok(Page::new(Wrapper::list(rows), page, page_size, total))
        }
    }

    fn update(&self, company: Company) -> impl Future<Output = Result<bool, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&company.name)
                .bind(&company.description)
                .bind(&company.ceo)
                .bind(company.founded_year)
                .bind(company.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: CompanyId) -> impl Future<Output = Result<bool, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn set_logo(
        &self,
        id: CompanyId,
        logo: Logo,
    ) -> impl Future<Output = Result<bool, FirmdirError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(SET_LOGO)
                .bind(logo.data)
                .bind(logo.content_type)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
