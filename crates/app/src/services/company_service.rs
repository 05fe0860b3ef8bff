//! Company service — use-cases for the company directory.

use firmdir_domain::company::{Company, CompanyView, Logo};
use firmdir_domain::error::{FirmdirError, NotFoundError, ValidationError};
use firmdir_domain::id::CompanyId;
use firmdir_domain::page::Page;
use firmdir_domain::sort::SortField;

use crate::ports::CompanyRepository;

/// Application service for all company operations.
pub struct CompanyService<R> {
    repo: R,
}

impl<R: CompanyRepository> CompanyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn not_found(id: CompanyId) -> FirmdirError {
        NotFoundError {
            entity: "Company",
            id: id.to_string(),
        }
        .into()
    }

    /// List every company as a lightweight view, natural store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_companies(&self) -> Result<Vec<CompanyView>, FirmdirError> {
        let companies = self.repo.get_all().await?;
        Ok(companies.into_iter().map(CompanyView::from).collect())
    }

    /// Fetch the full entity, logo included. Intended for
    /// service-to-service consumers.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::NotFound`] when no company with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_company(&self, id: CompanyId) -> Result<Company, FirmdirError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Fetch the view projection of a single company.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::NotFound`] when no company with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_company_view(&self, id: CompanyId) -> Result<CompanyView, FirmdirError> {
        self.get_company(id).await.map(CompanyView::from)
    }

    /// Exact-match lookup by company name.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::NotFound`] when no company carries that
    /// name, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_name(&self, name: String) -> Result<CompanyView, FirmdirError> {
        let lookup = name.clone();
        self.repo
            .find_by_name(name)
            .await?
            .map(CompanyView::from)
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Company",
                    id: lookup,
                }
                .into()
            })
    }

    /// Substring search over name and description.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_companies(&self, query: String) -> Result<Vec<CompanyView>, FirmdirError> {
        let companies = self.repo.search(query).await?;
        Ok(companies.into_iter().map(CompanyView::from).collect())
    }

    /// Every company founded in exactly `year`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn filter_by_founded_year(
        &self,
        year: i32,
    ) -> Result<Vec<CompanyView>, FirmdirError> {
        let companies = self.repo.find_by_founded_year(year).await?;
        Ok(companies.into_iter().map(CompanyView::from).collect())
    }

    /// All companies ordered ascending by `field`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn sorted_companies(&self, field: SortField) -> Result<Vec<Company>, FirmdirError> {
        self.repo.get_sorted(field).await
    }

    /// One zero-indexed page of companies.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::Validation`] when `page_size` is zero, or
    /// a storage error from the repository.
    pub async fn paginated_companies(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<Company>, FirmdirError> {
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize(page_size).into());
        }
        self.repo.get_page(page, page_size).await
    }

    /// Persist a new company after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, company), fields(company_name = %company.name))]
    pub async fn create_company(&self, company: Company) -> Result<Company, FirmdirError> {
        company.validate()?;
        self.repo.create(company).await
    }

    /// Replace all request-carried fields of an existing company. The
    /// logo, if any, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::Validation`] if invariants fail,
    /// [`FirmdirError::NotFound`] when no company with that id exists, or
    /// a storage error from the repository.
    #[tracing::instrument(skip(self, company), fields(company_id = %company.id))]
    pub async fn update_company(&self, company: Company) -> Result<(), FirmdirError> {
        company.validate()?;
        let id = company.id;
        if self.repo.update(company).await? {
            Ok(())
        } else {
            Err(Self::not_found(id))
        }
    }

    /// Delete a company by id. Related records held by sibling services
    /// are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::NotFound`] when no company with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_company(&self, id: CompanyId) -> Result<(), FirmdirError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(Self::not_found(id))
        }
    }

    /// Attach a logo (payload + MIME type) to an existing company.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::Validation`] when the content type is
    /// empty, [`FirmdirError::NotFound`] when no company with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, logo), fields(logo_size = logo.data.len()))]
    pub async fn store_logo(&self, id: CompanyId, logo: Logo) -> Result<(), FirmdirError> {
        logo.validate()?;
        if self.repo.set_logo(id, logo).await? {
            Ok(())
        } else {
            Err(Self::not_found(id))
        }
    }

    /// Fetch the logo of a company.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::NotFound`] when the company or its logo is
    /// absent, or a storage error from the repository.
    pub async fn get_logo(&self, id: CompanyId) -> Result<Logo, FirmdirError> {
        let company = self.get_company(id).await?;
        company.logo.ok_or_else(|| {
            NotFoundError {
                entity: "Logo for company",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    /// Insertion-ordered in-memory store, standing in for the SQL adapter.
    #[derive(Default)]
    struct InMemoryCompanyRepo {
        store: Mutex<Vec<Company>>,
    }

    impl CompanyRepository for InMemoryCompanyRepo {
        fn create(
            &self,
            company: Company,
        ) -> impl Future<Output = Result<Company, FirmdirError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.push(company.clone());
            async { Ok(company) }
        }

        fn get_by_id(
            &self,
            id: CompanyId,
        ) -> impl Future<Output = Result<Option<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|c| c.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.clone();
            async { Ok(result) }
        }

        fn find_by_name(
            &self,
            name: String,
        ) -> impl Future<Output = Result<Option<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|c| c.name == name).cloned();
            async { Ok(result) }
        }

        fn search(
            &self,
            query: String,
        ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Company> = store
                .iter()
                .filter(|c| c.name.contains(&query) || c.description.contains(&query))
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn find_by_founded_year(
            &self,
            year: i32,
        ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Company> = store
                .iter()
                .filter(|c| c.founded_year == Some(year))
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn get_sorted(
            &self,
            field: SortField,
        ) -> impl Future<Output = Result<Vec<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let mut result = store.clone();
            match field {
                SortField::Name => result.sort_by(|a, b| a.name.cmp(&b.name)),
                SortField::Description => result.sort_by(|a, b| a.description.cmp(&b.description)),
                SortField::Ceo => result.sort_by(|a, b| a.ceo.cmp(&b.ceo)),
                SortField::FoundedYear => {
                    result.sort_by(|a, b| a.founded_year.cmp(&b.founded_year));
                }
            }
            async { Ok(result) }
        }

        fn get_page(
            &self,
            page: u32,
            page_size: u32,
        ) -> impl Future<Output = Result<Page<Company>, FirmdirError>> + Send {
            let store = self.store.lock().unwrap();
            let total = store.len() as u64;
            let offset = (page as usize) * (page_size as usize);
            let items: Vec<Company> = store
                .iter()
                .skip(offset)
                .take(page_size as usize)
                .cloned()
                .collect();
            let result = Page::new(items, page, page_size, total);
            async { Ok(result) }
        }

        fn update(
            &self,
            company: Company,
        ) -> impl Future<Output = Result<bool, FirmdirError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = match store.iter_mut().find(|c| c.id == company.id) {
                Some(existing) => {
                    existing.name = company.name;
                    existing.description = company.description;
                    existing.ceo = company.ceo;
                    existing.founded_year = company.founded_year;
                    true
                }
                None => false,
            };
            async move { Ok(result) }
        }

        fn delete(&self, id: CompanyId) -> impl Future<Output = Result<bool, FirmdirError>> + Send {
            let mut store = self.store.lock().unwrap();
            let before = store.len();
            store.retain(|c| c.id != id);
            let result = store.len() < before;
            async move { Ok(result) }
        }

        fn set_logo(
            &self,
            id: CompanyId,
            logo: Logo,
        ) -> impl Future<Output = Result<bool, FirmdirError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = match store.iter_mut().find(|c| c.id == id) {
                Some(existing) => {
                    existing.logo = Some(logo);
                    true
                }
                None => false,
            };
            async move { Ok(result) }
        }
    }

    fn make_service() -> CompanyService<InMemoryCompanyRepo> {
        CompanyService::new(InMemoryCompanyRepo::default())
    }

    fn company(name: &str, year: Option<i32>) -> Company {
        Company::builder()
            .name(name)
            .description(format!("{name} description"))
            .ceo("Jane Doe")
            .founded_year(year)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_company_and_read_it_back() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", Some(1990))).await.unwrap();

        let fetched = svc.get_company(created.id).await.unwrap();
        assert_eq!(fetched.name, "Acme");
        assert_eq!(fetched.founded_year, Some(1990));
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut invalid = company("Acme", None);
        invalid.name = String::new();

        let result = svc.create_company(invalid).await;
        assert!(matches!(
            result,
            Err(FirmdirError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id_everywhere() {
        let svc = make_service();
        let id = CompanyId::new();

        assert!(matches!(
            svc.get_company(id).await,
            Err(FirmdirError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_company_view(id).await,
            Err(FirmdirError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_company(id).await,
            Err(FirmdirError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_logo(id).await,
            Err(FirmdirError::NotFound(_))
        ));

        let replacement = Company::builder()
            .id(id)
            .name("Ghost")
            .description("Missing")
            .ceo("Nobody")
            .build()
            .unwrap();
        assert!(matches!(
            svc.update_company(replacement).await,
            Err(FirmdirError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_replace_all_fields_on_update() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", Some(1990))).await.unwrap();

        let replacement = Company::builder()
            .id(created.id)
            .name("Acme Corp")
            .description("Bigger widgets")
            .ceo("John Doe")
            .build()
            .unwrap();
        svc.update_company(replacement).await.unwrap();

        let view = svc.get_company_view(created.id).await.unwrap();
        assert_eq!(view.name, "Acme Corp");
        assert_eq!(view.description, "Bigger widgets");
        assert_eq!(view.ceo, "John Doe");
        assert_eq!(view.founded_year, None);
    }

    #[tokio::test]
    async fn should_keep_logo_when_updating_other_fields() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", None)).await.unwrap();
        svc.store_logo(
            created.id,
            Logo {
                data: vec![1, 2, 3],
                content_type: "image/png".to_string(),
            },
        )
        .await
        .unwrap();

        let replacement = Company::builder()
            .id(created.id)
            .name("Acme Corp")
            .description("Widgets")
            .ceo("Jane Doe")
            .build()
            .unwrap();
        svc.update_company(replacement).await.unwrap();

        let logo = svc.get_logo(created.id).await.unwrap();
        assert_eq!(logo.data, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn should_delete_company_and_report_not_found_afterwards() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", None)).await.unwrap();

        svc.delete_company(created.id).await.unwrap();

        assert!(matches!(
            svc.get_company(created.id).await,
            Err(FirmdirError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_roundtrip_logo_bytes_and_content_type() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", None)).await.unwrap();
        let bytes = vec![0x89, 0x50, 0x4e, 0x47];

        svc.store_logo(
            created.id,
            Logo {
                data: bytes.clone(),
                content_type: "image/png".to_string(),
            },
        )
        .await
        .unwrap();

        let logo = svc.get_logo(created.id).await.unwrap();
        assert_eq!(logo.data, bytes);
        assert_eq!(logo.content_type, "image/png");
    }

    #[tokio::test]
    async fn should_reject_logo_with_empty_content_type() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", None)).await.unwrap();

        let result = svc
            .store_logo(
                created.id,
                Logo {
                    data: vec![1],
                    content_type: String::new(),
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(FirmdirError::Validation(ValidationError::EmptyLogoType))
        ));
    }

    #[tokio::test]
    async fn should_report_not_found_when_logo_missing() {
        let svc = make_service();
        let created = svc.create_company(company("Acme", None)).await.unwrap();

        assert!(matches!(
            svc.get_logo(created.id).await,
            Err(FirmdirError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_find_company_by_exact_name() {
        let svc = make_service();
        svc.create_company(company("Acme", None)).await.unwrap();
        svc.create_company(company("Globex", None)).await.unwrap();

        let view = svc.find_by_name("Globex".to_string()).await.unwrap();
        assert_eq!(view.name, "Globex");

        assert!(matches!(
            svc.find_by_name("acme".to_string()).await,
            Err(FirmdirError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_filter_by_founded_year_exactly() {
        let svc = make_service();
        svc.create_company(company("Acme", Some(1990))).await.unwrap();
        svc.create_company(company("Globex", Some(1990))).await.unwrap();
        svc.create_company(company("Initech", Some(2001))).await.unwrap();
        svc.create_company(company("Umbrella", None)).await.unwrap();

        let matches = svc.filter_by_founded_year(1990).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|v| v.founded_year == Some(1990)));
    }

    #[tokio::test]
    async fn should_search_name_and_description() {
        let svc = make_service();
        svc.create_company(company("Acme", None)).await.unwrap();
        svc.create_company(company("Globex", None)).await.unwrap();

        let hits = svc.search_companies("Glo".to_string()).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Globex");

        // Matches the description of both entries.
        let hits = svc.search_companies("description".to_string()).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn should_sort_ascending_by_requested_field() {
        let svc = make_service();
        svc.create_company(company("Globex", Some(2001))).await.unwrap();
        svc.create_company(company("Acme", Some(1990))).await.unwrap();

        let sorted = svc.sorted_companies(SortField::Name).await.unwrap();
        assert_eq!(sorted[0].name, "Acme");
        assert_eq!(sorted[1].name, "Globex");

        let sorted = svc.sorted_companies(SortField::FoundedYear).await.unwrap();
        assert_eq!(sorted[0].founded_year, Some(1990));
    }

    #[tokio::test]
    async fn should_reject_zero_page_size() {
        let svc = make_service();
        let result = svc.paginated_companies(0, 0).await;
        assert!(matches!(
            result,
            Err(FirmdirError::Validation(ValidationError::InvalidPageSize(0)))
        ));
    }

    #[tokio::test]
    async fn should_reconstruct_store_from_consecutive_pages() {
        let svc = make_service();
        for i in 0..5 {
            svc.create_company(company(&format!("Company {i}"), None))
                .await
                .unwrap();
        }

        let mut seen = Vec::new();
        for page in 0..3 {
            let slice = svc.paginated_companies(page, 2).await.unwrap();
            assert!(slice.items.len() <= 2);
            assert_eq!(slice.total_items, 5);
            assert_eq!(slice.total_pages, 3);
            seen.extend(slice.items.into_iter().map(|c| c.name));
        }

        let all: Vec<String> = svc
            .list_companies()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(seen, all);
    }
}
