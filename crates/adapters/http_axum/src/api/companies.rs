//! JSON REST handlers for the company resource.
//!
//! Read endpoints accept any authenticated role; mutating endpoints
//! require `admin`. Identifier path segments are parsed and validated
//! here, before the service is invoked.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use firmdir_app::ports::CompanyRepository;
use firmdir_domain::company::{Company, CompanyView, Logo};
use firmdir_domain::error::ValidationError;
use firmdir_domain::id::CompanyId;
use firmdir_domain::page::Page;
use firmdir_domain::sort::SortField;

use crate::auth::{RequireAdmin, RequireUser};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or fully replacing a company.
#[derive(Debug, Deserialize)]
pub struct CompanyRequest {
    pub name: String,
    pub description: String,
    pub ceo: String,
    #[serde(rename = "foundedYear")]
    pub founded_year: Option<i32>,
}

impl CompanyRequest {
    fn into_company(self, id: Option<CompanyId>) -> Result<Company, ApiError> {
        let mut builder = Company::builder()
            .name(self.name)
            .description(self.description)
            .ceo(self.ceo)
            .founded_year(self.founded_year);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        builder.build().map_err(ApiError::from)
    }
}

/// Query string for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

fn parse_id(raw: &str) -> Result<CompanyId, ApiError> {
    CompanyId::from_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()).into())
}

/// `GET /companies`
pub async fn list<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<CompanyView>>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let companies = state.company_service.list_companies().await?;
    Ok(Json(companies))
}

/// `GET /companies/{id}` — full entity, logo included. Intended for
/// sibling services that need to validate or enrich company references.
pub async fn get<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Company>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let company = state.company_service.get_company(id).await?;
    Ok(Json(company))
}

/// `GET /companies/dto/{id}`
pub async fn get_view<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<CompanyView>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let view = state.company_service.get_company_view(id).await?;
    Ok(Json(view))
}

/// `GET /companies/name/{name}`
pub async fn get_by_name<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path(name): Path<String>,
) -> Result<Json<CompanyView>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let view = state.company_service.find_by_name(name).await?;
    Ok(Json(view))
}

/// `GET /companies/search?query=`
pub async fn search<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CompanyView>>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let companies = state.company_service.search_companies(params.query).await?;
    Ok(Json(companies))
}

/// `GET /companies/filterByYear/{year}`
pub async fn filter_by_year<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<CompanyView>>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let companies = state.company_service.filter_by_founded_year(year).await?;
    Ok(Json(companies))
}

/// `GET /companies/sorted/{field}` — ascending by one of the closed set
/// of sortable fields; anything else is a 400.
pub async fn sorted<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path(field): Path<String>,
) -> Result<Json<Vec<Company>>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let field = SortField::from_str(&field).map_err(ApiError::from)?;
    let companies = state.company_service.sorted_companies(field).await?;
    Ok(Json(companies))
}

/// `GET /companies/pagination/{page}/{pageSize}` — `page` is zero-indexed.
pub async fn paginated<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path((page, page_size)): Path<(u32, u32)>,
) -> Result<Json<Page<Company>>, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let page = state
        .company_service
        .paginated_companies(page, page_size)
        .await?;
    Ok(Json(page))
}

/// `POST /companies`
pub async fn create<R>(
    _role: RequireAdmin,
    State(state): State<AppState<R>>,
    Json(request): Json<CompanyRequest>,
) -> Result<(StatusCode, &'static str), ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    tracing::info!(name = %request.name, "creating company");
    let company = request.into_company(None)?;
    state.company_service.create_company(company).await?;
    Ok((StatusCode::CREATED, "Company created"))
}

/// `PUT /companies/{id}` — full replace of all request-carried fields.
pub async fn update<R>(
    _role: RequireAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(request): Json<CompanyRequest>,
) -> Result<&'static str, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    tracing::info!(%id, "updating company");
    let company = request.into_company(Some(id))?;
    state.company_service.update_company(company).await?;
    Ok("Company updated")
}

/// `DELETE /companies/{id}`
///
/// Jobs and reviews referencing this company live in sibling services and
/// are not cascaded; cross-service cleanup is deferred to a future
/// event-driven integration.
pub async fn delete<R>(
    _role: RequireAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    tracing::info!(%id, "deleting company");
    state.company_service.delete_company(id).await?;
    Ok("Company deleted")
}

/// `POST /companies/{id}/logo` — multipart upload, field name `file`.
pub async fn upload_logo<R>(
    _role: RequireAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<&'static str, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    let mut logo = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Upload(err.to_string()))?
    {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .map(ToOwned::to_owned)
                .ok_or_else(|| ApiError::from(ValidationError::EmptyLogoType))?;
            let data = field
                .bytes()
                .await
                .map_err(|err| ApiError::Upload(err.to_string()))?
                .to_vec();
            logo = Some(Logo { data, content_type });
            break;
        }
    }
    let logo = logo.ok_or_else(|| ApiError::from(ValidationError::MissingLogoFile))?;

    tracing::info!(%id, size = logo.data.len(), "storing company logo");
    state.company_service.store_logo(id, logo).await?;
    Ok("Logo uploaded successfully")
}

/// `GET /companies/{id}/logo` — raw bytes with the stored content type.
pub async fn download_logo<R>(
    _role: RequireUser,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let logo = state.company_service.get_logo(id).await?;
    Ok(([(header::CONTENT_TYPE, logo.content_type)], logo.data).into_response())
}
