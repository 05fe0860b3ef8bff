//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod companies;

use axum::Router;
use axum::routing::get;

use firmdir_app::ports::CompanyRepository;

use crate::state::AppState;

/// Build the `/companies` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CompanyRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/companies",
            get(companies::list::<R>).post(companies::create::<R>),
        )
        .route(
            "/companies/{id}",
            get(companies::get::<R>)
                .put(companies::update::<R>)
                .delete(companies::delete::<R>),
        )
        .route("/companies/dto/{id}", get(companies::get_view::<R>))
        .route("/companies/name/{name}", get(companies::get_by_name::<R>))
        .route("/companies/search", get(companies::search::<R>))
        .route(
            "/companies/filterByYear/{year}",
            get(companies::filter_by_year::<R>),
        )
        .route("/companies/sorted/{field}", get(companies::sorted::<R>))
        .route(
            "/companies/pagination/{page}/{page_size}",
            get(companies::paginated::<R>),
        )
        .route(
            "/companies/{id}/logo",
            get(companies::download_logo::<R>).post(companies::upload_logo::<R>),
        )
}
