use actix_web::{HttpRequest, HttpResponse, web};

use crate::{
    config::Config,
    error::AppError,
    store::HrStore,
    views::{Page, listings},
};

/// Company listing
#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "HTML listing of every company", content_type = "text/html", body = String)
    ),
    tag = "Company"
)]
pub async fn list_companies(
    req: HttpRequest,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let companies = store.all_companies().await?;
    Ok(Page::new("Companies", listings::companies(&companies)).render(&req, &config))
}
