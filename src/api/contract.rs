use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, instrument};

use crate::{
    config::Config,
    error::AppError,
    models::ContractForm,
    store::HrStore,
    utils::flash::{Flash, redirect_with_flash},
    views::{Page, forms},
};

pub const CONTRACT_ADDED: &str = "Contract added successfully";

/// Contract form
#[utoipa::path(
    get,
    path = "/add-contract",
    responses(
        (status = 200, description = "HTML form", content_type = "text/html", body = String)
    ),
    tag = "Contract"
)]
pub async fn add_contract_page(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    Page::new("Add contract", forms::add_contract()).render(&req, &config)
}

/// Create Contract
///
/// Redirects back to the form, not to the employee it was added for.
#[utoipa::path(
    post,
    path = "/add-contract",
    request_body(content = ContractForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Contract stored, redirected to /add-contract with a flash message"),
        (status = 400, description = "A required field is missing or malformed"),
        (status = 500, description = "Storage failure, including an unknown employee id")
    ),
    tag = "Contract"
)]
#[instrument(name = "add_contract", skip_all, fields(employee_id = form.employee_id))]
pub async fn add_contract(
    form: web::Form<ContractForm>,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let contract_id = store.add_contract(form.into_inner().into()).await?;
    info!(contract_id, "Contract added");

    redirect_with_flash("/add-contract", Flash::success(CONTRACT_ADDED), &config.session_secret)
}
