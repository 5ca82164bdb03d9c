use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, instrument, warn};

use crate::{
    config::Config,
    error::AppError,
    models::VacationForm,
    utils::flash::{Flash, redirect_with_flash},
    views::{Page, forms},
};

pub const VACATION_REGISTERED: &str = "Vacation registered successfully!";

/// Vacation form
#[utoipa::path(
    get,
    path = "/register_vacation",
    responses((status = 200, description = "Static HTML form", content_type = "text/html", body = String)),
    tag = "Vacation"
)]
pub async fn register_vacation(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    Page::new("Register vacation", forms::register_vacation()).render(&req, &config)
}

/// Register Vacation
///
/// Accrual rules are not implemented: the request is acknowledged and
/// nothing is stored.
#[utoipa::path(
    post,
    path = "/add_vacation",
    request_body(content = VacationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Always redirected to /register_vacation with a success flash")
    ),
    tag = "Vacation"
)]
#[instrument(name = "add_vacation", skip_all)]
pub async fn add_vacation(
    form: Result<web::Form<VacationForm>, actix_web::Error>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    match form {
        Ok(form) => info!(
            employee_id = ?form.employee_id,
            start_date = ?form.start_date,
            end_date = ?form.end_date,
            "Vacation request acknowledged, not stored"
        ),
        Err(e) => warn!(error = %e, "Unreadable vacation form ignored"),
    }

    redirect_with_flash(
        "/register_vacation",
        Flash::success(VACATION_REGISTERED),
        &config.session_secret,
    )
}
