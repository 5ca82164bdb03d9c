use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::{
    auth::auth::SessionUser,
    config::Config,
    error::AppError,
    models::EmployeeQuery,
    store::HrStore,
    views::{
        Page,
        listings::{self, NO_HEALTH_PLAN, NO_NET_AMOUNT},
    },
};

pub const NO_EMPLOYEE_ID: &str = "No employee ID provided";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Employee listing (home page after login)
#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "HTML listing of every employee", content_type = "text/html", body = String),
        (status = 302, description = "No session, redirected to the login page")
    ),
    tag = "Employee"
)]
pub async fn menu(
    req: HttpRequest,
    user: SessionUser,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let employees = store.all_employees().await?;
    debug!(user_id = user.user_id, count = employees.len(), "Listing employees");

    Ok(Page::new("Employees", listings::employees(&employees, &user.username)).render(&req, &config))
}

/// Employee detail
///
/// Missing pay data is reported as warnings on the page rather than as an
/// error. Every outcome is a 200.
#[utoipa::path(
    get,
    path = "/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Detail page, or a page carrying \"No employee ID provided\" / \"Employee not found\"", content_type = "text/html", body = String)
    ),
    tag = "Employee"
)]
pub async fn employee_detail(
    req: HttpRequest,
    query: web::Query<EmployeeQuery>,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let raw_id = query.employee_id.as_deref().map(str::trim).unwrap_or("");
    if raw_id.is_empty() {
        return Ok(Page::new("Employee", listings::employee_error(NO_EMPLOYEE_ID)).render(&req, &config));
    }

    let info = match raw_id.parse::<i64>() {
        Ok(employee_id) => store.general_info(employee_id).await?,
        Err(_) => {
            debug!(employee_id = raw_id, "Non-numeric employee id");
            None
        }
    };

    let Some(info) = info else {
        return Ok(Page::new("Employee", listings::employee_error(EMPLOYEE_NOT_FOUND)).render(&req, &config));
    };

    let employee_id = info.employee.id;
    let extra = store.additional_info(employee_id).await?;
    let contracts = store.contracts_for(employee_id).await?;
    let vacations = store.vacations_for(employee_id).await?;

    let mut missing_info = Vec::new();
    if extra.net_amount().is_none() {
        missing_info.push(NO_NET_AMOUNT);
    }
    if extra.health_plan.is_none() {
        missing_info.push(NO_HEALTH_PLAN);
    }

    let title = info.employee.full_name();
    let body = listings::employee_detail(&info, &extra, &contracts, &vacations, &missing_info);
    Ok(Page::new(title, body).render(&req, &config))
}

/// Employee name lookup
#[utoipa::path(
    get,
    path = "/get_employee_name/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee's name", content_type = "text/plain", body = String, example = json!("Camila Rojas")),
        (status = 404, description = "No such employee", content_type = "text/plain", body = String, example = json!("Does not exist"))
    ),
    tag = "Employee"
)]
pub async fn employee_name(
    path: web::Path<u64>,
    store: web::Data<dyn HrStore>,
) -> Result<HttpResponse, AppError> {
    let name = match i64::try_from(path.into_inner()) {
        Ok(employee_id) => store.employee_name(employee_id).await?,
        Err(_) => None,
    };

    Ok(match name {
        Some(name) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(name),
        None => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Does not exist"),
    })
}
