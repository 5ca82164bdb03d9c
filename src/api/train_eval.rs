use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, instrument};

use crate::{
    config::Config,
    error::AppError,
    models::{EvaluationForm, TrainingForm},
    store::HrStore,
    utils::flash::{Flash, redirect_with_flash},
    views::{Page, forms, listings},
};

pub const EVALUATION_ADDED: &str = "Evaluation added successfully";
pub const TRAINING_ADDED: &str = "Training added successfully";

/// Trainings and evaluations dashboard
#[utoipa::path(
    get,
    path = "/train-eval",
    responses(
        (status = 200, description = "HTML listing of every evaluation and training", content_type = "text/html", body = String)
    ),
    tag = "Training"
)]
pub async fn dashboard(
    req: HttpRequest,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let evaluations = store.all_evaluations().await?;
    let trainings = store.all_trainings().await?;

    Ok(Page::new(
        "Trainings & evaluations",
        listings::train_eval(&evaluations, &trainings),
    )
    .render(&req, &config))
}

/// Evaluation form
#[utoipa::path(
    get,
    path = "/add-evaluation",
    responses((status = 200, description = "HTML form", content_type = "text/html", body = String)),
    tag = "Training"
)]
pub async fn add_evaluation_page(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    Page::new("Add evaluation", forms::add_evaluation()).render(&req, &config)
}

/// Create Evaluation
#[utoipa::path(
    post,
    path = "/add-evaluation",
    request_body(content = EvaluationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Evaluation stored, redirected to /train-eval with a flash message"),
        (status = 400, description = "A required field is missing or malformed"),
        (status = 500, description = "Storage failure, including an unknown employee id")
    ),
    tag = "Training"
)]
#[instrument(name = "add_evaluation", skip_all, fields(employee_id = form.employee_id))]
pub async fn add_evaluation(
    form: web::Form<EvaluationForm>,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let evaluation_id = store.add_evaluation(form.into_inner().into()).await?;
    info!(evaluation_id, "Evaluation added");

    redirect_with_flash("/train-eval", Flash::success(EVALUATION_ADDED), &config.session_secret)
}

/// Training form
#[utoipa::path(
    get,
    path = "/add-training",
    responses((status = 200, description = "HTML form", content_type = "text/html", body = String)),
    tag = "Training"
)]
pub async fn add_training_page(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    Page::new("Add training", forms::add_training()).render(&req, &config)
}

/// Create Training
#[utoipa::path(
    post,
    path = "/add-training",
    request_body(content = TrainingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Training stored, redirected to /train-eval with a flash message"),
        (status = 400, description = "A required field is missing or malformed"),
        (status = 500, description = "Storage failure, including an unknown employee id")
    ),
    tag = "Training"
)]
#[instrument(name = "add_training", skip_all, fields(employee_id = form.employee_id))]
pub async fn add_training(
    form: web::Form<TrainingForm>,
    store: web::Data<dyn HrStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    let training_id = store.add_training(form.into_inner().into()).await?;
    info!(training_id, "Training added");

    redirect_with_flash("/train-eval", Flash::success(TRAINING_ADDED), &config.session_secret)
}
