use crate::model::company::Company;
use crate::model::employee::Employee;
use crate::models::{ContractForm, EvaluationForm, LoginForm, TrainingForm, VacationForm};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Records",
        version = "0.1.0",
        description = r#"
## Human resources record keeping

Server-rendered HTML pages for browsing and registering HR records.

### Pages
- **Employees**: listing and per-employee detail (position, pay, health plan, contracts, vacations)
- **Companies**: listing
- **Contracts**: registration form
- **Trainings & evaluations**: dashboard and registration forms
- **Vacations**: registration form (acknowledged, not stored)

### Session
`POST /` with valid credentials sets an `hr_session` cookie. Every other
page redirects to `/` without it.

Forms are submitted as `application/x-www-form-urlencoded`. After a
successful submission the handler redirects and the next page shows a
one-shot flash message.
"#,
    ),
    paths(
        crate::auth::handlers::login_page,
        crate::auth::handlers::login,
        crate::auth::handlers::logout,

        crate::api::employee::menu,
        crate::api::employee::employee_detail,
        crate::api::employee::employee_name,

        crate::api::company::list_companies,

        crate::api::contract::add_contract_page,
        crate::api::contract::add_contract,

        crate::api::train_eval::dashboard,
        crate::api::train_eval::add_evaluation_page,
        crate::api::train_eval::add_evaluation,
        crate::api::train_eval::add_training_page,
        crate::api::train_eval::add_training,

        crate::api::vacation::register_vacation,
        crate::api::vacation::add_vacation
    ),
    components(
        schemas(
            Employee,
            Company,
            LoginForm,
            ContractForm,
            EvaluationForm,
            TrainingForm,
            VacationForm
        )
    ),
    tags(
        (name = "Auth", description = "Login and logout"),
        (name = "Employee", description = "Employee pages"),
        (name = "Company", description = "Company pages"),
        (name = "Contract", description = "Contract registration"),
        (name = "Training", description = "Trainings and evaluations"),
        (name = "Vacation", description = "Vacation registration"),
    )
)]
pub struct ApiDoc;
