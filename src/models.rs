use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use utoipa::{IntoParams, ToSchema};

use crate::store::{NewContract, NewEvaluation, NewTraining};

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Kept as text so an empty or malformed value still reaches the handler.
    pub employee_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ContractForm {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "fixed")]
    pub contract_type: String,
    #[schema(example = "2025-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-12-31", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    #[schema(example = "professional")]
    pub classification: String,
}

impl From<ContractForm> for NewContract {
    fn from(form: ContractForm) -> Self {
        NewContract {
            employee_id: form.employee_id,
            contract_type: form.contract_type,
            start_date: form.start_date,
            end_date: form.end_date,
            classification: form.classification,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct EvaluationForm {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2025-06-30", value_type = String, format = "date")]
    pub evaluation_date: NaiveDate,
    #[schema(example = "Marta Diaz")]
    pub evaluator: String,
    #[schema(example = 1.5)]
    pub evaluation_factor: f64,
    #[schema(example = "good")]
    pub rating: String,
    pub comments: String,
}

impl From<EvaluationForm> for NewEvaluation {
    fn from(form: EvaluationForm) -> Self {
        NewEvaluation {
            employee_id: form.employee_id,
            evaluation_date: form.evaluation_date,
            evaluator: form.evaluator,
            evaluation_factor: form.evaluation_factor,
            rating: form.rating,
            comments: form.comments,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct TrainingForm {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2025-05-02", value_type = String, format = "date")]
    pub training_date: NaiveDate,
    #[schema(example = "Workplace safety")]
    pub course: String,
    #[schema(example = 6.4)]
    pub score: f64,
    #[schema(example = "ACHS")]
    pub institution: String,
    pub comments: String,
}

impl From<TrainingForm> for NewTraining {
    fn from(form: TrainingForm) -> Self {
        NewTraining {
            employee_id: form.employee_id,
            training_date: form.training_date,
            course: form.course,
            score: form.score,
            institution: form.institution,
            comments: form.comments,
        }
    }
}

/// Vacation fields are accepted as-is; the handler does not store them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VacationForm {
    pub employee_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: i64,
    pub sub: String,
    pub exp: usize,
    pub jti: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashClaims {
    pub message: String,
    pub level: FlashLevel,
    pub exp: usize,
}
