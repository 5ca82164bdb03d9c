use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Evaluation {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub evaluation_date: Option<NaiveDate>,
    pub evaluator: Option<String>,
    pub evaluation_factor: Option<f64>,
    pub rating: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Rating {
    Good,
    Average,
    Poor,
}
