use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Training {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub training_date: Option<NaiveDate>,
    pub course: Option<String>,
    pub score: Option<f64>,
    pub institution: Option<String>,
    pub comments: Option<String>,
}
