use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Remuneration {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub afp_id: Option<i64>,
    pub health_plan_id: Option<i64>,
    pub gross_amount: Option<f64>,
    pub tax: Option<f64>,
    pub deductions: Option<f64>,
    pub bonus: Option<f64>,
    pub welfare_contribution: Option<f64>,
    pub net_amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bonus {
    pub id: i64,
    pub remuneration_id: Option<i64>,
    pub benefit: Option<f64>,
}
