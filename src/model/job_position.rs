use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobPosition {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub department_id: Option<i64>,
}

/// One row of the employee/position join table. The pair is the primary key,
/// so an employee holds a given position at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeePosition {
    pub employee_id: i64,
    pub position_id: i64,
}
