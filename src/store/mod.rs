//! Query and command operations over the HR schema.
//!
//! Handlers only see the [`HrStore`] trait. The production implementation is
//! [`MySqlStore`]; tests run against an in-memory fake.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::afp::Afp;
use crate::model::company::Company;
use crate::model::contract::Contract;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::evaluation::Evaluation;
use crate::model::health_plan::HealthPlanSummary;
use crate::model::job_position::JobPosition;
use crate::model::remuneration::{Bonus, Remuneration};
use crate::model::training::Training;
use crate::model::user::User;
use crate::model::vacation::Vacation;

pub mod mysql;

#[cfg(test)]
pub mod fake;

pub use mysql::MySqlStore;

/// Identity and placement of an employee, shown at the top of the detail page.
#[derive(Debug, Clone)]
pub struct GeneralInfo {
    pub employee: Employee,
    /// Lowest-id position linked to the employee.
    pub position: Option<JobPosition>,
    pub department: Option<Department>,
}

impl GeneralInfo {
    pub fn position_name(&self) -> Option<&str> {
        self.position.as_ref().and_then(|p| p.name.as_deref())
    }
}

/// Pay details taken from the employee's most recent remuneration.
#[derive(Debug, Clone, Default)]
pub struct AdditionalInfo {
    pub remuneration: Option<Remuneration>,
    pub pension_fund: Option<Afp>,
    pub health_plan: Option<HealthPlanSummary>,
    pub bonuses: Vec<Bonus>,
}

impl AdditionalInfo {
    /// A zero net amount counts as not registered.
    pub fn net_amount(&self) -> Option<f64> {
        self.remuneration
            .as_ref()
            .and_then(|r| r.net_amount)
            .filter(|amount| *amount != 0.0)
    }
}

#[derive(Debug, Clone)]
pub struct NewContract {
    pub employee_id: i64,
    pub contract_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub classification: String,
}

#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub employee_id: i64,
    pub evaluation_date: NaiveDate,
    pub evaluator: String,
    pub evaluation_factor: f64,
    pub rating: String,
    pub comments: String,
}

#[derive(Debug, Clone)]
pub struct NewTraining {
    pub employee_id: i64,
    pub training_date: NaiveDate,
    pub course: String,
    pub score: f64,
    pub institution: String,
    pub comments: String,
}

#[async_trait]
pub trait HrStore: Send + Sync {
    /// Every employee, ordered by id.
    async fn all_employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// `None` when the employee does not exist.
    async fn general_info(&self, employee_id: i64) -> Result<Option<GeneralInfo>, StoreError>;

    /// Empty when the employee has no remuneration on record.
    async fn additional_info(&self, employee_id: i64) -> Result<AdditionalInfo, StoreError>;

    async fn contracts_for(&self, employee_id: i64) -> Result<Vec<Contract>, StoreError>;

    async fn vacations_for(&self, employee_id: i64) -> Result<Vec<Vacation>, StoreError>;

    /// Every company, ordered by name.
    async fn all_companies(&self) -> Result<Vec<Company>, StoreError>;

    /// Registers the contract today with no department. Returns the new id.
    async fn add_contract(&self, contract: NewContract) -> Result<i64, StoreError>;

    /// Newest evaluation date first.
    async fn all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError>;

    /// Newest training date first.
    async fn all_trainings(&self) -> Result<Vec<Training>, StoreError>;

    async fn add_evaluation(&self, evaluation: NewEvaluation) -> Result<i64, StoreError>;

    async fn add_training(&self, training: NewTraining) -> Result<i64, StoreError>;

    /// "first last", or `None` when the employee does not exist.
    async fn employee_name(&self, employee_id: i64) -> Result<Option<String>, StoreError>;

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<i64, StoreError>;

    /// Releases the underlying connections. Called once at shutdown.
    async fn close(&self);
}
