use async_trait::async_trait;
use chrono::Local;
use sqlx::MySqlPool;
use tracing::{debug, instrument};

use super::{AdditionalInfo, GeneralInfo, HrStore, NewContract, NewEvaluation, NewTraining};
use crate::error::StoreError;
use crate::model::afp::Afp;
use crate::model::company::Company;
use crate::model::contract::Contract;
use crate::model::department::Department;
use crate::model::employee::{Employee, full_name};
use crate::model::evaluation::Evaluation;
use crate::model::health_plan::{Fonasa, HealthPlan, HealthPlanSummary, Isapre};
use crate::model::job_position::{EmployeePosition, JobPosition};
use crate::model::remuneration::{Bonus, Remuneration};
use crate::model::training::Training;
use crate::model::user::User;
use crate::model::vacation::Vacation;

// DECIMAL columns are cast so they decode straight into f64.
const EMPLOYEE_COLUMNS: &str = r#"
    id, rut, first_name, last_name, birth_date, start_date, phone,
    CAST(salary AS DOUBLE) AS salary, nationality
"#;

const REMUNERATION_COLUMNS: &str = r#"
    id, employee_id, afp_id, health_plan_id,
    CAST(gross_amount AS DOUBLE) AS gross_amount,
    CAST(tax AS DOUBLE) AS tax,
    CAST(deductions AS DOUBLE) AS deductions,
    CAST(bonus AS DOUBLE) AS bonus,
    CAST(welfare_contribution AS DOUBLE) AS welfare_contribution,
    CAST(net_amount AS DOUBLE) AS net_amount
"#;

pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn employee(&self, employee_id: i64) -> Result<Option<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM `Employee` WHERE id = ?");
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn ensure_employee(&self, employee_id: i64) -> Result<(), StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM `Employee` WHERE id = ?")
            .bind(employee_id)
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            Ok(())
        } else {
            Err(StoreError::MissingEmployee(employee_id))
        }
    }

    async fn health_plan(&self, plan_id: i64) -> Result<Option<HealthPlanSummary>, StoreError> {
        let plan = sqlx::query_as::<_, HealthPlan>(
            "SELECT id, name, `type` FROM `HealthPlan` WHERE id = ?",
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(plan) = plan else {
            return Ok(None);
        };

        let fonasa = sqlx::query_as::<_, Fonasa>(
            r#"
            SELECT id, health_plan_id, CAST(discount AS DOUBLE) AS discount
            FROM `Fonasa`
            WHERE health_plan_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        let isapre = sqlx::query_as::<_, Isapre>(
            r#"
            SELECT id, health_plan_id, CAST(discount AS DOUBLE) AS discount
            FROM `Isapre`
            WHERE health_plan_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(Some(HealthPlanSummary::new(plan, fonasa.as_ref(), isapre.as_ref())))
    }
}

#[async_trait]
impl HrStore for MySqlStore {
    async fn all_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM `Employee` ORDER BY id");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    #[instrument(skip(self))]
    async fn general_info(&self, employee_id: i64) -> Result<Option<GeneralInfo>, StoreError> {
        let Some(employee) = self.employee(employee_id).await? else {
            debug!("Employee not found");
            return Ok(None);
        };

        let link = sqlx::query_as::<_, EmployeePosition>(
            r#"
            SELECT employee_id, position_id
            FROM `EmployeePosition`
            WHERE employee_id = ?
            ORDER BY position_id
            LIMIT 1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        let position = match link {
            Some(link) => {
                sqlx::query_as::<_, JobPosition>(
                    "SELECT id, name, description, department_id FROM `JobPosition` WHERE id = ?",
                )
                .bind(link.position_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => None,
        };

        let department = match position.as_ref().and_then(|p| p.department_id) {
            Some(department_id) => {
                sqlx::query_as::<_, Department>("SELECT id, name FROM `Department` WHERE id = ?")
                    .bind(department_id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            None => None,
        };

        Ok(Some(GeneralInfo {
            employee,
            position,
            department,
        }))
    }

    #[instrument(skip(self))]
    async fn additional_info(&self, employee_id: i64) -> Result<AdditionalInfo, StoreError> {
        let sql = format!(
            "SELECT {REMUNERATION_COLUMNS} FROM `Remuneration` WHERE employee_id = ? ORDER BY id DESC LIMIT 1"
        );
        let remuneration = sqlx::query_as::<_, Remuneration>(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(remuneration) = remuneration else {
            debug!("No remuneration on record");
            return Ok(AdditionalInfo::default());
        };

        let pension_fund = match remuneration.afp_id {
            Some(afp_id) => {
                sqlx::query_as::<_, Afp>(
                    r#"
                    SELECT id, name, CAST(commission_percentage AS DOUBLE) AS commission_percentage
                    FROM `AFP`
                    WHERE id = ?
                    "#,
                )
                .bind(afp_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => None,
        };

        let health_plan = match remuneration.health_plan_id {
            Some(plan_id) => self.health_plan(plan_id).await?,
            None => None,
        };

        let bonuses = sqlx::query_as::<_, Bonus>(
            r#"
            SELECT id, remuneration_id, CAST(benefit AS DOUBLE) AS benefit
            FROM `Bonus`
            WHERE remuneration_id = ?
            ORDER BY id
            "#,
        )
        .bind(remuneration.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(AdditionalInfo {
            remuneration: Some(remuneration),
            pension_fund,
            health_plan,
            bonuses,
        })
    }

    async fn contracts_for(&self, employee_id: i64) -> Result<Vec<Contract>, StoreError> {
        let contracts = sqlx::query_as::<_, Contract>(
            r#"
            SELECT id, employee_id, contract_type, start_date, end_date,
                   classification, department_id, registration_date
            FROM `Contract`
            WHERE employee_id = ?
            ORDER BY start_date DESC, id DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(contracts)
    }

    async fn vacations_for(&self, employee_id: i64) -> Result<Vec<Vacation>, StoreError> {
        let vacations = sqlx::query_as::<_, Vacation>(
            r#"
            SELECT id, employee_id, start_date, end_date, days_taken,
                   accumulated_days, long_service_employee
            FROM `Vacation`
            WHERE employee_id = ?
            ORDER BY start_date DESC, id DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(vacations)
    }

    async fn all_companies(&self) -> Result<Vec<Company>, StoreError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, rut, name, address, phone, industry FROM `Company` ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(companies)
    }

    #[instrument(skip(self, contract), fields(employee_id = contract.employee_id))]
    async fn add_contract(&self, contract: NewContract) -> Result<i64, StoreError> {
        self.ensure_employee(contract.employee_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO `Contract`
            (employee_id, contract_type, start_date, end_date, classification, registration_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(contract.employee_id)
        .bind(&contract.contract_type)
        .bind(contract.start_date)
        .bind(contract.end_date)
        .bind(&contract.classification)
        .bind(Local::now().date_naive())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        let evaluations = sqlx::query_as::<_, Evaluation>(
            r#"
            SELECT id, employee_id, evaluation_date, evaluator,
                   CAST(evaluation_factor AS DOUBLE) AS evaluation_factor,
                   rating, comments
            FROM `Evaluation`
            ORDER BY evaluation_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(evaluations)
    }

    async fn all_trainings(&self) -> Result<Vec<Training>, StoreError> {
        let trainings = sqlx::query_as::<_, Training>(
            r#"
            SELECT id, employee_id, training_date, course,
                   CAST(score AS DOUBLE) AS score,
                   institution, comments
            FROM `Training`
            ORDER BY training_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(trainings)
    }

    #[instrument(skip(self, evaluation), fields(employee_id = evaluation.employee_id))]
    async fn add_evaluation(&self, evaluation: NewEvaluation) -> Result<i64, StoreError> {
        self.ensure_employee(evaluation.employee_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO `Evaluation`
            (employee_id, evaluation_date, evaluator, evaluation_factor, rating, comments)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(evaluation.employee_id)
        .bind(evaluation.evaluation_date)
        .bind(&evaluation.evaluator)
        .bind(evaluation.evaluation_factor)
        .bind(&evaluation.rating)
        .bind(&evaluation.comments)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    #[instrument(skip(self, training), fields(employee_id = training.employee_id))]
    async fn add_training(&self, training: NewTraining) -> Result<i64, StoreError> {
        self.ensure_employee(training.employee_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO `Training`
            (employee_id, training_date, course, score, institution, comments)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(training.employee_id)
        .bind(training.training_date)
        .bind(&training.course)
        .bind(training.score)
        .bind(&training.institution)
        .bind(&training.comments)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn employee_name(&self, employee_id: i64) -> Result<Option<String>, StoreError> {
        let row = sqlx::query_as::<_, (Option<String>, Option<String>)>(
            "SELECT first_name, last_name FROM `Employee` WHERE id = ?",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(|(first, last)| full_name(first.as_deref(), last.as_deref()))
            .filter(|name| !name.is_empty()))
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM `User` WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO `User` (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id() as i64)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
