use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use super::{AdditionalInfo, GeneralInfo, HrStore, NewContract, NewEvaluation, NewTraining};
use crate::error::StoreError;
use crate::model::afp::Afp;
use crate::model::company::Company;
use crate::model::contract::Contract;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::evaluation::Evaluation;
use crate::model::health_plan::{Fonasa, HealthPlan, HealthPlanSummary, Isapre};
use crate::model::job_position::{EmployeePosition, JobPosition};
use crate::model::remuneration::{Bonus, Remuneration};
use crate::model::training::Training;
use crate::model::user::User;
use crate::model::vacation::Vacation;

#[derive(Default)]
pub struct Tables {
    pub companies: Vec<Company>,
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub positions: Vec<JobPosition>,
    pub employee_positions: BTreeSet<EmployeePosition>,
    pub afps: Vec<Afp>,
    pub health_plans: Vec<HealthPlan>,
    pub fonasa: Vec<Fonasa>,
    pub isapre: Vec<Isapre>,
    pub remunerations: Vec<Remuneration>,
    pub bonuses: Vec<Bonus>,
    pub contracts: Vec<Contract>,
    pub vacations: Vec<Vacation>,
    pub evaluations: Vec<Evaluation>,
    pub trainings: Vec<Training>,
    pub users: Vec<User>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        1000 + self.next_id
    }

    fn ensure_employee(&self, employee_id: i64) -> Result<(), StoreError> {
        if self.employees.iter().any(|e| e.id == employee_id) {
            Ok(())
        } else {
            Err(StoreError::MissingEmployee(employee_id))
        }
    }
}

/// In-memory stand-in for MySQL. Enforces the same employee references the
/// foreign keys do.
#[derive(Default)]
pub struct FakeStore {
    tables: Mutex<Tables>,
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

impl FakeStore {
    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    /// Employee 1 has a full record, employee 2 has nothing beyond identity.
    pub fn seeded() -> Self {
        let store = FakeStore::default();
        {
            let mut t = store.tables();
            t.employees.push(Employee {
                id: 1,
                rut: Some("12.345.678-9".into()),
                first_name: Some("Camila".into()),
                last_name: Some("Rojas".into()),
                birth_date: date(1990, 4, 12),
                start_date: date(2021, 3, 1),
                phone: Some("+56912345678".into()),
                salary: Some(1_250_000.0),
                nationality: Some("Chilean".into()),
            });
            t.employees.push(Employee {
                id: 2,
                rut: Some("9.876.543-2".into()),
                first_name: Some("Diego".into()),
                last_name: Some("Soto".into()),
                birth_date: None,
                start_date: date(2023, 8, 14),
                phone: Some("+56987654321".into()),
                salary: None,
                nationality: None,
            });

            t.departments.push(Department { id: 3, name: Some("Finance".into()) });
            t.positions.push(JobPosition {
                id: 10,
                name: Some("Analyst".into()),
                description: Some("Financial reporting".into()),
                department_id: Some(3),
            });
            t.positions.push(JobPosition {
                id: 11,
                name: Some("Team Lead".into()),
                description: None,
                department_id: Some(3),
            });
            t.employee_positions.insert(EmployeePosition { employee_id: 1, position_id: 11 });
            t.employee_positions.insert(EmployeePosition { employee_id: 1, position_id: 10 });

            t.afps.push(Afp { id: 5, name: Some("Habitat".into()), commission_percentage: Some(1.27) });
            t.health_plans.push(HealthPlan {
                id: 7,
                name: Some("Banmedica".into()),
                plan_type: Some("isapre".into()),
            });
            t.isapre.push(Isapre { id: 1, health_plan_id: Some(7), discount: Some(9.5) });

            t.remunerations.push(Remuneration {
                id: 100,
                employee_id: Some(1),
                afp_id: Some(5),
                health_plan_id: None,
                gross_amount: Some(1_100_000.0),
                tax: Some(4.0),
                deductions: Some(200_000.0),
                bonus: None,
                welfare_contribution: None,
                net_amount: Some(900_000.0),
            });
            t.remunerations.push(Remuneration {
                id: 101,
                employee_id: Some(1),
                afp_id: Some(5),
                health_plan_id: Some(7),
                gross_amount: Some(1_250_000.0),
                tax: Some(4.0),
                deductions: Some(320_000.0),
                bonus: Some(20_000.0),
                welfare_contribution: Some(5_000.0),
                net_amount: Some(955_000.0),
            });
            t.bonuses.push(Bonus { id: 1, remuneration_id: Some(101), benefit: Some(20_000.0) });

            t.companies.push(Company {
                id: 1,
                rut: Some("76.123.456-7".into()),
                name: Some("Servicios Andinos SpA".into()),
                address: Some("Av. Providencia 1234".into()),
                phone: None,
                industry: Some("Consulting".into()),
            });
            t.companies.push(Company {
                id: 2,
                rut: Some("77.555.000-1".into()),
                name: Some("Austral Logistica".into()),
                address: None,
                phone: None,
                industry: Some("Logistics".into()),
            });

            t.evaluations.push(Evaluation {
                id: 1,
                employee_id: Some(1),
                evaluation_date: date(2024, 6, 30),
                evaluator: Some("Marta Diaz".into()),
                evaluation_factor: Some(1.5),
                rating: Some("good".into()),
                comments: Some("Solid semester".into()),
            });
            t.trainings.push(Training {
                id: 1,
                employee_id: Some(2),
                training_date: date(2024, 5, 2),
                course: Some("Workplace safety".into()),
                score: Some(6.4),
                institution: Some("ACHS".into()),
                comments: None,
            });
        }
        store
    }
}

#[async_trait]
impl HrStore for FakeStore {
    async fn all_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let mut employees = self.tables().employees.clone();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    async fn general_info(&self, employee_id: i64) -> Result<Option<GeneralInfo>, StoreError> {
        let t = self.tables();
        let Some(employee) = t.employees.iter().find(|e| e.id == employee_id).cloned() else {
            return Ok(None);
        };
        // BTreeSet iterates pairs in (employee_id, position_id) order.
        let position = t
            .employee_positions
            .iter()
            .find(|link| link.employee_id == employee_id)
            .and_then(|link| t.positions.iter().find(|p| p.id == link.position_id))
            .cloned();
        let department = position
            .as_ref()
            .and_then(|p| p.department_id)
            .and_then(|id| t.departments.iter().find(|d| d.id == id))
            .cloned();
        Ok(Some(GeneralInfo {
            employee,
            position,
            department,
        }))
    }

    async fn additional_info(&self, employee_id: i64) -> Result<AdditionalInfo, StoreError> {
        let t = self.tables();
        let Some(remuneration) = t
            .remunerations
            .iter()
            .filter(|r| r.employee_id == Some(employee_id))
            .max_by_key(|r| r.id)
            .cloned()
        else {
            return Ok(AdditionalInfo::default());
        };

        let pension_fund = remuneration
            .afp_id
            .and_then(|id| t.afps.iter().find(|a| a.id == id))
            .cloned();
        let health_plan = remuneration
            .health_plan_id
            .and_then(|id| t.health_plans.iter().find(|p| p.id == id))
            .map(|plan| {
                let fonasa = t.fonasa.iter().find(|f| f.health_plan_id == Some(plan.id));
                let isapre = t.isapre.iter().find(|i| i.health_plan_id == Some(plan.id));
                HealthPlanSummary::new(plan.clone(), fonasa, isapre)
            });
        let bonuses = t
            .bonuses
            .iter()
            .filter(|b| b.remuneration_id == Some(remuneration.id))
            .cloned()
            .collect();

        Ok(AdditionalInfo {
            remuneration: Some(remuneration),
            pension_fund,
            health_plan,
            bonuses,
        })
    }

    async fn contracts_for(&self, employee_id: i64) -> Result<Vec<Contract>, StoreError> {
        let t = self.tables();
        let mut contracts: Vec<Contract> = t
            .contracts
            .iter()
            .filter(|c| c.employee_id == Some(employee_id))
            .cloned()
            .collect();
        contracts.sort_by(|a, b| (b.start_date, b.id).cmp(&(a.start_date, a.id)));
        Ok(contracts)
    }

    async fn vacations_for(&self, employee_id: i64) -> Result<Vec<Vacation>, StoreError> {
        let t = self.tables();
        let mut vacations: Vec<Vacation> = t
            .vacations
            .iter()
            .filter(|v| v.employee_id == Some(employee_id))
            .cloned()
            .collect();
        vacations.sort_by(|a, b| (b.start_date, b.id).cmp(&(a.start_date, a.id)));
        Ok(vacations)
    }

    async fn all_companies(&self) -> Result<Vec<Company>, StoreError> {
        let mut companies = self.tables().companies.clone();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn add_contract(&self, contract: NewContract) -> Result<i64, StoreError> {
        let mut t = self.tables();
        t.ensure_employee(contract.employee_id)?;
        let id = t.next_id();
        t.contracts.push(Contract {
            id,
            employee_id: Some(contract.employee_id),
            contract_type: Some(contract.contract_type),
            start_date: Some(contract.start_date),
            end_date: Some(contract.end_date),
            classification: Some(contract.classification),
            department_id: None,
            registration_date: Some(Local::now().date_naive()),
        });
        Ok(id)
    }

    async fn all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        let mut evaluations = self.tables().evaluations.clone();
        evaluations.sort_by(|a, b| (b.evaluation_date, b.id).cmp(&(a.evaluation_date, a.id)));
        Ok(evaluations)
    }

    async fn all_trainings(&self) -> Result<Vec<Training>, StoreError> {
        let mut trainings = self.tables().trainings.clone();
        trainings.sort_by(|a, b| (b.training_date, b.id).cmp(&(a.training_date, a.id)));
        Ok(trainings)
    }

    async fn add_evaluation(&self, evaluation: NewEvaluation) -> Result<i64, StoreError> {
        let mut t = self.tables();
        t.ensure_employee(evaluation.employee_id)?;
        let id = t.next_id();
        t.evaluations.push(Evaluation {
            id,
            employee_id: Some(evaluation.employee_id),
            evaluation_date: Some(evaluation.evaluation_date),
            evaluator: Some(evaluation.evaluator),
            evaluation_factor: Some(evaluation.evaluation_factor),
            rating: Some(evaluation.rating),
            comments: Some(evaluation.comments),
        });
        Ok(id)
    }

    async fn add_training(&self, training: NewTraining) -> Result<i64, StoreError> {
        let mut t = self.tables();
        t.ensure_employee(training.employee_id)?;
        let id = t.next_id();
        t.trainings.push(Training {
            id,
            employee_id: Some(training.employee_id),
            training_date: Some(training.training_date),
            course: Some(training.course),
            score: Some(training.score),
            institution: Some(training.institution),
            comments: Some(training.comments),
        });
        Ok(id)
    }

    async fn employee_name(&self, employee_id: i64) -> Result<Option<String>, StoreError> {
        let t = self.tables();
        Ok(t.employees
            .iter()
            .find(|e| e.id == employee_id)
            .map(Employee::full_name)
            .filter(|name| !name.is_empty()))
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let t = self.tables();
        Ok(t.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<i64, StoreError> {
        let mut t = self.tables();
        let id = t.next_id();
        t.users.push(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(id)
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn general_info_uses_the_lowest_position_id() {
        let store = FakeStore::seeded();
        let info = store.general_info(1).await.unwrap().unwrap();
        assert_eq!(info.position_name(), Some("Analyst"));
        assert_eq!(info.department.and_then(|d| d.name).as_deref(), Some("Finance"));
        assert!(store.general_info(99).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn additional_info_reads_the_latest_remuneration() {
        let store = FakeStore::seeded();
        let info = store.additional_info(1).await.unwrap();
        assert_eq!(info.net_amount(), Some(955_000.0));
        assert_eq!(info.bonuses.len(), 1);
        assert_eq!(info.health_plan.unwrap().label(), "Banmedica (Isapre, discount 9.50)");

        let empty = store.additional_info(2).await.unwrap();
        assert!(empty.net_amount().is_none());
        assert!(empty.health_plan.is_none());
    }

    #[actix_web::test]
    async fn contracts_and_vacations_come_newest_first() {
        let store = FakeStore::seeded();
        for (start, end) in [
            (date(2022, 1, 1), date(2022, 12, 31)),
            (date(2024, 5, 1), date(2024, 11, 30)),
            (date(2023, 2, 1), date(2023, 8, 31)),
        ] {
            store
                .add_contract(NewContract {
                    employee_id: 1,
                    contract_type: "fixed".into(),
                    start_date: start.unwrap(),
                    end_date: end.unwrap(),
                    classification: "professional".into(),
                })
                .await
                .unwrap();
        }
        let starts: Vec<_> = store
            .contracts_for(1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.start_date.unwrap().to_string())
            .collect();
        assert_eq!(starts, ["2024-05-01", "2023-02-01", "2022-01-01"]);

        {
            let mut t = store.tables();
            for (id, start) in [(1, date(2023, 1, 9)), (2, date(2025, 7, 1)), (3, date(2023, 1, 9))] {
                t.vacations.push(Vacation {
                    id,
                    employee_id: Some(1),
                    start_date: start,
                    end_date: None,
                    days_taken: Some(5),
                    accumulated_days: None,
                    long_service_employee: None,
                });
            }
        }
        let ids: Vec<i64> = store.vacations_for(1).await.unwrap().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[actix_web::test]
    async fn writes_reject_unknown_employees() {
        let store = FakeStore::seeded();
        let err = store
            .add_training(NewTraining {
                employee_id: 42,
                training_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                course: "Excel".into(),
                score: 5.0,
                institution: "SENCE".into(),
                comments: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingEmployee(42)));
        assert_eq!(store.tables().trainings.len(), 1);
    }
}
