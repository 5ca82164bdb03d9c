pub mod afp;
pub mod company;
pub mod contract;
pub mod department;
pub mod employee;
pub mod evaluation;
pub mod health_plan;
pub mod job_position;
pub mod remuneration;
pub mod training;
pub mod user;
pub mod vacation;
