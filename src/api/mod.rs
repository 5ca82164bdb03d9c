pub mod company;
pub mod contract;
pub mod employee;
pub mod train_eval;
pub mod vacation;
