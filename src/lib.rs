pub mod config;
pub mod employee;
pub mod error;
pub mod overtime;
pub mod store;

pub use config::{Config, RateField, Rates};
pub use employee::{Directory, Employee, EmployeeKind, Identity};
pub use error::{PayslipError, Result};
pub use overtime::{Ledger, OvertimeEntry};
