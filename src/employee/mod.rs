mod record;
mod slip;

pub use record::{ContractualPay, Directory, Employee, EmployeeKind, Identity, PermanentPay};
pub use slip::{render_details, render_pay_slip, slip_file_name};
