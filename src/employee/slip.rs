use super::{Employee, EmployeeKind};

const SLIP_BANNER: &str =
    "////////////////////////////////////Pay Slip////////////////////////////////////";

/// File name for an employee's pay slip; one document per employee
/// number, overwritten on re-render.
pub fn slip_file_name(number: u32) -> String {
    format!("payslip_{number}.txt")
}

/// Render the pay-slip document: banner, identity block, variant
/// label, then the variant's financial fields fixed to two decimals.
pub fn render_pay_slip(employee: &Employee) -> String {
    let mut out = String::new();

    out.push_str(SLIP_BANNER);
    out.push_str("\n\n");
    out.push_str(&format!("Employee Number: {}\n", employee.number));
    out.push_str(&format!("Employee Name: {}\n", employee.name));
    out.push_str(&format!("Address: {}\n", employee.address));
    out.push_str(&format!("Designation: {}\n", employee.designation));
    out.push_str(&format!("Department: {}\n", employee.department));
    out.push_str(&format!("Employee Type: {}\n\n", employee.variant_label()));
    out.push_str(&financial_block(employee));

    out
}

/// Console-oriented view of every field on the record.
pub fn render_details(employee: &Employee) -> String {
    let mut out = String::new();

    out.push_str("Employee Details:\n");
    out.push_str(&format!("Number: {}\n", employee.number));
    out.push_str(&format!("Name: {}\n", employee.name));
    out.push_str(&format!("Address: {}\n", employee.address));
    out.push_str(&format!("Department: {}\n", employee.department));
    out.push_str(&format!("Designation: {}\n", employee.designation));
    out.push_str(&format!("Type: {}\n", employee.variant_label()));
    out.push_str(&financial_block(employee));

    out
}

/// Variant-specific salary fields in declaration order, two decimals.
fn financial_block(employee: &Employee) -> String {
    match &employee.kind {
        EmployeeKind::Permanent(pay) => format!(
            "Basic Salary: {:.2}\n\
             Dearness Allowance: {:.2}\n\
             House Rent Allowance: {:.2}\n\
             Medical Allowance: {:.2}\n\
             Provident Fund: {:.2}\n\
             Professional Tax: {:.2}\n\
             Income Tax: {:.2}\n\
             Gross Salary: {:.2}\n\
             Net Salary: {:.2}\n",
            pay.basic_salary,
            pay.dearness_allowance,
            pay.house_rent_allowance,
            pay.medical_allowance,
            pay.provident_fund,
            pay.professional_tax,
            pay.income_tax,
            pay.gross_salary,
            pay.net_salary,
        ),
        EmployeeKind::Contractual(pay) => format!(
            "Gross Salary: {:.2}\n\
             Professional Tax: {:.2}\n\
             Income Tax: {:.2}\n\
             Net Salary: {:.2}\n",
            pay.gross_salary, pay.professional_tax, pay.income_tax, pay.net_salary,
        ),
    }
}
