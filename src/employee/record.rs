use serde::{Deserialize, Serialize};

use crate::config::Rates;

/// Common identity fields shared by both employee variants.
/// Uniqueness of `number` is not enforced.
#[derive(Debug, Clone)]
pub struct Identity {
    pub number: u32,
    pub name: String,
    pub address: String,
    pub department: String,
    pub designation: String,
}

/// A payroll record. Salary fields are computed once, at creation,
/// from the rates in effect at that moment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Employee {
    pub number: u32,
    pub name: String,
    pub address: String,
    pub department: String,
    pub designation: String,
    #[serde(flatten)]
    pub kind: EmployeeKind,
}

/// The two employee variants, each with its own pay structure.
/// The serde tag makes every stored record self-describing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum EmployeeKind {
    Permanent(PermanentPay),
    Contractual(ContractualPay),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PermanentPay {
    pub basic_salary: f64,
    pub dearness_allowance: f64,
    pub house_rent_allowance: f64,
    pub medical_allowance: f64,
    pub provident_fund: f64,
    pub professional_tax: f64,
    pub income_tax: f64,
    pub gross_salary: f64,
    pub net_salary: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContractualPay {
    pub gross_salary: f64,
    pub professional_tax: f64,
    pub income_tax: f64,
    pub net_salary: f64,
}

impl PermanentPay {
    /// Full salary breakdown from basic salary and income tax.
    /// `medical_allowance` and `professional_tax` are copied from the
    /// rates snapshot; later rate changes do not touch this record.
    /// Inputs are not validated; negative values propagate.
    pub fn compute(basic_salary: f64, income_tax: f64, rates: &Rates) -> Self {
        let dearness_allowance = basic_salary * (rates.da_rate / 100.0);
        let house_rent_allowance = basic_salary * (rates.hra_rate / 100.0);
        let provident_fund = (basic_salary + dearness_allowance) * 0.12;

        let gross_salary =
            basic_salary + dearness_allowance + house_rent_allowance + rates.medical_allowance;
        let net_salary = gross_salary - (provident_fund + rates.professional_tax + income_tax);

        Self {
            basic_salary,
            dearness_allowance,
            house_rent_allowance,
            medical_allowance: rates.medical_allowance,
            provident_fund,
            professional_tax: rates.professional_tax,
            income_tax,
            gross_salary,
            net_salary,
        }
    }
}

impl ContractualPay {
    /// Gross salary is supplied, not derived; only net is computed.
    pub fn compute(gross_salary: f64, income_tax: f64, rates: &Rates) -> Self {
        let professional_tax = rates.professional_tax;
        let net_salary = gross_salary - (professional_tax + income_tax);

        Self {
            gross_salary,
            professional_tax,
            income_tax,
            net_salary,
        }
    }
}

impl Employee {
    pub fn permanent(identity: Identity, basic_salary: f64, income_tax: f64, rates: &Rates) -> Self {
        Self::new(
            identity,
            EmployeeKind::Permanent(PermanentPay::compute(basic_salary, income_tax, rates)),
        )
    }

    pub fn contractual(
        identity: Identity,
        gross_salary: f64,
        income_tax: f64,
        rates: &Rates,
    ) -> Self {
        Self::new(
            identity,
            EmployeeKind::Contractual(ContractualPay::compute(gross_salary, income_tax, rates)),
        )
    }

    fn new(identity: Identity, kind: EmployeeKind) -> Self {
        Self {
            number: identity.number,
            name: identity.name,
            address: identity.address,
            department: identity.department,
            designation: identity.designation,
            kind,
        }
    }

    pub fn variant_label(&self) -> &'static str {
        match self.kind {
            EmployeeKind::Permanent(_) => "Permanent",
            EmployeeKind::Contractual(_) => "Contractual",
        }
    }

    pub fn gross_salary(&self) -> f64 {
        match &self.kind {
            EmployeeKind::Permanent(pay) => pay.gross_salary,
            EmployeeKind::Contractual(pay) => pay.gross_salary,
        }
    }

    pub fn net_salary(&self) -> f64 {
        match &self.kind {
            EmployeeKind::Permanent(pay) => pay.net_salary,
            EmployeeKind::Contractual(pay) => pay.net_salary,
        }
    }
}

/// In-memory collection of employee records, in insertion order.
/// Records are never removed during a run.
#[derive(Debug, Default)]
pub struct Directory {
    records: Vec<Employee>,
}

impl Directory {
    pub fn from_records(records: Vec<Employee>) -> Self {
        Self { records }
    }

    /// Appends in insertion order and hands back the stored record so
    /// the caller can persist exactly what the directory holds.
    pub fn add(&mut self, employee: Employee) -> &Employee {
        self.records.push(employee);
        &self.records[self.records.len() - 1]
    }

    /// Linear scan; the first-inserted match wins when numbers collide.
    pub fn find_by_number(&self, number: u32) -> Option<&Employee> {
        self.records.iter().find(|e| e.number == number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
