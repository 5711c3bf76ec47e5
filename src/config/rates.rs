use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DA_RATE: f64 = 85.0;
pub const DEFAULT_HRA_RATE: f64 = 15.0;
pub const DEFAULT_MEDICAL_ALLOWANCE: f64 = 300.0;
pub const DEFAULT_PROFESSIONAL_TAX: f64 = 200.0;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rates: Rates,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Adjustable salary rates. Employee records copy these at creation
/// time; changing a rate never touches already-created records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rates {
    pub da_rate: f64,
    pub hra_rate: f64,
    pub medical_allowance: f64,
    pub professional_tax: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            da_rate: DEFAULT_DA_RATE,
            hra_rate: DEFAULT_HRA_RATE,
            medical_allowance: DEFAULT_MEDICAL_ALLOWANCE,
            professional_tax: DEFAULT_PROFESSIONAL_TAX,
        }
    }
}

/// One adjustable rate field, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RateField {
    /// Dearness allowance rate (%)
    DaRate,
    /// House rent allowance rate (%)
    HraRate,
    /// Medical allowance (absolute amount)
    MedicalAllowance,
    /// Professional tax (absolute amount)
    ProfessionalTax,
}

impl Rates {
    /// Replaces one field unconditionally. Values are not range-checked.
    pub fn set(&mut self, field: RateField, value: f64) {
        match field {
            RateField::DaRate => self.da_rate = value,
            RateField::HraRate => self.hra_rate = value,
            RateField::MedicalAllowance => self.medical_allowance = value,
            RateField::ProfessionalTax => self.professional_tax = value,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Pay-slip output directory; `~` and data-dir-relative paths allowed.
    pub slip_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            slip_dir: "payslips".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_system_constants() {
        let rates = Rates::default();
        assert_eq!(rates.da_rate, 85.0);
        assert_eq!(rates.hra_rate, 15.0);
        assert_eq!(rates.medical_allowance, 300.0);
        assert_eq!(rates.professional_tax, 200.0);
    }

    #[test]
    fn set_replaces_single_field() {
        let mut rates = Rates::default();
        rates.set(RateField::DaRate, 90.0);
        assert_eq!(rates.da_rate, 90.0);
        assert_eq!(rates.hra_rate, 15.0);

        // No range validation: out-of-range and negative values stick.
        rates.set(RateField::HraRate, 250.0);
        assert_eq!(rates.hra_rate, 250.0);
        rates.set(RateField::ProfessionalTax, -50.0);
        assert_eq!(rates.professional_tax, -50.0);
    }
}
