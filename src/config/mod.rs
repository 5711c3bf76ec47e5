mod rates;

pub use rates::{Config, OutputSettings, RateField, Rates};

use crate::error::{PayslipError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the data directory path (~/.payslip/ or XDG data dir)
pub fn data_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "payslip") {
        return Ok(proj_dirs.data_dir().to_path_buf());
    }

    // Fallback to ~/.payslip/
    let home = dirs_home().ok_or_else(|| {
        PayslipError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".payslip"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs_home() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

/// Resolve the pay-slip output directory: absolute and `~` paths are used
/// as-is, anything else is relative to the data directory.
pub fn resolve_slip_dir(slip_dir: &str, data_dir: &Path) -> PathBuf {
    let expanded = expand_path(slip_dir);
    if expanded.is_absolute() {
        expanded
    } else {
        data_dir.join(expanded)
    }
}

/// Load config.toml (defaults if missing, so rates start at the
/// built-in values on first use)
pub fn load_config(data_dir: &Path) -> Result<Config> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| PayslipError::ConfigParse { path, source: e })
}

/// Save config.toml
pub fn save_config(data_dir: &Path, config: &Config) -> Result<()> {
    let path = data_dir.join("config.toml");
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"# Salary rates used when an employee record is created. Each record
# keeps a copy of the values in effect at creation time; editing these
# (or running 'payslip set-rate') only affects future records.

[rates]
da_rate = 85.0              # dearness allowance, % of basic salary
hra_rate = 15.0             # house rent allowance, % of basic salary
medical_allowance = 300.0   # flat amount added to gross
professional_tax = 200.0    # flat deduction

[output]
slip_dir = "payslips"       # relative to the data directory, or absolute
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.rates.da_rate, 85.0);
        assert_eq!(config.output.slip_dir, "payslips");
    }

    #[test]
    fn config_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.rates.set(RateField::MedicalAllowance, 450.0);
        save_config(dir.path(), &config).unwrap();

        let loaded = load_config(dir.path()).unwrap();
        assert_eq!(loaded.rates.medical_allowance, 450.0);
        assert_eq!(loaded.rates.hra_rate, 15.0);
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.rates.professional_tax, 200.0);
    }

    #[test]
    fn slip_dir_resolution() {
        let data = Path::new("/data/payslip");
        assert_eq!(
            resolve_slip_dir("payslips", data),
            PathBuf::from("/data/payslip/payslips")
        );
        assert_eq!(resolve_slip_dir("/var/slips", data), PathBuf::from("/var/slips"));
    }
}
