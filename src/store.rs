use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::employee::Employee;
use crate::error::{PayslipError, Result};
use crate::overtime::OvertimeEntry;

pub const EMPLOYEE_STORE: &str = "employees.jsonl";
pub const OVERTIME_STORE: &str = "overtime.jsonl";

/// Append one employee record to the store. The store is never read
/// back before a write; each call adds exactly one line.
pub fn append_employee(data_dir: &Path, employee: &Employee) -> Result<()> {
    let path = data_dir.join(EMPLOYEE_STORE);
    let line = encode(&path, employee)?;

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Load every employee record, in the order written. A missing store
/// is an empty one.
pub fn load_employees(data_dir: &Path) -> Result<Vec<Employee>> {
    read_records(data_dir.join(EMPLOYEE_STORE))
}

/// Rewrite the whole overtime store from the in-memory ledger. Saving
/// twice with no new entries leaves exactly the same contents.
pub fn save_overtime(data_dir: &Path, entries: &[OvertimeEntry]) -> Result<()> {
    let path = data_dir.join(OVERTIME_STORE);

    let mut content = String::new();
    for entry in entries {
        content.push_str(&encode(&path, entry)?);
        content.push('\n');
    }

    fs::write(path, content)?;
    Ok(())
}

/// Load the overtime ledger; missing store is an empty ledger.
pub fn load_overtime(data_dir: &Path) -> Result<Vec<OvertimeEntry>> {
    read_records(data_dir.join(OVERTIME_STORE))
}

fn encode<T: Serialize>(path: &Path, record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(|e| PayslipError::StoreEncode {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_records<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| PayslipError::StoreDecode {
            path: path.clone(),
            line: idx + 1,
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rates;
    use crate::employee::Identity;
    use crate::overtime::Ledger;
    use tempfile::TempDir;

    fn identity(number: u32) -> Identity {
        Identity {
            number,
            name: format!("Employee {number}"),
            address: "1 Side Street".to_string(),
            department: "Ops".to_string(),
            designation: "Operator".to_string(),
        }
    }

    #[test]
    fn missing_stores_load_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_employees(dir.path()).unwrap().is_empty());
        assert!(load_overtime(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn each_append_adds_exactly_one_record() {
        let dir = TempDir::new().unwrap();
        let rates = Rates::default();

        append_employee(
            dir.path(),
            &Employee::permanent(identity(1), 50000.0, 1000.0, &rates),
        )
        .unwrap();
        assert_eq!(load_employees(dir.path()).unwrap().len(), 1);

        append_employee(
            dir.path(),
            &Employee::contractual(identity(2), 40000.0, 500.0, &rates),
        )
        .unwrap();

        let loaded = load_employees(dir.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].variant_label(), "Permanent");
        assert_eq!(loaded[1].variant_label(), "Contractual");
        assert_eq!(loaded[1].net_salary(), 39300.0);
    }

    #[test]
    fn mixed_variants_round_trip_in_written_order() {
        let dir = TempDir::new().unwrap();
        let rates = Rates::default();

        for n in 1..=4 {
            let employee = if n % 2 == 0 {
                Employee::contractual(identity(n), 30000.0, 0.0, &rates)
            } else {
                Employee::permanent(identity(n), 30000.0, 0.0, &rates)
            };
            append_employee(dir.path(), &employee).unwrap();
        }

        let numbers: Vec<u32> = load_employees(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn overtime_save_replaces_rather_than_appends() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::default();
        ledger.add_entry(1, "A".to_string(), 3.0);
        ledger.add_entry(2, "B".to_string(), 5.0);

        save_overtime(dir.path(), ledger.entries()).unwrap();
        save_overtime(dir.path(), ledger.entries()).unwrap();

        let loaded = load_overtime(dir.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].dues, 2000.0);
    }

    #[test]
    fn corrupt_store_line_is_reported_with_position() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(EMPLOYEE_STORE), "{not json}\n").unwrap();

        let err = load_employees(dir.path()).unwrap_err();
        match err {
            PayslipError::StoreDecode { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
