use serde::{Deserialize, Serialize};

/// Flat rate applied to every overtime hour.
pub const OVERTIME_RATE_PER_HOUR: f64 = 400.0;

/// One overtime booking. `name` is denormalized and never checked
/// against the employee directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OvertimeEntry {
    pub number: u32,
    pub name: String,
    pub hours: f64,
    pub dues: f64,
}

/// Append-only list of overtime entries for the current run. The
/// on-disk ledger is rewritten wholesale on each save.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<OvertimeEntry>,
}

impl Ledger {
    pub fn from_entries(entries: Vec<OvertimeEntry>) -> Self {
        Self { entries }
    }

    /// Computes and returns the dues, appending the entry. No
    /// existence or duplicate checks.
    pub fn add_entry(&mut self, number: u32, name: String, hours: f64) -> f64 {
        let dues = hours * OVERTIME_RATE_PER_HOUR;
        self.entries.push(OvertimeEntry {
            number,
            name,
            hours,
            dues,
        });
        dues
    }

    /// Entries in insertion order; re-enumerable, non-mutating.
    pub fn iter(&self) -> impl Iterator<Item = &OvertimeEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[OvertimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
