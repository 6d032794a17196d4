//! Appliance usage ledger
//!
//! Holds the session's appliance → hours-per-day entries. Every report is
//! computed from a [`ApplianceLedger::snapshot`]; the ledger itself never
//! derives anything beyond the total.

use crate::core::{ApplianceEntry, Error, Result, MAX_HOURS_PER_DAY};
use indexmap::IndexMap;

/// Insertion-ordered map of appliance name to daily hours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplianceLedger {
    entries: IndexMap<String, u8>,
}

impl ApplianceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an appliance or replace its hours
    ///
    /// An existing entry keeps its position. On error the ledger is untouched.
    pub fn add_or_update(&mut self, name: &str, hours: u32) -> Result<()> {
        let name = validate_name(name)?;
        let hours = validate_hours(hours)?;

        match self.entries.insert(name.to_string(), hours) {
            Some(previous) => log::debug!("Updated {}: {} -> {} h/day", name, previous, hours),
            None => log::debug!("Added {}: {} h/day", name, hours),
        }
        Ok(())
    }

    /// Delete an appliance
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let key = name.trim();
        match self.entries.shift_remove(key) {
            Some(_) => {
                log::debug!("Removed {}", key);
                Ok(())
            }
            None => Err(Error::NotFound(key.to_string())),
        }
    }

    /// Copy of the entries in insertion order
    pub fn snapshot(&self) -> Vec<ApplianceEntry> {
        self.entries
            .iter()
            .map(|(name, hours)| ApplianceEntry::new(name, *hours))
            .collect()
    }

    /// Sum of daily hours across all appliances
    pub fn total_hours(&self) -> u32 {
        self.entries.values().map(|h| u32::from(*h)).sum()
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries.get(name.trim()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Parse the free-text hours field of the front end
///
/// Only plain digits are accepted, so signs and decimals are rejected.
pub fn parse_hours(text: &str) -> Result<u8> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::validation(format!("'{}' is not a whole number of hours", text)));
    }
    let hours: u32 = text
        .parse()
        .map_err(|_| Error::validation(format!("'{}' is out of range", text)))?;
    validate_hours(hours)
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("appliance name must not be empty"));
    }
    Ok(name)
}

fn validate_hours(hours: u32) -> Result<u8> {
    match u8::try_from(hours) {
        Ok(h) if h <= MAX_HOURS_PER_DAY => Ok(h),
        _ => Err(Error::validation(format!(
            "hours must be between 0 and {} (got {})",
            MAX_HOURS_PER_DAY, hours
        ))),
    }
}
