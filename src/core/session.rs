//! Session state owned by the front end
//!
//! A [`Session`] bundles the ledger with the pricing and analysis settings it
//! is reported against. Front-end handlers borrow it; nothing is global.

use crate::analytics::{self, DEFAULT_REDUCTION_HOURS};
use crate::core::{
    AnalysisReport, ApplianceEntry, Config, Error, Result, SavingsTip, TierThresholds,
};
use crate::ledger::ApplianceLedger;
use crate::pricing::CostRateTable;
use std::sync::{Arc, Mutex, MutexGuard};

/// Ledger plus the settings its reports use
#[derive(Debug, Clone)]
pub struct Session {
    ledger: ApplianceLedger,
    rates: CostRateTable,
    thresholds: TierThresholds,
    reduction_hours: u8,
}

impl Session {
    /// Empty ledger with the default rate table and thresholds
    pub fn new() -> Self {
        Self {
            ledger: ApplianceLedger::new(),
            rates: CostRateTable::default(),
            thresholds: TierThresholds::default(),
            reduction_hours: DEFAULT_REDUCTION_HOURS,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            ledger: ApplianceLedger::new(),
            rates: CostRateTable::from_config(&config.pricing)?,
            thresholds: config.analysis.thresholds()?,
            reduction_hours: config.analysis.reduction_hours,
        })
    }

    pub fn ledger(&self) -> &ApplianceLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ApplianceLedger {
        &mut self.ledger
    }

    pub fn rates(&self) -> &CostRateTable {
        &self.rates
    }

    pub fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    pub fn reduction_hours(&self) -> u8 {
        self.reduction_hours
    }

    /// Usage report for the current ledger
    pub fn report(&self) -> Result<AnalysisReport> {
        analytics::build_usage_report_with(&self.ledger.snapshot(), &self.rates, self.thresholds)
    }

    /// Savings suggestions for the current ledger
    pub fn advice(&self) -> Result<Vec<SavingsTip>> {
        analytics::savings_advice(&self.ledger.snapshot(), &self.rates, self.reduction_hours)
    }

    pub fn top_consumers(&self, n: usize) -> Vec<ApplianceEntry> {
        analytics::top_consumers(&self.ledger.snapshot(), n)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Session shared between threads
///
/// Every ledger access goes through one mutex, so mutations and snapshots
/// never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session>> {
        self.inner
            .lock()
            .map_err(|e| Error::State(format!("session lock poisoned: {}", e)))
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Result<R> {
        let mut session = self.lock()?;
        Ok(f(&mut session))
    }

    pub fn add_or_update(&self, name: &str, hours: u32) -> Result<()> {
        self.lock()?.ledger_mut().add_or_update(name, hours)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        self.lock()?.ledger_mut().remove(name)
    }

    pub fn snapshot(&self) -> Result<Vec<ApplianceEntry>> {
        Ok(self.lock()?.ledger().snapshot())
    }

    pub fn report(&self) -> Result<AnalysisReport> {
        self.lock()?.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tier;
    use std::thread;

    #[test]
    fn test_session_report_uses_config() {
        let mut config = Config::default();
        config.analysis.moderate_threshold_hours = 5;
        config.pricing.default_rate = 1.0;

        let mut session = Session::from_config(&config).unwrap();
        session.ledger_mut().add_or_update("Lamp", 5).unwrap();

        let report = session.report().unwrap();
        assert_eq!(report.lines[0].tier, Tier::Efficient);
        assert_eq!(report.lines[0].daily_cost, 5.0);
    }

    #[test]
    fn test_session_empty_report() {
        let session = Session::new();
        assert!(matches!(session.report(), Err(Error::EmptyState(_))));
        assert!(matches!(session.advice(), Err(Error::EmptyState(_))));
        assert_eq!(session.reduction_hours(), DEFAULT_REDUCTION_HOURS);
    }

    #[test]
    fn test_session_advice() {
        let mut session = Session::new();
        session.ledger_mut().add_or_update("Fan", 6).unwrap();

        let tips = session.advice().unwrap();
        // Fan runs at 5.0/h in the default table
        assert_eq!(tips[0].savings, 10.0);
        assert_eq!(tips[0].reduce_by, 2);
    }

    #[test]
    fn test_shared_session_across_threads() {
        let shared = SharedSession::new(Session::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || shared.add_or_update(&format!("Appliance {}", i), 3))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(shared.snapshot().unwrap().len(), 8);
        assert_eq!(shared.with(|s| s.ledger().total_hours()).unwrap(), 24);

        shared.remove("Appliance 0").unwrap();
        assert_eq!(shared.report().unwrap().total_hours, 21);
    }
}
