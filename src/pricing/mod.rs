//! Pricing for appliance running costs
//!
//! Two ways of turning daily hours into a daily cost:
//! - [`CostRateTable`]: fixed per-hour rate per appliance, default fallback
//! - [`CostModel`]: least-squares fit of daily cost against daily hours

mod model;

pub use model::{CostModel, REFERENCE_SAMPLES};

use crate::core::{Error, PricingConfig, Result};
use indexmap::IndexMap;

/// Something that can price an appliance's daily usage
pub trait CostEstimator {
    /// Estimated daily cost of running `name` for `hours` a day
    fn daily_cost(&self, name: &str, hours: f64) -> f64;

    /// Human-readable name of the pricing basis
    fn name(&self) -> &str;
}

/// Immutable per-hour cost rates with a default for unknown appliances
#[derive(Debug, Clone, PartialEq)]
pub struct CostRateTable {
    rates: IndexMap<String, f64>,
    default_rate: f64,
}

impl CostRateTable {
    /// Build a table, rejecting negative or non-finite rates
    pub fn new<I, S>(rates: I, default_rate: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        check_rate("default", default_rate)?;

        let mut table = IndexMap::new();
        for (name, rate) in rates {
            let name = name.into();
            check_rate(&name, rate)?;
            table.insert(name, rate);
        }

        Ok(Self {
            rates: table,
            default_rate,
        })
    }

    /// Table with no known appliances: every lookup yields `rate`
    pub fn flat(rate: f64) -> Result<Self> {
        Self::new(std::iter::empty::<(String, f64)>(), rate)
    }

    pub fn from_config(config: &PricingConfig) -> Result<Self> {
        Self::new(
            config.rates.iter().map(|(name, rate)| (name.clone(), *rate)),
            config.default_rate,
        )
    }

    /// Per-hour rate for `name`, falling back to the default rate
    pub fn lookup(&self, name: &str) -> f64 {
        self.rates.get(name).copied().unwrap_or(self.default_rate)
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.rates.contains_key(name)
    }

    /// Known appliance names, in table order (the front end's suggestion list)
    pub fn known_appliances(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Known appliances with their rates, in table order
    pub fn rates(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }
}

impl Default for CostRateTable {
    fn default() -> Self {
        let config = PricingConfig::default();
        Self {
            rates: config.rates,
            default_rate: config.default_rate,
        }
    }
}

impl CostEstimator for CostRateTable {
    fn daily_cost(&self, name: &str, hours: f64) -> f64 {
        self.lookup(name) * hours
    }

    fn name(&self) -> &str {
        "Rate table"
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(Error::validation(format!(
            "rate for '{}' must be a non-negative number (got {})",
            name, rate
        )));
    }
    Ok(())
}
