//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound for daily usage of a single appliance
pub const MAX_HOURS_PER_DAY: u8 = 24;

/// A single appliance and how many hours a day it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceEntry {
    pub name: String,
    pub hours_per_day: u8,
}

impl ApplianceEntry {
    pub fn new(name: &str, hours_per_day: u8) -> Self {
        Self {
            name: name.to_string(),
            hours_per_day,
        }
    }
}

/// Usage-intensity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    High,
    Moderate,
    Efficient,
}

impl Tier {
    /// Translation key for the tier label
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Tier::High => "tier.high",
            Tier::Moderate => "tier.moderate",
            Tier::Efficient => "tier.efficient",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::High => "HIGH",
            Tier::Moderate => "MODERATE",
            Tier::Efficient => "EFFICIENT",
        };
        f.write_str(label)
    }
}

/// Hour thresholds separating the usage tiers
///
/// Usage strictly above `high` is [`Tier::High`], strictly above `moderate`
/// is [`Tier::Moderate`], anything else is [`Tier::Efficient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: u8,
    pub moderate: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { high: 8, moderate: 4 }
    }
}

/// One appliance row of an [`AnalysisReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub name: String,
    pub hours_per_day: u8,
    /// Share of the ledger's total hours (0-100)
    pub percentage: f64,
    pub daily_cost: f64,
    pub tier: Tier,
}

/// Derived usage report, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_hours: u32,
    pub total_daily_cost: f64,
    pub lines: Vec<ReportLine>,
}

/// Direction of the fitted bill trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Next-period bill projected from a least-squares line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillProjection {
    pub projected: f64,
    pub slope: f64,
    pub intercept: f64,
    pub trend: Trend,
}

/// Estimated savings from running one appliance fewer hours a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsTip {
    pub name: String,
    pub reduce_by: u8,
    pub savings: f64,
}
