//! Core module - Session state, configuration, and common types

mod config;
mod error;
mod session;
mod types;

pub use config::{AnalysisConfig, Config, GeneralConfig, PricingConfig};
pub use error::{Error, Result};
pub use session::{Session, SharedSession};
pub use types::{
    AnalysisReport, ApplianceEntry, BillProjection, ReportLine, SavingsTip, Tier, TierThresholds,
    Trend, MAX_HOURS_PER_DAY,
};
