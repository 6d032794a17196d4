//! Configuration management

use crate::core::{Error, Result, TierThresholds, MAX_HOURS_PER_DAY};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("powerbill-tracker");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the analytics cannot work with
    pub fn validate(&self) -> Result<()> {
        self.analysis.thresholds()?;

        if self.analysis.reduction_hours > MAX_HOURS_PER_DAY {
            return Err(Error::Config(format!(
                "reduction_hours must be at most {}",
                MAX_HOURS_PER_DAY
            )));
        }

        let bad_rate = |rate: f64| !rate.is_finite() || rate < 0.0;
        if bad_rate(self.pricing.default_rate) {
            return Err(Error::Config("default_rate must be a non-negative number".to_string()));
        }
        if let Some((name, _)) = self.pricing.rates.iter().find(|(_, rate)| bad_rate(**rate)) {
            return Err(Error::Config(format!("Rate for '{}' must be a non-negative number", name)));
        }

        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
    /// Currency symbol shown next to amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_language() -> String { "auto".to_string() }
fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Per-hour cost rates by appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Rate applied to appliances missing from `rates`
    #[serde(default = "default_rate")]
    pub default_rate: f64,
    /// Known appliances and their per-hour cost, in suggestion order
    #[serde(default = "default_rates")]
    pub rates: IndexMap<String, f64>,
}

fn default_rate() -> f64 { 5.0 }

/// Daily cost over daily hours for the reference appliance set
fn default_rates() -> IndexMap<String, f64> {
    [
        ("Fan", 30.0 / 6.0),
        ("Air Conditioner", 100.0 / 5.0),
        ("Refrigerator", 20.0 / 8.0),
        ("TV", 25.0 / 4.0),
        ("Washing Machine", 10.0 / 2.0),
        ("Heater", 50.0 / 3.0),
    ]
    .into_iter()
    .map(|(name, rate)| (name.to_string(), rate))
    .collect()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_rate: default_rate(),
            rates: default_rates(),
        }
    }
}

/// Usage analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Hours per day above which usage is HIGH
    #[serde(default = "default_high_threshold")]
    pub high_threshold_hours: u8,
    /// Hours per day above which usage is MODERATE
    #[serde(default = "default_moderate_threshold")]
    pub moderate_threshold_hours: u8,
    /// Hours cut per appliance when estimating savings
    #[serde(default = "default_reduction_hours")]
    pub reduction_hours: u8,
}

fn default_high_threshold() -> u8 { 8 }
fn default_moderate_threshold() -> u8 { 4 }
fn default_reduction_hours() -> u8 { 2 }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            high_threshold_hours: default_high_threshold(),
            moderate_threshold_hours: default_moderate_threshold(),
            reduction_hours: default_reduction_hours(),
        }
    }
}

impl AnalysisConfig {
    /// Tier thresholds, checked for `moderate < high <= 24`
    pub fn thresholds(&self) -> Result<TierThresholds> {
        let (high, moderate) = (self.high_threshold_hours, self.moderate_threshold_hours);
        if moderate >= high || high > MAX_HOURS_PER_DAY {
            return Err(Error::Config(format!(
                "Tier thresholds must satisfy moderate < high <= {} (got {} / {})",
                MAX_HOURS_PER_DAY, moderate, high
            )));
        }
        Ok(TierThresholds { high, moderate })
    }
}
