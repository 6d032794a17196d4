//! Regression-derived cost model

use super::CostEstimator;
use crate::analytics::{fit_line, LinearFit};
use crate::core::Result;

/// Reference (hours per day, cost per day) samples for
/// Fan, Air Conditioner, Refrigerator, Washing Machine, TV and Heater
pub const REFERENCE_SAMPLES: [(f64, f64); 6] = [
    (6.0, 30.0),
    (5.0, 100.0),
    (8.0, 20.0),
    (2.0, 10.0),
    (4.0, 25.0),
    (3.0, 50.0),
];

/// Daily cost predicted from daily hours by a fitted line
///
/// The model ignores the appliance name: one line prices every appliance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    fit: LinearFit,
}

impl CostModel {
    /// Fit the model on `(hours per day, cost per day)` samples
    pub fn fit(samples: &[(f64, f64)]) -> Result<Self> {
        let fit = fit_line(samples)?;
        log::debug!(
            "Cost model fitted on {} samples: slope={:.4} intercept={:.4} r2={:.3}",
            samples.len(),
            fit.slope,
            fit.intercept,
            fit.r_squared
        );
        Ok(Self { fit })
    }

    /// Model fitted on [`REFERENCE_SAMPLES`]
    pub fn reference() -> Result<Self> {
        Self::fit(&REFERENCE_SAMPLES)
    }

    pub fn predict(&self, hours: f64) -> f64 {
        self.fit.at(hours)
    }

    /// Predicted saving from cutting `reduce_by` hours, never below zero hours
    pub fn estimate_savings(&self, hours: u8, reduce_by: u8) -> f64 {
        let reduced = hours.saturating_sub(reduce_by);
        self.predict(f64::from(hours)) - self.predict(f64::from(reduced))
    }

    pub fn slope(&self) -> f64 {
        self.fit.slope
    }

    pub fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.fit.r_squared
    }
}

impl CostEstimator for CostModel {
    fn daily_cost(&self, _name: &str, hours: f64) -> f64 {
        self.predict(hours)
    }

    fn name(&self) -> &str {
        "Regression model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_reference_fit() {
        let model = CostModel::reference().unwrap();
        assert!((model.slope() - 4.0 / 7.0).abs() < 1e-9);
        assert!((model.intercept() - 36.5).abs() < 1e-9);
    }

    #[test]
    fn test_savings_are_slope_times_hours_cut() {
        let model = CostModel::reference().unwrap();
        let expected = 2.0 * model.slope();

        assert!((model.estimate_savings(6, 2) - expected).abs() < 1e-9);
        assert!((model.estimate_savings(2, 2) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_savings_clamped_at_zero_hours() {
        let model = CostModel::reference().unwrap();

        assert!((model.estimate_savings(1, 2) - model.slope()).abs() < 1e-9);
        assert_eq!(model.estimate_savings(0, 2), 0.0);
    }

    #[test]
    fn test_fit_needs_spread() {
        assert!(matches!(CostModel::fit(&[(3.0, 10.0)]), Err(Error::Validation(_))));
        assert!(matches!(
            CostModel::fit(&[(3.0, 10.0), (3.0, 12.0)]),
            Err(Error::Validation(_))
        ));
    }
}
