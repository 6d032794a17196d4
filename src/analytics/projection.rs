//! Next-bill projection from the last three monthly bills

use super::regression::fit_line;
use crate::core::{BillProjection, Error, Result, Trend};

/// Number of past bills the projection is fitted on
pub const BILL_HISTORY_LEN: usize = 3;

/// Three consecutive monthly bills, oldest first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillHistory {
    bills: [f64; BILL_HISTORY_LEN],
}

impl BillHistory {
    /// Every bill must be a finite positive amount
    pub fn new(bills: [f64; BILL_HISTORY_LEN]) -> Result<Self> {
        if let Some(bad) = bills.iter().find(|b| !b.is_finite() || **b <= 0.0) {
            return Err(Error::validation(format!(
                "bill amounts must be positive numbers (got {})",
                bad
            )));
        }
        Ok(Self { bills })
    }

    /// Parse bill amounts as typed into the front end
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Self> {
        if inputs.len() < BILL_HISTORY_LEN {
            return Err(Error::empty_state(format!(
                "enter the last {} months' bills (got {})",
                BILL_HISTORY_LEN,
                inputs.len()
            )));
        }
        if inputs.len() > BILL_HISTORY_LEN {
            return Err(Error::validation(format!(
                "expected exactly {} bills (got {})",
                BILL_HISTORY_LEN,
                inputs.len()
            )));
        }

        let mut bills = [0.0; BILL_HISTORY_LEN];
        for (slot, input) in bills.iter_mut().zip(inputs) {
            let text = input.as_ref().trim();
            *slot = text
                .parse::<f64>()
                .map_err(|_| Error::validation(format!("'{}' is not a valid bill amount", text)))?;
        }
        Self::new(bills)
    }

    pub fn bills(&self) -> &[f64; BILL_HISTORY_LEN] {
        &self.bills
    }
}

/// Projected bill for the month after the history
pub fn project_next_bill(history: &BillHistory) -> Result<f64> {
    project_bill(history).map(|p| p.projected)
}

/// Fit a line through `(1, b1), (2, b2), (3, b3)` and evaluate it at month 4
pub fn project_bill(history: &BillHistory) -> Result<BillProjection> {
    let points: Vec<(f64, f64)> = history
        .bills
        .iter()
        .enumerate()
        .map(|(i, bill)| ((i + 1) as f64, *bill))
        .collect();

    let fit = fit_line(&points)?;
    let projected = fit.at((BILL_HISTORY_LEN + 1) as f64);
    if !projected.is_finite() {
        return Err(Error::validation("projected bill is out of numeric range"));
    }

    let trend = if fit.slope.abs() < 0.01 * fit.intercept.abs() {
        Trend::Stable
    } else if fit.slope > 0.0 {
        Trend::Rising
    } else {
        Trend::Falling
    };

    log::debug!(
        "Bill fit slope={:.4} intercept={:.4} projected={:.2}",
        fit.slope,
        fit.intercept,
        projected
    );

    Ok(BillProjection {
        projected,
        slope: fit.slope,
        intercept: fit.intercept,
        trend,
    })
}
