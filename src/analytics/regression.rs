//! Ordinary least-squares line fitting

use crate::core::{Error, Result};

/// Best-fit line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination (1.0 = perfect fit)
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line through `points` by least squares
///
/// Needs at least two points with distinct x values.
pub fn fit_line(points: &[(f64, f64)]) -> Result<LinearFit> {
    if points.len() < 2 {
        return Err(Error::validation(format!(
            "a line fit needs at least 2 points (got {})",
            points.len()
        )));
    }
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(Error::validation("a line fit needs finite coordinates"));
    }

    // Dividing before summing keeps the means finite for values near f64::MAX
    let n = points.len() as f64;
    let mean_x: f64 = points.iter().map(|p| p.0 / n).sum();
    let mean_y: f64 = points.iter().map(|p| p.1 / n).sum();

    let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = points.iter().map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();

    if sxx == 0.0 {
        return Err(Error::validation("a line fit needs at least 2 distinct x values"));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(Error::validation("line fit is out of numeric range"));
    }

    let ss_tot: f64 = points.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = points
        .iter()
        .map(|(x, y)| (y - (intercept + slope * x)).powi(2))
        .sum();
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let fit = fit_line(&[(1.0, 100.0), (2.0, 110.0), (3.0, 120.0)]).unwrap();
        assert!((fit.slope - 10.0).abs() < 1e-9);
        assert!((fit.intercept - 90.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
        assert!((fit.at(4.0) - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_points() {
        // slope = 4/7, intercept = 36.5
        let points = [(6.0, 30.0), (5.0, 100.0), (8.0, 20.0), (2.0, 10.0), (4.0, 25.0), (3.0, 50.0)];
        let fit = fit_line(&points).unwrap();
        assert!((fit.slope - 4.0 / 7.0).abs() < 1e-9);
        assert!((fit.intercept - 36.5).abs() < 1e-9);
        assert!(fit.r_squared < 0.1);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(fit_line(&[]).is_err());
        assert!(fit_line(&[(1.0, 2.0)]).is_err());
        assert!(fit_line(&[(3.0, 1.0), (3.0, 5.0)]).is_err());
        assert!(fit_line(&[(1.0, f64::NAN), (2.0, 1.0)]).is_err());
    }

    #[test]
    fn test_large_values() {
        let fit = fit_line(&[(1.0, 1e308), (2.0, 1e308), (3.0, 1e308)]).unwrap();
        assert!((fit.intercept / 1e308 - 1.0).abs() < 1e-9);
        assert!(fit.slope.abs() < 1e300);

        // The slope of these points exceeds f64::MAX
        assert!(matches!(
            fit_line(&[(1.0, -1.7e308), (2.0, 1.7e308)]),
            Err(Error::Validation(_))
        ));
    }
}
