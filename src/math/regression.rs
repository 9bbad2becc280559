//! Ordinary least squares line fitting.
//!
//! Solves the 2x2 normal equations with nalgebra; used by trend removal,
//! which fits the sample values against the trace's own time vector.

use crate::error::{Result, TraceError};
use nalgebra::{Matrix2, Vector2};

/// A fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Intercept of the fitted line.
    pub intercept: f64,

    /// Slope of the fitted line.
    pub slope: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    #[inline]
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line through parallel `(x, y)` arrays by ordinary least squares.
///
/// # Errors
///
/// Returns [`TraceError::LengthMismatch`] for arrays of different length and
/// [`TraceError::InvalidArgument`] for fewer than two points or a degenerate
/// abscissa (all `x` equal).
pub fn linear_fit(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(TraceError::length_mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(TraceError::invalid_argument(format!(
            "line fit needs at least 2 points, got {}",
            x.len()
        )));
    }

    let n = x.len() as f64;
    let sx: f64 = x.iter().sum();
    let sxx: f64 = x.iter().map(|&v| v * v).sum();
    let sy: f64 = y.iter().sum();
    let sxy: f64 = x.iter().zip(y.iter()).map(|(&a, &b)| a * b).sum();

    let normal = Matrix2::new(n, sx, sx, sxx);
    let rhs = Vector2::new(sy, sxy);

    let solution = normal.lu().solve(&rhs).ok_or_else(|| {
        TraceError::invalid_argument("degenerate abscissa in line fit")
    })?;

    Ok(LinearFit {
        intercept: solution[0],
        slope: solution[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|&v| 3.0 * v - 7.0).collect();

        let fit = linear_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, -7.0, epsilon = 1e-10);
        assert_relative_eq!(fit.eval(5.0), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_symmetric_residuals() {
        // Points symmetric about a line fit to that line.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, -1.0, 1.0, -1.0];

        let fit = linear_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, -0.4, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 0.6, epsilon = 1e-10);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            linear_fit(&[0.0, 1.0], &[0.0]),
            Err(TraceError::LengthMismatch { .. })
        ));
        assert!(linear_fit(&[0.0], &[0.0]).is_err());
        assert!(linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    }
}
