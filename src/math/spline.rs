//! Quadratic spline fitting for trace resampling.
//!
//! Fits a degree-2 piecewise polynomial through `(time, value)` pairs with
//! continuous value and first derivative at every interior knot, then
//! evaluates it at arbitrary query points. Queries outside the knot span are
//! evaluated on the nearest end segment.

use crate::error::{Result, TraceError};

/// A degree-2 spline through a set of strictly increasing knots.
///
/// Within segment `i` the spline is
/// `q(t) = y[i] + z[i] * dt + c[i] * dt^2` with `dt = t - t[i]`, where the
/// knot slopes `z` satisfy the C1 continuity recurrence
/// `z[i+1] = 2 * (y[i+1] - y[i]) / h[i] - z[i]`. The first slope is taken
/// from the parabola through the first three knots, which keeps the
/// recurrence exact for any global degree-2 input (two knots fall back to
/// the secant).
#[derive(Debug, Clone)]
pub struct QuadraticSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    slopes: Vec<f64>,
}

impl QuadraticSpline {
    /// Fit a quadratic spline through parallel `(t, y)` arrays.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::LengthMismatch`] when the arrays differ in
    /// length and [`TraceError::InvalidArgument`] for fewer than two knots
    /// or a non-increasing abscissa.
    pub fn fit(t: &[f64], y: &[f64]) -> Result<Self> {
        if t.len() != y.len() {
            return Err(TraceError::length_mismatch(t.len(), y.len()));
        }
        if t.len() < 2 {
            return Err(TraceError::invalid_argument(format!(
                "spline fit needs at least 2 knots, got {}",
                t.len()
            )));
        }
        for w in t.windows(2) {
            if w[1] <= w[0] {
                return Err(TraceError::invalid_argument(
                    "spline knots must be strictly increasing",
                ));
            }
        }

        let mut slopes = Vec::with_capacity(t.len());
        slopes.push(initial_slope(t, y));
        for i in 0..t.len() - 1 {
            let secant = (y[i + 1] - y[i]) / (t[i + 1] - t[i]);
            let next = 2.0 * secant - slopes[i];
            slopes.push(next);
        }

        Ok(Self {
            knots: t.to_vec(),
            values: y.to_vec(),
            slopes,
        })
    }

    /// Evaluate the spline at a single point.
    #[must_use]
    pub fn eval(&self, t: f64) -> f64 {
        // partition_point gives the first knot > t; segment index is one less,
        // clamped so out-of-span queries use the end segments.
        let seg = self
            .knots
            .partition_point(|&k| k <= t)
            .saturating_sub(1)
            .min(self.knots.len() - 2);

        let h = self.knots[seg + 1] - self.knots[seg];
        let dt = t - self.knots[seg];
        let c = (self.slopes[seg + 1] - self.slopes[seg]) / (2.0 * h);
        self.values[seg] + self.slopes[seg] * dt + c * dt * dt
    }

    /// Evaluate the spline at many points.
    #[must_use]
    pub fn eval_many(&self, ts: &[f64]) -> Vec<f64> {
        ts.iter().map(|&t| self.eval(t)).collect()
    }
}

/// Slope at the first knot: the derivative at `t[0]` of the parabola through
/// the first three knots, or the plain secant when only two knots exist.
fn initial_slope(t: &[f64], y: &[f64]) -> f64 {
    if t.len() < 3 {
        return (y[1] - y[0]) / (t[1] - t[0]);
    }

    let (t0, t1, t2) = (t[0], t[1], t[2]);
    y[0] * (2.0 * t0 - t1 - t2) / ((t0 - t1) * (t0 - t2))
        + y[1] * (t0 - t2) / ((t1 - t0) * (t1 - t2))
        + y[2] * (t0 - t1) / ((t2 - t0) * (t2 - t1))
}
