//! Numerical differentiation by finite-difference stencils.
//!
//! Three stencils are supported, selected by point count:
//!
//! - **2-point** forward difference, first-order. The estimate sits halfway
//!   between the original sample times, so the begin time moves by half a
//!   sample.
//! - **3-point** central difference, second-order. One sample is dropped
//!   from each end.
//! - **5-point** central difference, fourth-order. Two samples are dropped
//!   from each end so the wide stencil has full support at every retained
//!   point; no lower-order edge fallback is applied.

use crate::error::{Result, TraceError};
use crate::trace::Trace;

/// Replace the samples with their numerical derivative.
///
/// `npoints` selects the stencil and must be 2, 3, or 5. The sample count
/// shrinks by 1, 2, or 4 and the begin time advances by `delta/2`, `delta`,
/// or `2*delta` respectively; headers are re-derived.
///
/// # Errors
///
/// Returns [`TraceError::InvalidArgument`] for any other stencil size, or
/// when the trace is too short to support the stencil (the trace is left
/// untouched).
pub fn differentiate(trace: &mut Trace, npoints: usize) -> Result<()> {
    let n = trace.samples.len();
    let delta = trace.delta;
    let x = &trace.samples;

    let (derivative, b_shift) = match npoints {
        2 => {
            require_support(n, npoints, 2)?;
            let d: Vec<f64> = x.windows(2).map(|w| (w[1] - w[0]) / delta).collect();
            (d, delta / 2.0)
        }
        3 => {
            require_support(n, npoints, 3)?;
            let d: Vec<f64> = (1..n - 1)
                .map(|i| (x[i + 1] - x[i - 1]) / (2.0 * delta))
                .collect();
            (d, delta)
        }
        5 => {
            require_support(n, npoints, 5)?;
            let d: Vec<f64> = (2..n - 2)
                .map(|i| {
                    (2.0 / 3.0) * (x[i + 1] - x[i - 1]) / delta
                        - (1.0 / 12.0) * (x[i + 2] - x[i - 2]) / delta
                })
                .collect();
            (d, 2.0 * delta)
        }
        other => {
            return Err(TraceError::invalid_argument(format!(
                "differentiation stencil must be 2, 3, or 5 points, got {other}"
            )))
        }
    };

    trace.samples = derivative;
    trace.b += b_shift;
    trace.update_headers()
}

/// Differentiate every trace with the same stencil.
///
/// # Errors
///
/// Fails on the first erroring element; earlier elements stay differentiated.
pub fn differentiate_all(traces: &mut [Trace], npoints: usize) -> Result<()> {
    for trace in traces {
        differentiate(trace, npoints)?;
    }
    Ok(())
}

fn require_support(n: usize, npoints: usize, min: usize) -> Result<()> {
    if n < min {
        return Err(TraceError::invalid_argument(format!(
            "{npoints}-point stencil needs at least {min} samples, got {n}"
        )));
    }
    Ok(())
}
