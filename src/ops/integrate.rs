//! Numerical integration by quadrature rules.

use crate::error::{Result, TraceError};
use crate::trace::Trace;

/// Quadrature rule for [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrature {
    /// Running cumulative trapezium rule. Each output sample sits between
    /// two input samples, so the count drops by one and the begin time
    /// advances by half a sample.
    #[default]
    Trapezium,

    /// Running cumulative rectangle rule applied in place; the first sample
    /// and the time origin are unchanged.
    Rectangle,
}

/// Replace the samples with their running integral, then re-derive headers.
///
/// # Errors
///
/// Returns [`TraceError::InvalidArgument`] when the trapezium rule is asked
/// to integrate fewer than two samples, and [`TraceError::InvalidState`] for
/// a trace with no samples.
pub fn integrate(trace: &mut Trace, rule: Quadrature) -> Result<()> {
    let delta = trace.delta;

    match rule {
        Quadrature::Trapezium => {
            if trace.samples.len() < 2 {
                return Err(TraceError::invalid_argument(format!(
                    "trapezium integration needs at least 2 samples, got {}",
                    trace.samples.len()
                )));
            }

            let mut total = 0.0;
            let integral: Vec<f64> = trace
                .samples
                .windows(2)
                .map(|w| {
                    total += (delta / 2.0) * (w[0] + w[1]);
                    total
                })
                .collect();

            trace.samples = integral;
            trace.b += delta / 2.0;
        }
        Quadrature::Rectangle => {
            for i in 1..trace.samples.len() {
                trace.samples[i] = delta * trace.samples[i] + trace.samples[i - 1];
            }
        }
    }

    trace.update_headers()
}

/// Integrate every trace with the same rule.
///
/// # Errors
///
/// Fails on the first erroring element; earlier elements stay integrated.
pub fn integrate_all(traces: &mut [Trace], rule: Quadrature) -> Result<()> {
    for trace in traces {
        integrate(trace, rule)?;
    }
    Ok(())
}
