//! Mean and linear-trend removal.

use crate::error::Result;
use crate::math::regression::linear_fit;
use crate::trace::Trace;

/// Subtract the arithmetic mean of the samples from every sample.
///
/// # Errors
///
/// Returns [`crate::TraceError::InvalidState`] for a trace with no samples.
pub fn remove_mean(trace: &mut Trace) -> Result<()> {
    // Re-derive first so a stale depmen cannot leak into the subtraction.
    trace.update_headers()?;
    let mean = trace.depmen;
    for sample in &mut trace.samples {
        *sample -= mean;
    }
    trace.update_headers()
}

/// Remove the mean of every trace.
///
/// # Errors
///
/// Fails on the first trace with no samples.
pub fn remove_mean_all(traces: &mut [Trace]) -> Result<()> {
    for trace in traces {
        remove_mean(trace)?;
    }
    Ok(())
}

/// Fit a line to the samples over the trace's own time vector by ordinary
/// least squares, and subtract the fitted line from every sample.
///
/// # Errors
///
/// Returns [`crate::TraceError::InvalidArgument`] for a trace with fewer
/// than two samples and [`crate::TraceError::InvalidState`] for an empty
/// trace.
pub fn remove_trend(trace: &mut Trace) -> Result<()> {
    let times = trace.times();
    let fit = linear_fit(&times, &trace.samples)?;

    for (sample, t) in trace.samples.iter_mut().zip(times) {
        *sample -= fit.eval(t);
    }
    trace.update_headers()
}

/// Remove the linear trend of every trace.
///
/// # Errors
///
/// Fails on the first erroring element; earlier elements stay detrended.
pub fn remove_trend_all(traces: &mut [Trace]) -> Result<()> {
    for trace in traces {
        remove_trend(trace)?;
    }
    Ok(())
}
