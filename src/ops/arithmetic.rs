//! Elementary scalar arithmetic on trace samples.

use crate::error::{Result, TraceError};
use crate::trace::Trace;

/// Add a scalar to every sample, then re-derive headers.
///
/// # Errors
///
/// Returns [`TraceError::InvalidState`] for a trace with no samples.
pub fn add(trace: &mut Trace, value: f64) -> Result<()> {
    for sample in &mut trace.samples {
        *sample += value;
    }
    trace.update_headers()
}

/// Add a scalar to every sample of every trace.
///
/// # Errors
///
/// Fails on the first trace with no samples.
pub fn add_all(traces: &mut [Trace], value: f64) -> Result<()> {
    for trace in traces {
        add(trace, value)?;
    }
    Ok(())
}

/// Scale every sample by a scalar, then re-derive headers.
///
/// # Errors
///
/// Returns [`TraceError::InvalidState`] for a trace with no samples.
pub fn multiply(trace: &mut Trace, value: f64) -> Result<()> {
    for sample in &mut trace.samples {
        *sample *= value;
    }
    trace.update_headers()
}

/// Scale every sample of every trace.
///
/// # Errors
///
/// Fails on the first trace with no samples.
pub fn multiply_all(traces: &mut [Trace], value: f64) -> Result<()> {
    for trace in traces {
        multiply(trace, value)?;
    }
    Ok(())
}

/// Divide every sample by a scalar, then re-derive headers.
///
/// Equivalent to multiplying by `1 / value`.
///
/// # Errors
///
/// Returns [`TraceError::DivideByZero`] when `value` is zero and
/// [`TraceError::InvalidState`] for a trace with no samples.
pub fn divide(trace: &mut Trace, value: f64) -> Result<()> {
    if value == 0.0 {
        return Err(TraceError::DivideByZero);
    }
    multiply(trace, 1.0 / value)
}

/// Divide every sample of every trace by a scalar.
///
/// # Errors
///
/// Returns [`TraceError::DivideByZero`] when `value` is zero, before any
/// trace is touched.
pub fn divide_all(traces: &mut [Trace], value: f64) -> Result<()> {
    if value == 0.0 {
        return Err(TraceError::DivideByZero);
    }
    for trace in traces {
        divide(trace, value)?;
    }
    Ok(())
}
