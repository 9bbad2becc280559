//! Time shifting and sample reversal.

use crate::error::Result;
use crate::trace::Trace;
use log::debug;

/// Shift the samples in time by `tshift` seconds.
///
/// The shift is quantized to `n = round(tshift / delta)` sample positions.
/// When `n` is zero the trace is left unchanged (logged as a diagnostic, not
/// an error). A positive `n` moves samples toward later times. With `wrap`
/// the shift is circular; without it, the samples that wrapped around — the
/// first `n` for a forward shift, the last `|n|` for a backward shift — are
/// zeroed instead. The time origin does not move; headers are re-derived.
///
/// # Errors
///
/// Returns [`crate::TraceError::InvalidState`] for an empty trace.
pub fn time_shift(trace: &mut Trace, tshift: f64, wrap: bool) -> Result<()> {
    trace.update_headers()?;

    let n = (tshift / trace.delta).round() as i64;
    if n == 0 {
        debug!("time shift {tshift} is under half a sample; trace unchanged");
        return Ok(());
    }

    let npts = trace.samples.len();
    let rotation = n.rem_euclid(npts as i64) as usize;
    trace.samples.rotate_right(rotation);

    if !wrap {
        let exposed = (n.unsigned_abs() as usize).min(npts);
        if n > 0 {
            for sample in &mut trace.samples[..exposed] {
                *sample = 0.0;
            }
        } else {
            for sample in &mut trace.samples[npts - exposed..] {
                *sample = 0.0;
            }
        }
    }

    trace.update_headers()
}

/// Shift every trace by the same amount.
///
/// # Errors
///
/// Fails on the first empty trace; earlier elements stay shifted.
pub fn time_shift_all(traces: &mut [Trace], tshift: f64, wrap: bool) -> Result<()> {
    for trace in traces {
        time_shift(trace, tshift, wrap)?;
    }
    Ok(())
}

/// Reverse the sample order in place, then re-derive headers.
///
/// The time origin and sampling interval are unchanged.
///
/// # Errors
///
/// Returns [`crate::TraceError::InvalidState`] for an empty trace.
pub fn reverse(trace: &mut Trace) -> Result<()> {
    trace.samples.reverse();
    trace.update_headers()
}

/// Reverse every trace.
///
/// # Errors
///
/// Fails on the first empty trace; earlier elements stay reversed.
pub fn reverse_all(traces: &mut [Trace]) -> Result<()> {
    for trace in traces {
        reverse(trace)?;
    }
    Ok(())
}
