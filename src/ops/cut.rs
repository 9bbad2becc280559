//! Windowing a trace between begin and end times.

use crate::error::{Result, TraceError};
use crate::trace::Trace;
use log::warn;

/// Cut a trace to the window `[b_cut, e_cut]`, given relative to the trace's
/// own time origin.
///
/// Bounds that are merely too permissive are clamped with a warning: a begin
/// time before the trace start becomes the trace start, an end time past the
/// trace end becomes the trace end. Bounds that place the window outside the
/// trace entirely, or an inverted window, are errors.
///
/// The kept range is computed on the sample grid as 1-based inclusive
/// indices `ib = round((b_cut - b)/delta) + 1` and
/// `ie = npts - round((e - e_cut)/delta)`; the begin time moves to the first
/// kept sample and headers are re-derived.
///
/// # Errors
///
/// Returns [`TraceError::RangeError`] when `b_cut` exceeds the trace end,
/// `e_cut` precedes the trace start, or the window is inverted.
pub fn cut(trace: &mut Trace, b_cut: f64, e_cut: f64) -> Result<()> {
    let (b, e, delta) = (trace.b, trace.e, trace.delta);
    let npts = trace.samples.len() as i64;

    if b_cut > e {
        return Err(TraceError::range(
            format!("cut begin time {b_cut} is after the trace end"),
            b,
            e,
        ));
    }
    if e_cut < b {
        return Err(TraceError::range(
            format!("cut end time {e_cut} is before the trace start"),
            b,
            e,
        ));
    }

    let b_cut = if b_cut < b {
        warn!("cut begin time {b_cut} precedes trace start; clamped to {b}");
        b
    } else {
        b_cut
    };
    let e_cut = if e_cut > e {
        warn!("cut end time {e_cut} exceeds trace end; clamped to {e}");
        e
    } else {
        e_cut
    };

    // 1-based inclusive sample indices of the kept window.
    let ib = ((b_cut - b) / delta).round() as i64 + 1;
    let ie = npts - ((e - e_cut) / delta).round() as i64;

    if ib > ie {
        return Err(TraceError::range(
            format!("cut window {b_cut}..{e_cut} rounds to an empty range"),
            b,
            e,
        ));
    }

    trace.samples = trace.samples[(ib - 1) as usize..ie as usize].to_vec();
    trace.b = b + delta * (ib - 1) as f64;
    trace.update_headers()
}

/// Cut each trace to its own window from parallel begin/end time arrays.
///
/// # Errors
///
/// Returns [`TraceError::LengthMismatch`] when the time arrays do not match
/// the trace list in length (checked before any trace is touched), or the
/// first per-element error; earlier elements stay cut.
pub fn cut_all(traces: &mut [Trace], begins: &[f64], ends: &[f64]) -> Result<()> {
    if begins.len() != ends.len() {
        return Err(TraceError::length_mismatch(begins.len(), ends.len()));
    }
    if begins.len() != traces.len() {
        return Err(TraceError::length_mismatch(traces.len(), begins.len()));
    }

    for ((trace, &b_cut), &e_cut) in traces.iter_mut().zip(begins).zip(ends) {
        cut(trace, b_cut, e_cut)?;
    }
    Ok(())
}
