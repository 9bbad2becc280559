//! One-sided discrete Fourier transform and envelope.

use crate::error::{Result, TraceError};
use crate::math::hilbert::analytic_signal;
use crate::trace::Trace;
use num_complex::Complex64;
use rustfft::{num_complex::Complex, FftPlanner};

/// One-sided spectrum of a trace.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency of each bin in Hz.
    pub frequencies: Vec<f64>,

    /// Complex Fourier coefficient of each bin.
    pub coefficients: Vec<Complex64>,
}

/// Compute the one-sided discrete Fourier transform of a trace.
///
/// Non-mutating. The spectrum has `npts / 2 + 1` bins spaced
/// `1 / (npts * delta)` Hz apart, with bin `k` (1-based) at frequency
/// `k / (npts * delta)`; the coefficients are the first bins of the full
/// forward transform of the samples.
///
/// # Errors
///
/// Returns [`TraceError::InvalidState`] for a trace with no samples.
pub fn fft(trace: &Trace) -> Result<Spectrum> {
    let npts = trace.samples.len();
    if npts == 0 {
        return Err(TraceError::invalid_state(
            "cannot transform a trace with no samples",
        ));
    }

    let bins = npts / 2 + 1;
    let spacing = 1.0 / (npts as f64 * trace.delta);
    let frequencies: Vec<f64> = (1..=bins).map(|k| k as f64 * spacing).collect();

    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_forward(npts);
    let mut buffer: Vec<Complex<f64>> = trace
        .samples
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect();
    plan.process(&mut buffer);

    let coefficients = buffer
        .into_iter()
        .take(bins)
        .map(|c| Complex64::new(c.re, c.im))
        .collect();

    Ok(Spectrum {
        frequencies,
        coefficients,
    })
}

/// Compute the one-sided spectrum of every trace.
///
/// # Errors
///
/// Fails on the first trace with no samples.
pub fn fft_all(traces: &[Trace]) -> Result<Vec<Spectrum>> {
    traces.iter().map(fft).collect()
}

/// Replace the samples with the envelope of the trace.
///
/// The envelope is the magnitude of the analytic signal obtained through the
/// Hilbert transform. Headers are re-derived.
///
/// # Errors
///
/// Returns [`TraceError::InvalidState`] for a trace with no samples.
pub fn envelope(trace: &mut Trace) -> Result<()> {
    let analytic = analytic_signal(&trace.samples)?;
    for (sample, a) in trace.samples.iter_mut().zip(analytic) {
        *sample = a.norm();
    }
    trace.update_headers()
}

/// Replace every trace's samples with its envelope.
///
/// # Errors
///
/// Fails on the first trace with no samples; earlier elements keep their
/// envelopes.
pub fn envelope_all(traces: &mut [Trace]) -> Result<()> {
    for trace in traces {
        envelope(trace)?;
    }
    Ok(())
}
