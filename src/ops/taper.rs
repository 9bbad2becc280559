//! Symmetric end tapering.

use crate::error::{Result, TraceError};
use crate::trace::Trace;
use std::f64::consts::PI;

/// Window shape for [`taper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaperForm {
    /// `0.5 - 0.5 * cos(pi * i / n)`.
    #[default]
    Hanning,

    /// `0.54 - 0.46 * cos(pi * i / n)`.
    Hamming,

    /// `sin(pi * i / (2 * n))`.
    Cosine,
}

impl TaperForm {
    /// Taper weight at position `i` of an `n`-sample ramp.
    fn weight(self, i: usize, n: usize) -> f64 {
        let x = i as f64 / n as f64;
        match self {
            Self::Hanning => 0.5 - 0.5 * (PI * x).cos(),
            Self::Hamming => 0.54 - 0.46 * (PI * x).cos(),
            Self::Cosine => (PI * x / 2.0).sin(),
        }
    }
}

/// Apply a symmetric taper to both ends of a trace, then re-derive headers.
///
/// The ramp covers the first and last `max(2, floor((npts + 1) * width))`
/// samples; weight `i` of the ramp multiplies sample `i` from the start and
/// the mirrored sample from the end.
///
/// # Errors
///
/// Returns [`TraceError::InvalidArgument`] when `width` is outside
/// `(0, 0.5]` (the trace is left untouched) and
/// [`crate::TraceError::InvalidState`] for an empty trace.
pub fn taper(trace: &mut Trace, form: TaperForm, width: f64) -> Result<()> {
    if !width.is_finite() || width <= 0.0 || width > 0.5 {
        return Err(TraceError::invalid_argument(format!(
            "taper width must be in (0, 0.5], got {width}"
        )));
    }

    let npts = trace.samples.len();
    if npts == 0 {
        return Err(TraceError::invalid_state("cannot taper an empty trace"));
    }

    let n = (((npts + 1) as f64 * width).floor() as usize).max(2).min(npts);

    for i in 0..n {
        let w = form.weight(i, n);
        trace.samples[i] *= w;
        trace.samples[npts - 1 - i] *= w;
    }

    trace.update_headers()
}

/// Taper every trace with the same form and width.
///
/// # Errors
///
/// Fails on the first erroring element; earlier elements stay tapered.
pub fn taper_all(traces: &mut [Trace], form: TaperForm, width: f64) -> Result<()> {
    for trace in traces {
        taper(trace, form, width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ones(n: usize) -> Trace {
        Trace::new(vec![1.0; n], 1.0, 0.0).unwrap()
    }

    #[test]
    fn test_hanning_endpoints() {
        let mut trace = ones(100);
        taper(&mut trace, TaperForm::Hanning, 0.1).unwrap();

        // Ramp covers floor(101 * 0.1) = 10 samples each end.
        assert_relative_eq!(trace.samples[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(trace.samples[99], 0.0, epsilon = 1e-12);
        // The interior is untouched.
        assert_relative_eq!(trace.samples[50], 1.0);
        assert_relative_eq!(trace.samples[10], 1.0);
    }

    #[test]
    fn test_hamming_leaves_residual_at_ends() {
        let mut trace = ones(100);
        taper(&mut trace, TaperForm::Hamming, 0.1).unwrap();

        assert_relative_eq!(trace.samples[0], 0.08, epsilon = 1e-12);
        assert_relative_eq!(trace.samples[99], 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_cosine_ramp() {
        let mut trace = ones(100);
        taper(&mut trace, TaperForm::Cosine, 0.1).unwrap();

        assert_relative_eq!(trace.samples[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(trace.samples[5], (PI * 0.25).sin(), epsilon = 1e-12);
        assert_relative_eq!(trace.samples[94], (PI * 0.25).sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let mut trace = ones(101);
        taper(&mut trace, TaperForm::Hanning, 0.25).unwrap();

        let n = trace.samples.len();
        for i in 0..n / 2 {
            assert_relative_eq!(
                trace.samples[i],
                trace.samples[n - 1 - i],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_width_boundaries() {
        // The closed upper bound must be accepted, everything outside fails.
        let mut trace = ones(50);
        taper(&mut trace, TaperForm::Hanning, 0.5).unwrap();

        for bad in [0.0, -0.1, 0.500_001, 1.0] {
            let mut trace = ones(50);
            let original = trace.samples.clone();
            assert!(matches!(
                taper(&mut trace, TaperForm::Hanning, bad),
                Err(TraceError::InvalidArgument(_))
            ));
            assert_eq!(trace.samples, original);
        }
    }

    #[test]
    fn test_minimum_ramp_is_two_samples() {
        // A tiny width on a short trace still ramps two samples.
        let mut trace = ones(10);
        taper(&mut trace, TaperForm::Hanning, 0.01).unwrap();

        assert_relative_eq!(trace.samples[0], 0.0, epsilon = 1e-12);
        assert!(trace.samples[1] < 1.0);
        assert_relative_eq!(trace.samples[2], 1.0);
    }

    #[test]
    fn test_list_form() {
        let mut traces = vec![ones(20), ones(20)];
        taper_all(&mut traces, TaperForm::Cosine, 0.2).unwrap();
        assert_relative_eq!(traces[0].samples[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(traces[1].samples[19], 0.0, epsilon = 1e-12);
    }
}
