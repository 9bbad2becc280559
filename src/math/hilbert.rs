//! Analytic signal via the Hilbert transform.
//!
//! The analytic signal of a real series `x` is `x + j * H{x}`, computed in
//! the frequency domain: forward FFT, zero the negative frequencies and
//! double the positive ones, inverse FFT.

use crate::error::{Result, TraceError};
use num_complex::Complex64;
use rustfft::{num_complex::Complex, FftPlanner};

/// Compute the complex analytic signal of a real sample array.
///
/// The one-sided spectral weights are `1` at DC, `2` on positive-frequency
/// bins, `1` at the Nyquist bin when the length is even, and `0` on
/// negative-frequency bins. The magnitude of the result is the signal
/// envelope.
///
/// # Errors
///
/// Returns [`TraceError::InvalidState`] for an empty input.
pub fn analytic_signal(samples: &[f64]) -> Result<Vec<Complex64>> {
    let n = samples.len();
    if n == 0 {
        return Err(TraceError::invalid_state(
            "analytic signal of an empty array",
        ));
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut buffer: Vec<Complex<f64>> =
        samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    // One-sided weighting: k = 0 stays, 0 < k < n/2 doubles, the Nyquist bin
    // of an even-length series stays, the rest zero out.
    for k in 1..n.div_ceil(2) {
        buffer[k] *= 2.0;
    }
    for bin in buffer.iter_mut().skip(n / 2 + 1) {
        *bin = Complex::new(0.0, 0.0);
    }

    ifft.process(&mut buffer);

    // rustfft leaves the inverse unscaled.
    let scale = 1.0 / n as f64;
    Ok(buffer
        .into_iter()
        .map(|c| Complex64::new(c.re * scale, c.im * scale))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_real_part_is_input() {
        let samples: Vec<f64> = (0..64)
            .map(|i| (2.0 * PI * 3.0 * f64::from(i) / 64.0).sin())
            .collect();

        let analytic = analytic_signal(&samples).unwrap();
        assert_eq!(analytic.len(), samples.len());
        for (a, &x) in analytic.iter().zip(samples.iter()) {
            assert_relative_eq!(a.re, x, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_envelope_of_sinusoid_is_flat() {
        // |analytic| of a pure tone is its amplitude, away from edge bins.
        let amp = 2.5;
        let samples: Vec<f64> = (0..128)
            .map(|i| amp * (2.0 * PI * 8.0 * f64::from(i) / 128.0).cos())
            .collect();

        let analytic = analytic_signal(&samples).unwrap();
        for a in &analytic {
            assert_relative_eq!(a.norm(), amp, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_hilbert_of_cosine_is_sine() {
        let samples: Vec<f64> = (0..64)
            .map(|i| (2.0 * PI * 4.0 * f64::from(i) / 64.0).cos())
            .collect();
        let expected: Vec<f64> = (0..64)
            .map(|i| (2.0 * PI * 4.0 * f64::from(i) / 64.0).sin())
            .collect();

        let analytic = analytic_signal(&samples).unwrap();
        for (a, &h) in analytic.iter().zip(expected.iter()) {
            assert_relative_eq!(a.im, h, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_odd_length() {
        let samples: Vec<f64> = (0..63)
            .map(|i| (2.0 * PI * 5.0 * f64::from(i) / 63.0).cos())
            .collect();

        let analytic = analytic_signal(&samples).unwrap();
        for (a, &x) in analytic.iter().zip(samples.iter()) {
            assert_relative_eq!(a.re, x, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_single_sample() {
        let analytic = analytic_signal(&[3.0]).unwrap();
        assert_eq!(analytic.len(), 1);
        assert_relative_eq!(analytic[0].re, 3.0);
        assert_relative_eq!(analytic[0].im, 0.0);
    }

    #[test]
    fn test_empty_is_invalid_state() {
        assert!(analytic_signal(&[]).is_err());
    }
}
