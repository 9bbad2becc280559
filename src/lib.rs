//! Trace DSP Library
//!
//! In-memory signal processing for evenly-sampled seismic traces.
//!
//! A [`Trace`] couples one contiguous sample array with its headers: the
//! sampling interval, the time bounds, derived amplitude statistics, and the
//! sensor orientation. The operations in [`ops`] mutate the samples and
//! always finish by re-deriving the dependent headers, so the documented
//! invariants hold whenever a call returns.
//!
//! # Features
//!
//! - **Amplitude**: scalar add / multiply / divide
//! - **Windowing**: cut to a time window with clamp-and-warn bounds
//! - **Calculus**: 2/3/5-point differentiation, trapezium and rectangle
//!   integration
//! - **Resampling**: quadratic-spline interpolation onto a new grid
//! - **Spectra**: one-sided FFT, Hilbert envelope
//! - **Conditioning**: mean/trend removal, end tapering, time shift,
//!   reversal
//! - **Rotation**: pairwise passive rotation of orthogonal components
//!
//! # Quick Start
//!
//! ```
//! use trace_dsp::{cut, remove_mean, taper, Trace, TaperForm};
//!
//! let samples = (0..100).map(|i| f64::from(i % 7)).collect();
//! let mut trace = Trace::new(samples, 0.01, 0.0)?;
//!
//! remove_mean(&mut trace)?;
//! taper(&mut trace, TaperForm::Hanning, 0.05)?;
//! cut(&mut trace, 0.2, 0.7)?;
//!
//! assert_eq!(trace.npts, 51);
//! # Ok::<(), trace_dsp::TraceError>(())
//! ```
//!
//! Every operation also has a `*_all` list form that applies the scalar form
//! per element; a failure partway through a list leaves earlier elements
//! already processed.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod math;
pub mod ops;
pub mod trace;

// Re-exports for convenient access
pub use error::{Result, TraceError};
pub use ops::{
    add, add_all, cut, cut_all, differentiate, differentiate_all, divide, divide_all, envelope,
    envelope_all, fft, fft_all, integrate, integrate_all, interpolate, interpolate_all, multiply,
    multiply_all, remove_mean, remove_mean_all, remove_trend, remove_trend_all, reverse,
    reverse_all, rotate_through, rotate_through_all, rotate_through_copy, taper, taper_all,
    time_shift, time_shift_all, Quadrature, ResampleSpec, Spectrum, TaperForm,
};
pub use trace::{component_name, update_headers_all, Trace};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
