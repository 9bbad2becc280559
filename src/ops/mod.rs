//! Signal-processing operations on traces.
//!
//! Each operation takes one trace (or a pair, for rotation) by mutable
//! reference, transforms its sample data, and re-derives the headers as its
//! final step. List forms apply the scalar form per element and make no
//! atomicity guarantee across the list: a failure partway through leaves
//! earlier elements already mutated.
//!
//! - [`arithmetic`]: add / multiply / divide by a scalar
//! - [`cut`]: windowing between begin/end times
//! - [`differentiate`]: 2-, 3-, and 5-point finite-difference stencils
//! - [`integrate`]: trapezium and rectangle quadrature
//! - [`interpolate`]: spline resampling onto a new uniform grid
//! - [`spectrum`]: one-sided discrete Fourier transform and envelope
//! - [`detrend`]: mean and linear-trend removal
//! - [`taper`]: symmetric end windows
//! - [`shift`]: circular or zero-padded time shift, sample reversal
//! - [`rotate`]: pairwise horizontal-component rotation

pub mod arithmetic;
pub mod cut;
pub mod detrend;
pub mod differentiate;
pub mod integrate;
pub mod interpolate;
pub mod rotate;
pub mod shift;
pub mod spectrum;
pub mod taper;

pub use arithmetic::{add, add_all, divide, divide_all, multiply, multiply_all};
pub use cut::{cut, cut_all};
pub use detrend::{remove_mean, remove_mean_all, remove_trend, remove_trend_all};
pub use differentiate::{differentiate, differentiate_all};
pub use integrate::{integrate, integrate_all, Quadrature};
pub use interpolate::{interpolate, interpolate_all, ResampleSpec};
pub use rotate::{rotate_through, rotate_through_all, rotate_through_copy};
pub use shift::{reverse, reverse_all, time_shift, time_shift_all};
pub use spectrum::{envelope, envelope_all, fft, fft_all, Spectrum};
pub use taper::{taper, taper_all, TaperForm};
