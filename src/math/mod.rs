//! Numerical collaborators for trace operations.
//!
//! This module provides:
//! - [`spline`]: quadratic spline fitting and evaluation (resampling)
//! - [`hilbert`]: analytic signal via the Hilbert transform (envelope)
//! - [`regression`]: ordinary least squares line fit (detrending)

pub mod hilbert;
pub mod regression;
pub mod spline;

pub use hilbert::analytic_signal;
pub use regression::{linear_fit, LinearFit};
pub use spline::QuadraticSpline;
