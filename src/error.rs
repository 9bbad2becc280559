//! Error types for trace processing operations.
//!
//! Every operation raises its failure synchronously at the point of the
//! violated precondition; nothing is retried or silently recovered. The only
//! non-fatal paths are the clamp-and-warn bounds in [`crate::ops::cut`].

use thiserror::Error;

/// Main error type for trace processing operations.
#[derive(Error, Debug)]
pub enum TraceError {
    /// Out-of-range or nonsensical parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Cut bounds outside the trace, or inverted.
    #[error("Range error: {context} (trace spans {b}..{e})")]
    RangeError { context: String, b: f64, e: f64 },

    /// Paired inputs have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Paired traces have different sampling intervals.
    #[error("Sampling mismatch: delta {left} vs {right}")]
    SamplingMismatch { left: f64, right: f64 },

    /// Rotation requires components 90 degrees apart in azimuth.
    #[error("Components not orthogonal: azimuths {az1} and {az2}")]
    NotOrthogonal { az1: f64, az2: f64 },

    /// Scalar division by zero.
    #[error("Division by zero")]
    DivideByZero,

    /// A required target specification was not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A trace violates its own preconditions (e.g. no samples).
    #[error("Invalid trace state: {0}")]
    InvalidState(String),
}

/// Result type alias for trace processing operations.
pub type Result<T> = std::result::Result<T, TraceError>;

impl TraceError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a range error for cut bounds against a trace span.
    #[must_use]
    pub fn range(context: impl Into<String>, b: f64, e: f64) -> Self {
        Self::RangeError {
            context: context.into(),
            b,
            e,
        }
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Create a sampling mismatch error.
    #[must_use]
    pub const fn sampling_mismatch(left: f64, right: f64) -> Self {
        Self::SamplingMismatch { left, right }
    }

    /// Create a non-orthogonality error.
    #[must_use]
    pub const fn not_orthogonal(az1: f64, az2: f64) -> Self {
        Self::NotOrthogonal { az1, az2 }
    }

    /// Create a missing argument error.
    #[must_use]
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        Self::MissingArgument(msg.into())
    }

    /// Create an invalid state error.
    #[must_use]
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TraceError::length_mismatch(10, 5);
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("5"));

        let err = TraceError::range("begin time 12 after trace end", 0.0, 9.0);
        assert!(err.to_string().contains("begin time 12"));
    }

    #[test]
    fn test_error_constructors() {
        let _ = TraceError::invalid_argument("bad stencil");
        let _ = TraceError::sampling_mismatch(0.01, 0.02);
        let _ = TraceError::not_orthogonal(0.0, 45.0);
        let _ = TraceError::missing_argument("resample target");
        let _ = TraceError::invalid_state("empty trace");
    }
}
