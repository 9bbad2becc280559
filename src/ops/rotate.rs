//! Pairwise rotation of orthogonal horizontal components.
//!
//! Rotation is passive: the sensor reference frame turns clockwise by `phi`
//! degrees about the vertical axis, so the observed particle motion appears
//! to rotate the opposite sense. Both traces of a pair mutate as one atomic
//! step — every precondition is checked before either is touched.

use crate::error::{Result, TraceError};
use crate::trace::{component_name, Trace};
use nalgebra::{Matrix2, Vector2};

/// Angular tolerance, in degrees, for the orthogonality check.
const ORTHOGONALITY_TOL: f64 = 1e-6;

/// Rotate two orthogonal-component traces clockwise by `phi` degrees.
///
/// Each co-indexed sample pair is mapped through the passive rotation matrix
/// `[[cos phi, sin phi], [-sin phi, cos phi]]`. Both component azimuths
/// advance by `phi` (mod 360) and the component names are regenerated from
/// the new azimuths; headers are re-derived for both traces.
///
/// # Errors
///
/// - [`TraceError::NotOrthogonal`] when the azimuths are not 90 degrees
///   apart modulo 180 (within tolerance).
/// - [`TraceError::LengthMismatch`] for unequal sample counts.
/// - [`TraceError::SamplingMismatch`] for unequal sampling intervals.
///
/// All checks precede any mutation.
pub fn rotate_through(trace1: &mut Trace, trace2: &mut Trace, phi: f64) -> Result<()> {
    let separation = (trace1.cmpaz - trace2.cmpaz).rem_euclid(180.0);
    if (separation - 90.0).abs() > ORTHOGONALITY_TOL {
        return Err(TraceError::not_orthogonal(trace1.cmpaz, trace2.cmpaz));
    }
    if trace1.samples.len() != trace2.samples.len() {
        return Err(TraceError::length_mismatch(
            trace1.samples.len(),
            trace2.samples.len(),
        ));
    }
    if (trace1.delta - trace2.delta).abs() > f64::EPSILON {
        return Err(TraceError::sampling_mismatch(trace1.delta, trace2.delta));
    }
    if trace1.samples.is_empty() {
        return Err(TraceError::invalid_state("cannot rotate empty traces"));
    }

    let (sin, cos) = phi.to_radians().sin_cos();
    let rotation = Matrix2::new(cos, sin, -sin, cos);

    for (s1, s2) in trace1.samples.iter_mut().zip(trace2.samples.iter_mut()) {
        let rotated = rotation * Vector2::new(*s1, *s2);
        *s1 = rotated.x;
        *s2 = rotated.y;
    }

    for trace in [&mut *trace1, &mut *trace2] {
        trace.cmpaz = (trace.cmpaz + phi).rem_euclid(360.0);
        trace.kcmpnm = component_name(trace.cmpaz);
        trace.update_headers()?;
    }
    Ok(())
}

/// Rotate consecutive pairs `(0,1), (2,3), ...` of a trace list.
///
/// # Errors
///
/// Returns [`TraceError::InvalidArgument`] for an odd-length list (checked
/// before any pair is touched), or the first per-pair error; earlier pairs
/// stay rotated.
pub fn rotate_through_all(traces: &mut [Trace], phi: f64) -> Result<()> {
    if traces.len() % 2 != 0 {
        return Err(TraceError::invalid_argument(format!(
            "pairwise rotation needs an even number of traces, got {}",
            traces.len()
        )));
    }

    for pair in traces.chunks_exact_mut(2) {
        let (first, second) = pair.split_at_mut(1);
        rotate_through(&mut first[0], &mut second[0], phi)?;
    }
    Ok(())
}

/// Rotate copies of two traces, leaving the originals untouched.
///
/// # Errors
///
/// Same preconditions as [`rotate_through`].
pub fn rotate_through_copy(trace1: &Trace, trace2: &Trace, phi: f64) -> Result<(Trace, Trace)> {
    let mut rotated1 = trace1.clone();
    let mut rotated2 = trace2.clone();
    rotate_through(&mut rotated1, &mut rotated2, phi)?;
    Ok((rotated1, rotated2))
}
